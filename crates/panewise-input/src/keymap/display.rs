use std::fmt;

use super::types::{Key, KeyChord, Modifiers, NamedKey};

const MODIFIER_NAMES: [(Modifiers, &str); 6] = [
    (Modifiers::CTRL, "ctrl"),
    (Modifiers::ALT, "alt"),
    (Modifiers::SHIFT, "shift"),
    (Modifiers::SUPER, "super"),
    (Modifiers::HYPER, "hyper"),
    (Modifiers::META, "meta"),
];

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Char(' ') => f.write_str("space"),
            Key::Char('+') => f.write_str("plus"),
            Key::Char('>') => f.write_str("greater"),
            Key::Char(c) => write!(f, "{c}"),
            Key::Named(named) => match named {
                NamedKey::Enter => f.write_str("enter"),
                NamedKey::Tab => f.write_str("tab"),
                NamedKey::Backspace => f.write_str("backspace"),
                NamedKey::Escape => f.write_str("escape"),
                NamedKey::Insert => f.write_str("insert"),
                NamedKey::Delete => f.write_str("delete"),
                NamedKey::Left => f.write_str("left"),
                NamedKey::Right => f.write_str("right"),
                NamedKey::Up => f.write_str("up"),
                NamedKey::Down => f.write_str("down"),
                NamedKey::Home => f.write_str("home"),
                NamedKey::End => f.write_str("end"),
                NamedKey::PageUp => f.write_str("pageup"),
                NamedKey::PageDown => f.write_str("pagedown"),
                NamedKey::F(n) => write!(f, "f{n}"),
            },
        }
    }
}

/// Renders in the same grammar `parse_chord` accepts, e.g. `ctrl+shift+x`.
impl fmt::Display for KeyChord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (flag, name) in MODIFIER_NAMES {
            if self.mods.contains(flag) {
                write!(f, "{name}+")?;
            }
        }
        write!(f, "{}", self.key)
    }
}
