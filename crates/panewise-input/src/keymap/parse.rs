use panewise_common::KeyError;

use super::types::{Key, KeyChord, Modifiers, NamedKey};

/// Separator between chords in a key sequence (`ctrl+b>n`).
pub const SEQUENCE_DELIMITER: char = '>';

/// Parses a shortcut string like `"ctrl+shift+x"`, `"alt+left"` or
/// `"ctrl+b"` into a [`KeyChord`].
///
/// Every token but the last must be a modifier name. The last token is the
/// key: a single character, a named key (`enter`, `f5`, `pageup`, ...) or a
/// punctuation alias (`plus`, `greater`, ...). Uppercase letters imply
/// `shift`.
pub fn parse_chord(s: &str) -> Result<KeyChord, KeyError> {
    let s = s.trim();
    if s.is_empty() {
        return Err(KeyError::MalformedChord("empty chord".into()));
    }

    let tokens: Vec<&str> = s.split('+').map(str::trim).collect();
    if tokens.iter().any(|t| t.is_empty()) {
        return Err(KeyError::MalformedChord(format!("empty token in {s:?}")));
    }

    let (key_token, modifier_tokens) = tokens
        .split_last()
        .ok_or_else(|| KeyError::MalformedChord(format!("no key in {s:?}")))?;

    let mut mods = Modifiers::empty();
    for token in modifier_tokens {
        let modifier = normalize_modifier(token).ok_or_else(|| {
            KeyError::MalformedChord(format!("unrecognized modifier {token:?} in {s:?}"))
        })?;
        mods |= modifier;
    }

    let (key, implied) = parse_key(key_token)
        .ok_or_else(|| KeyError::MalformedChord(format!("unknown key {key_token:?} in {s:?}")))?;

    Ok(KeyChord::new(mods | implied, key))
}

/// Splits a `>`-separated chord sequence, rejecting empty elements.
pub fn split_sequence(s: &str) -> Result<Vec<&str>, KeyError> {
    if s.trim().is_empty() {
        return Err(KeyError::MalformedChord("empty chord sequence".into()));
    }

    s.split(SEQUENCE_DELIMITER)
        .map(|part| {
            let part = part.trim();
            if part.is_empty() {
                Err(KeyError::MalformedChord(format!(
                    "empty element in sequence {s:?}"
                )))
            } else {
                Ok(part)
            }
        })
        .collect()
}

pub(super) fn normalize_modifier(token: &str) -> Option<Modifiers> {
    match token.to_lowercase().as_str() {
        "shift" | "⇧" => Some(Modifiers::SHIFT),
        "alt" | "opt" | "option" | "⌥" => Some(Modifiers::ALT),
        "ctrl" | "control" | "^" | "⌃" => Some(Modifiers::CTRL),
        "super" | "cmd" | "command" | "⌘" => Some(Modifiers::SUPER),
        "hyper" => Some(Modifiers::HYPER),
        "meta" => Some(Modifiers::META),
        _ => None,
    }
}

/// Returns the key plus any modifier the spelling implies.
fn parse_key(token: &str) -> Option<(Key, Modifiers)> {
    let mut chars = token.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        if c.is_ascii_uppercase() {
            return Some((Key::Char(c.to_ascii_lowercase()), Modifiers::SHIFT));
        }
        return Some((Key::Char(c), Modifiers::empty()));
    }

    let lower = token.to_lowercase();
    let key = match lower.as_str() {
        "enter" | "return" => Key::Named(NamedKey::Enter),
        "tab" => Key::Named(NamedKey::Tab),
        "backspace" => Key::Named(NamedKey::Backspace),
        "escape" | "esc" => Key::Named(NamedKey::Escape),
        "insert" | "ins" => Key::Named(NamedKey::Insert),
        "delete" | "del" => Key::Named(NamedKey::Delete),
        "left" => Key::Named(NamedKey::Left),
        "right" => Key::Named(NamedKey::Right),
        "up" => Key::Named(NamedKey::Up),
        "down" => Key::Named(NamedKey::Down),
        "home" => Key::Named(NamedKey::Home),
        "end" => Key::Named(NamedKey::End),
        "pageup" | "page_up" => Key::Named(NamedKey::PageUp),
        "pagedown" | "page_down" => Key::Named(NamedKey::PageDown),
        "space" => Key::Char(' '),
        "plus" => Key::Char('+'),
        "minus" => Key::Char('-'),
        "greater" | "gt" => Key::Char('>'),
        "less" | "lt" => Key::Char('<'),
        "period" => Key::Char('.'),
        "comma" => Key::Char(','),
        "slash" => Key::Char('/'),
        "backslash" => Key::Char('\\'),
        "semicolon" => Key::Char(';'),
        "percent" => Key::Char('%'),
        other => {
            let n: u8 = other.strip_prefix('f')?.parse().ok()?;
            if !(1..=12).contains(&n) {
                return None;
            }
            Key::Named(NamedKey::F(n))
        }
    };
    Some((key, Modifiers::empty()))
}
