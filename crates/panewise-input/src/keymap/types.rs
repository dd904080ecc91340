use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Modifier set of a chord. Bit values match the kitty keyboard
    /// protocol, so `1 + bits` is the protocol's modifier parameter.
    #[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct Modifiers: u8 {
        const SHIFT = 0b0000_0001;
        const ALT   = 0b0000_0010;
        const CTRL  = 0b0000_0100;
        const SUPER = 0b0000_1000;
        const HYPER = 0b0001_0000;
        const META  = 0b0010_0000;
    }
}

/// Keys that have a name rather than a printable character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NamedKey {
    Enter,
    Tab,
    Backspace,
    Escape,
    Insert,
    Delete,
    Left,
    Right,
    Up,
    Down,
    Home,
    End,
    PageUp,
    PageDown,
    /// Function key `F1`..=`F12`.
    F(u8),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    /// A printable character, stored unshifted (`a`, not `A`).
    Char(char),
    Named(NamedKey),
}

/// One keystroke: a modifier set plus a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KeyChord {
    pub mods: Modifiers,
    pub key: Key,
}

impl KeyChord {
    pub fn new(mods: Modifiers, key: Key) -> Self {
        Self { mods, key }
    }
}
