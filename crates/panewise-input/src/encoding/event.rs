use panewise_common::KeyProtocol;

use crate::keymap::{Key, KeyChord, Modifiers};

/// A key press ready for encoding.
///
/// Carries the raw modifier mask plus one flag per modifier; encoders only
/// read the flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub mods: Modifiers,
    pub key: Key,
    pub shift: bool,
    pub alt: bool,
    pub ctrl: bool,
    pub super_key: bool,
    pub hyper: bool,
    pub meta: bool,
}

impl KeyEvent {
    pub fn from_chord(chord: &KeyChord) -> Self {
        let mods = chord.mods;
        Self {
            mods,
            key: chord.key,
            shift: mods.contains(Modifiers::SHIFT),
            alt: mods.contains(Modifiers::ALT),
            ctrl: mods.contains(Modifiers::CTRL),
            super_key: mods.contains(Modifiers::SUPER),
            hyper: mods.contains(Modifiers::HYPER),
            meta: mods.contains(Modifiers::META),
        }
    }

    /// Rebuilds the modifier set from the individual flags.
    pub fn flag_modifiers(&self) -> Modifiers {
        let mut mods = Modifiers::empty();
        mods.set(Modifiers::SHIFT, self.shift);
        mods.set(Modifiers::ALT, self.alt);
        mods.set(Modifiers::CTRL, self.ctrl);
        mods.set(Modifiers::SUPER, self.super_key);
        mods.set(Modifiers::HYPER, self.hyper);
        mods.set(Modifiers::META, self.meta);
        mods
    }
}

impl From<KeyChord> for KeyEvent {
    fn from(chord: KeyChord) -> Self {
        KeyEvent::from_chord(&chord)
    }
}

/// Bytes for one key event, as written to a pane's input stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedKeyEvent {
    protocol: KeyProtocol,
    bytes: Vec<u8>,
}

impl EncodedKeyEvent {
    pub(crate) fn new(protocol: KeyProtocol, bytes: Vec<u8>) -> Self {
        Self { protocol, bytes }
    }

    pub fn protocol(&self) -> KeyProtocol {
        self.protocol
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}
