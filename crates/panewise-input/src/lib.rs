//! Key-chord parsing and key event encoding.

pub mod encoding;
pub mod keymap;

pub use encoding::{
    decode_kitty_modifiers, encode, encode_chord, encode_sequence, EncodedKeyEvent, KeyEvent,
};
pub use keymap::{parse_chord, split_sequence, Key, KeyChord, Modifiers, NamedKey};
