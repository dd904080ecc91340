//! kitty keyboard protocol encoding (disambiguate mode).
//!
//! <https://sw.kovidgoyal.net/kitty/keyboard-protocol/>

use crate::keymap::{Key, Modifiers, NamedKey};

use super::event::KeyEvent;
use super::text::{char_bytes, csi_form, low_function_letter, shifted_char, write_csi, CsiForm};

/// Encode a key event for a program that enabled the kitty keyboard protocol.
pub fn encode_kitty(event: &KeyEvent) -> Vec<u8> {
    let mods = event.flag_modifiers();
    let param = 1 + mods.bits();

    match event.key {
        Key::Char(c) => {
            if mods.is_empty() {
                char_bytes(c)
            } else if mods == Modifiers::SHIFT {
                char_bytes(shifted_char(c))
            } else {
                csi_u(c.to_ascii_lowercase() as u32, param)
            }
        }
        Key::Named(named) => encode_named(named, param),
    }
}

fn csi_u(code: u32, param: u8) -> Vec<u8> {
    if param == 1 {
        format!("\x1b[{code}u").into_bytes()
    } else {
        format!("\x1b[{code};{param}u").into_bytes()
    }
}

fn encode_named(key: NamedKey, param: u8) -> Vec<u8> {
    match key {
        NamedKey::Enter if param == 1 => b"\r".to_vec(),
        NamedKey::Tab if param == 1 => b"\t".to_vec(),
        NamedKey::Backspace if param == 1 => b"\x7f".to_vec(),
        NamedKey::Enter => csi_u(13, param),
        NamedKey::Tab => csi_u(9, param),
        NamedKey::Backspace => csi_u(127, param),
        NamedKey::Escape => csi_u(27, param),
        // F3 would collide with the cursor position report.
        NamedKey::F(3) => write_csi(&CsiForm::Tilde(13), param),
        NamedKey::F(n @ 1..=4) => write_csi(&CsiForm::Letter(low_function_letter(n)), param),
        other => match csi_form(other) {
            Some(form) => write_csi(&form, param),
            None => Vec::new(),
        },
    }
}

/// Recover the modifier set from a kitty-encoded `CSI` event.
///
/// Returns `None` for bytes that are not a `CSI` sequence (plain text).
pub fn decode_kitty_modifiers(bytes: &[u8]) -> Option<Modifiers> {
    let body = bytes.strip_prefix(b"\x1b[")?;
    let (last, params) = body.split_last()?;
    if !matches!(last, b'u' | b'~' | b'A'..=b'D' | b'H' | b'F' | b'P' | b'Q' | b'S') {
        return None;
    }

    let params = std::str::from_utf8(params).ok()?;
    let Some(raw) = params.split(';').nth(1) else {
        return Some(Modifiers::empty());
    };
    let value: u8 = raw.split(':').next()?.parse().ok()?;
    Some(Modifiers::from_bits_truncate(value.checked_sub(1)?))
}
