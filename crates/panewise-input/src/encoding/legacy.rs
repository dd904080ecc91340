//! xterm-style legacy key encoding.

use panewise_common::KeyError;

use crate::keymap::{Key, NamedKey};

use super::event::KeyEvent;
use super::text::{
    char_bytes, csi_form, low_function_letter, shifted_char, write_csi, CsiForm,
};

/// Encode a key event as legacy terminal bytes.
///
/// Fails for super/hyper/meta, which have no legacy representation.
pub fn encode_legacy(event: &KeyEvent) -> Result<Vec<u8>, KeyError> {
    if event.super_key || event.hyper || event.meta {
        return Err(KeyError::UnsupportedTarget(
            "legacy key encoding cannot express super, hyper or meta".into(),
        ));
    }

    let alt_prefix: &[u8] = if event.alt { b"\x1b" } else { b"" };

    match event.key {
        Key::Char(c) => Ok([alt_prefix, &legacy_char(c, event.ctrl, event.shift)[..]].concat()),
        Key::Named(named) => legacy_named(named, event, alt_prefix),
    }
}

/// xterm `modifyCursorKeys` parameter: 1 + shift/alt/ctrl bits.
fn modifier_param(event: &KeyEvent) -> u8 {
    1 + u8::from(event.shift) + 2 * u8::from(event.alt) + 4 * u8::from(event.ctrl)
}

fn legacy_char(c: char, ctrl: bool, shift: bool) -> Vec<u8> {
    if ctrl {
        let control = match c {
            'a'..='z' => Some(c as u8 - b'a' + 1),
            ' ' | '@' | '2' => Some(0x00),
            '[' | '3' => Some(0x1b),
            '\\' | '4' => Some(0x1c),
            ']' | '5' => Some(0x1d),
            '^' | '6' => Some(0x1e),
            '_' | '/' | '7' => Some(0x1f),
            '?' | '8' => Some(0x7f),
            _ => None,
        };
        if let Some(byte) = control {
            return vec![byte];
        }
    }

    let c = if shift { shifted_char(c) } else { c };
    char_bytes(c)
}

fn legacy_named(key: NamedKey, event: &KeyEvent, alt_prefix: &[u8]) -> Result<Vec<u8>, KeyError> {
    let bytes = match key {
        NamedKey::Enter => [alt_prefix, b"\r"].concat(),
        NamedKey::Tab if event.shift => [alt_prefix, b"\x1b[Z"].concat(),
        NamedKey::Tab => [alt_prefix, b"\t"].concat(),
        NamedKey::Backspace if event.ctrl => [alt_prefix, b"\x08"].concat(),
        NamedKey::Backspace => [alt_prefix, b"\x7f"].concat(),
        NamedKey::Escape => [alt_prefix, b"\x1b"].concat(),
        NamedKey::F(n @ 1..=4) => {
            let letter = low_function_letter(n);
            match modifier_param(event) {
                1 => vec![0x1b, b'O', letter],
                m => write_csi(&CsiForm::Letter(letter), m),
            }
        }
        other => match csi_form(other) {
            Some(form) => write_csi(&form, modifier_param(event)),
            None => {
                return Err(KeyError::UnsupportedTarget(format!(
                    "no legacy encoding for {}",
                    Key::Named(other)
                )))
            }
        },
    };
    Ok(bytes)
}
