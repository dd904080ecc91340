//! Helpers shared by both encoders.

use crate::keymap::NamedKey;

/// Character produced by `shift` + `c` on a US layout.
pub(super) fn shifted_char(c: char) -> char {
    match c {
        'a'..='z' => c.to_ascii_uppercase(),
        '1' => '!',
        '2' => '@',
        '3' => '#',
        '4' => '$',
        '5' => '%',
        '6' => '^',
        '7' => '&',
        '8' => '*',
        '9' => '(',
        '0' => ')',
        '-' => '_',
        '=' => '+',
        '[' => '{',
        ']' => '}',
        '\\' => '|',
        ';' => ':',
        '\'' => '"',
        ',' => '<',
        '.' => '>',
        '/' => '?',
        '`' => '~',
        other => other,
    }
}

pub(super) fn char_bytes(c: char) -> Vec<u8> {
    let mut buf = [0u8; 4];
    c.encode_utf8(&mut buf).as_bytes().to_vec()
}

/// How a functional key is written inside a `CSI` sequence.
pub(super) enum CsiForm {
    /// `CSI <letter>` / `CSI 1;<m> <letter>`.
    Letter(u8),
    /// `CSI <n> ~` / `CSI <n>;<m> ~`.
    Tilde(u16),
}

/// `CSI` form shared by xterm and the kitty protocol. `None` for keys that
/// are not functional keys (Enter, Tab, Backspace, Escape) and for F1-F4,
/// which differ between the two.
pub(super) fn csi_form(key: NamedKey) -> Option<CsiForm> {
    let form = match key {
        NamedKey::Up => CsiForm::Letter(b'A'),
        NamedKey::Down => CsiForm::Letter(b'B'),
        NamedKey::Right => CsiForm::Letter(b'C'),
        NamedKey::Left => CsiForm::Letter(b'D'),
        NamedKey::Home => CsiForm::Letter(b'H'),
        NamedKey::End => CsiForm::Letter(b'F'),
        NamedKey::Insert => CsiForm::Tilde(2),
        NamedKey::Delete => CsiForm::Tilde(3),
        NamedKey::PageUp => CsiForm::Tilde(5),
        NamedKey::PageDown => CsiForm::Tilde(6),
        NamedKey::F(5) => CsiForm::Tilde(15),
        NamedKey::F(6) => CsiForm::Tilde(17),
        NamedKey::F(7) => CsiForm::Tilde(18),
        NamedKey::F(8) => CsiForm::Tilde(19),
        NamedKey::F(9) => CsiForm::Tilde(20),
        NamedKey::F(10) => CsiForm::Tilde(21),
        NamedKey::F(11) => CsiForm::Tilde(23),
        NamedKey::F(12) => CsiForm::Tilde(24),
        _ => return None,
    };
    Some(form)
}

/// Writes a `CSI` sequence, omitting the modifier parameter when it is 1.
pub(super) fn write_csi(form: &CsiForm, modifier_param: u8) -> Vec<u8> {
    let s = match (form, modifier_param) {
        (CsiForm::Letter(l), 1) => format!("\x1b[{}", *l as char),
        (CsiForm::Letter(l), m) => format!("\x1b[1;{m}{}", *l as char),
        (CsiForm::Tilde(n), 1) => format!("\x1b[{n}~"),
        (CsiForm::Tilde(n), m) => format!("\x1b[{n};{m}~"),
    };
    s.into_bytes()
}

/// Final byte of F1-F4 (`P`, `Q`, `R`, `S`). Callers pass `1..=4`.
pub(super) fn low_function_letter(n: u8) -> u8 {
    b'P' + (n - 1)
}
