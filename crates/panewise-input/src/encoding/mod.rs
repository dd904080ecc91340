//! Key event encoding for a pane's input stream.
//!
//! Two wire formats are supported: xterm-style legacy bytes and the kitty
//! keyboard protocol. Both are pure functions of the event.

mod event;
mod kitty;
mod legacy;
mod text;

use panewise_common::{KeyError, KeyProtocol};
use tracing::{debug, trace};

use crate::keymap::{parse_chord, split_sequence};

pub use event::{EncodedKeyEvent, KeyEvent};
pub use kitty::{decode_kitty_modifiers, encode_kitty};
pub use legacy::encode_legacy;

/// Encode one key event in the given protocol.
pub fn encode(event: &KeyEvent, protocol: KeyProtocol) -> Result<EncodedKeyEvent, KeyError> {
    let bytes = match protocol {
        KeyProtocol::Legacy => encode_legacy(event)?,
        KeyProtocol::Kitty => encode_kitty(event),
    };
    if bytes.is_empty() {
        return Err(KeyError::UnsupportedTarget(format!(
            "no {} encoding for {}",
            protocol_name(protocol),
            event.key
        )));
    }
    trace!(?protocol, bytes = ?bytes, "encoded key event");
    Ok(EncodedKeyEvent::new(protocol, bytes))
}

/// Parse and encode a single chord string.
///
/// `protocol` is the pane's reported key protocol; a pane that reports
/// none cannot receive keys.
pub fn encode_chord(s: &str, protocol: Option<KeyProtocol>) -> Result<EncodedKeyEvent, KeyError> {
    let protocol =
        protocol.ok_or_else(|| KeyError::UnsupportedTarget("pane has no key encoding".into()))?;
    let chord = parse_chord(s)?;
    encode(&KeyEvent::from_chord(&chord), protocol)
}

/// Parse and encode a `>`-separated chord sequence.
///
/// Either every element encodes or the whole sequence fails; callers can
/// rely on getting nothing back for a partially valid sequence.
pub fn encode_sequence(
    sequence: &str,
    protocol: Option<KeyProtocol>,
) -> Result<Vec<EncodedKeyEvent>, KeyError> {
    let events = split_sequence(sequence)?
        .into_iter()
        .map(|chord| encode_chord(chord, protocol))
        .collect::<Result<Vec<_>, _>>()?;
    debug!(sequence, count = events.len(), "encoded chord sequence");
    Ok(events)
}

fn protocol_name(protocol: KeyProtocol) -> &'static str {
    match protocol {
        KeyProtocol::Legacy => "legacy",
        KeyProtocol::Kitty => "kitty",
    }
}
