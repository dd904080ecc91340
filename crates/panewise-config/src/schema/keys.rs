use panewise_common::KeyProtocol;
use serde::{Deserialize, Serialize};

/// Key encoding configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct KeysConfig {
    /// Encoding used for forwarded chords: `"legacy"` or `"kitty"`.
    pub protocol: KeyProtocol,
}
