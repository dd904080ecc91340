//! Host (kitty remote control) configuration.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HostConfig {
    /// Path or name of the `kitten` binary.
    pub kitten: String,
    /// Remote control address passed as `--to`, e.g. `unix:/tmp/kitty`.
    /// When unset, kitten falls back to `KITTY_LISTEN_ON`.
    pub listen_on: Option<String>,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            kitten: "kitten".into(),
            listen_on: None,
        }
    }
}
