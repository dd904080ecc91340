//! Configuration schema types for panewise.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod host;
mod keys;
mod redirect;
mod system;

pub use host::*;
pub use keys::*;
pub use redirect::*;
pub use system::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for panewise.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PanewiseConfig {
    pub redirect: RedirectConfig,
    pub keys: KeysConfig,
    pub host: HostConfig,
    pub logging: LoggingConfig,
}
