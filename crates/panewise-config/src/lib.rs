//! panewise configuration system.
//!
//! TOML-based configuration with full validation. All config sections use
//! defaults so partial configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use panewise_config::{load_config, config_to_json};
//!
//! let config = load_config().expect("failed to load config");
//! let json = config_to_json(&config);
//! println!("{json}");
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{PanewiseConfig, CONFIG_SCHEMA_VERSION};

use panewise_common::ConfigError;
use std::path::Path;

/// Load config from `path` if given, otherwise from the platform default
/// path (creating a commented default file on first run).
pub fn load_config_from(path: Option<&Path>) -> Result<PanewiseConfig, ConfigError> {
    match path {
        Some(path) => toml_loader::load_from_path(path),
        None => toml_loader::load_default(),
    }
}

/// Convenience function to load config from the platform default path.
pub fn load_config() -> Result<PanewiseConfig, ConfigError> {
    load_config_from(None)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &PanewiseConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_to_json_contains_all_sections() {
        let config = PanewiseConfig::default();
        let json = config_to_json(&config);
        assert!(json.contains("\"redirect\""));
        assert!(json.contains("\"keys\""));
        assert!(json.contains("\"host\""));
        assert!(json.contains("\"logging\""));
        assert!(json.contains("\"tmux\""));
    }

    #[test]
    fn config_schema_version_is_1() {
        assert_eq!(CONFIG_SCHEMA_VERSION, 1);
    }

    #[test]
    fn default_config_round_trips_through_json() {
        let config = PanewiseConfig::default();
        let json = config_to_json(&config);
        let parsed: PanewiseConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.redirect.rules, config.redirect.rules);
        assert_eq!(parsed.host.kitten, "kitten");
    }

    #[test]
    fn load_config_from_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        std::fs::write(&path, "[host]\nkitten = \"/opt/kitty/bin/kitten\"\n").unwrap();

        let config = load_config_from(Some(&path)).unwrap();
        assert_eq!(config.host.kitten, "/opt/kitty/bin/kitten");
    }

    #[test]
    fn load_config_from_missing_explicit_path_errors() {
        let result = load_config_from(Some(Path::new("/tmp/panewise-missing/custom.toml")));
        assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
    }
}
