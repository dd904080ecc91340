//! Full configuration validation.
//!
//! Each section has its own submodule; this orchestrator calls them all
//! and collects errors into a single `ConfigError`.

mod misc;
mod redirect;


use crate::schema::PanewiseConfig;
use panewise_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &PanewiseConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    redirect::validate_redirect(&mut errors, config);
    misc::validate_host(&mut errors, config);
    misc::validate_logging(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
