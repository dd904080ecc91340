//! Host and logging validation.

use crate::schema::PanewiseConfig;

pub(super) fn validate_host(errors: &mut Vec<String>, config: &PanewiseConfig) {
    if config.host.kitten.trim().is_empty() {
        errors.push("host.kitten must not be empty".into());
    }
    if let Some(addr) = &config.host.listen_on {
        if addr.trim().is_empty() {
            errors.push("host.listen_on must not be empty when set".into());
        }
    }
}

pub(super) fn validate_logging(errors: &mut Vec<String>, config: &PanewiseConfig) {
    if config.logging.level.trim().is_empty() {
        errors.push("logging.level must not be empty".into());
    }
}
