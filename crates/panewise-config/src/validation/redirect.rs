//! Redirect rule validation.

use crate::schema::{MatchKind, PanewiseConfig};

pub(super) fn validate_redirect(errors: &mut Vec<String>, config: &PanewiseConfig) {
    for (i, rule) in config.redirect.rules.iter().enumerate() {
        let name = format!("redirect.rules[{i}]");

        if rule.value.trim().is_empty() {
            errors.push(format!("{name}.value must not be empty"));
            continue;
        }

        if rule.kind == MatchKind::Pattern {
            if let Err(e) = regex::RegexBuilder::new(&rule.value)
                .case_insensitive(true)
                .build()
            {
                errors.push(format!("{name}.value is not a valid regex: {e}"));
            }
        }
    }
}
