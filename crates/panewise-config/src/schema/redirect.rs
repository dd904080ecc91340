//! Keystroke redirect rules.

use serde::{Deserialize, Serialize};

/// Command name of the multiplexer that always receives forwarded keys.
pub const DEFAULT_MULTIPLEXER: &str = "tmux";

/// Matches `vi` and the vim family (`vim`, `nvim`, `gvim`, `rvim`,
/// `vimdiff`, `vim9`, ...) anywhere in the command name, so
/// `/usr/bin/nvim` matches too.
pub const DEFAULT_EDITOR_PATTERN: &str = r"\b(?:[gnr]?vim\w*|vi)\b";

/// How a rule's `value` is compared with a process command name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchKind {
    /// Exact, case-sensitive equality.
    Exact,
    /// Case-insensitive regex search.
    Pattern,
}

/// Which foreground processes a rule looks at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProcessScope {
    /// Only the most specific foreground process.
    Foremost,
    /// Every foreground process, foremost first.
    Any,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRule {
    pub kind: MatchKind,
    pub value: String,
    #[serde(default = "default_scope")]
    pub scope: ProcessScope,
}

fn default_scope() -> ProcessScope {
    ProcessScope::Any
}

impl MatchRule {
    pub fn exact(value: impl Into<String>, scope: ProcessScope) -> Self {
        Self {
            kind: MatchKind::Exact,
            value: value.into(),
            scope,
        }
    }

    pub fn pattern(value: impl Into<String>, scope: ProcessScope) -> Self {
        Self {
            kind: MatchKind::Pattern,
            value: value.into(),
            scope,
        }
    }
}

/// Ordered redirect rules; the first rule that matches wins.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RedirectConfig {
    pub rules: Vec<MatchRule>,
}

impl Default for RedirectConfig {
    fn default() -> Self {
        Self {
            rules: vec![
                MatchRule::exact(DEFAULT_MULTIPLEXER, ProcessScope::Foremost),
                MatchRule::pattern(DEFAULT_EDITOR_PATTERN, ProcessScope::Any),
            ],
        }
    }
}
