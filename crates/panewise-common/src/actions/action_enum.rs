use serde::{Deserialize, Serialize};

use crate::types::Direction;

/// A directional workspace operation.
///
/// The CLI and keybindings resolve to an `Action`; the dispatcher either
/// applies it to the host or forwards the request's chords to the pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "kebab-case")]
pub enum Action {
    FocusNeighbor {
        direction: Direction,
    },
    ResizeRelative {
        direction: Direction,
        /// Number of resize steps, always at least 1.
        amount: u32,
    },
    Split {
        direction: Direction,
    },
}

impl Action {
    pub fn direction(&self) -> Direction {
        match *self {
            Action::FocusNeighbor { direction }
            | Action::ResizeRelative { direction, .. }
            | Action::Split { direction } => direction,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Action::FocusNeighbor { .. } => "focus-neighbor",
            Action::ResizeRelative { .. } => "resize-relative",
            Action::Split { .. } => "split",
        }
    }
}

/// One invocation: the action plus the optional redirect arguments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Request {
    pub action: Action,
    /// `>`-separated chord sequence forwarded when the pane runs a
    /// multiplexer or editor. Without it the request never redirects.
    pub chords: Option<String>,
    /// Overrides the editor pattern from the config for this request.
    pub editor_pattern: Option<String>,
}

impl Request {
    pub fn new(action: Action) -> Self {
        Self {
            action,
            chords: None,
            editor_pattern: None,
        }
    }

    pub fn with_chords(mut self, chords: impl Into<String>) -> Self {
        self.chords = Some(chords.into());
        self
    }

    pub fn with_editor_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.editor_pattern = Some(pattern.into());
        self
    }
}
