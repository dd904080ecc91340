//! Positional argument parsing for requests.
//!
//! Shape: `[action, direction, amount?, chords?, pattern?]`, where `amount`
//! is only present for `resize-relative`.

use tracing::debug;

use crate::errors::PanewiseError;
use crate::types::Direction;

use super::{Action, Request};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ActionKind {
    FocusNeighbor,
    ResizeRelative,
    Split,
}

fn parse_action_kind(s: &str) -> Result<ActionKind, PanewiseError> {
    match s.trim().to_lowercase().as_str() {
        "focus-neighbor" | "focus" | "neighboring_window" => Ok(ActionKind::FocusNeighbor),
        "resize-relative" | "resize" | "relative_resize" => Ok(ActionKind::ResizeRelative),
        "split" | "split_window" => Ok(ActionKind::Split),
        _ => Err(PanewiseError::InvalidAction(s.to_string())),
    }
}

/// Parse a resize amount: a whole number of steps, at least 1.
pub fn parse_amount(s: &str) -> Result<u32, PanewiseError> {
    match s.trim().parse::<u32>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(PanewiseError::InvalidAmount(s.to_string())),
    }
}

fn non_empty(arg: Option<&String>) -> Option<String> {
    arg.map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

impl Request {
    /// Build a request from positional arguments.
    pub fn from_args<S: AsRef<str>>(args: &[S]) -> Result<Self, PanewiseError> {
        let args: Vec<String> = args.iter().map(|a| a.as_ref().to_string()).collect();

        let kind = parse_action_kind(
            args.first()
                .ok_or(PanewiseError::MissingArgument("action"))?,
        )?;
        let direction: Direction = args
            .get(1)
            .ok_or(PanewiseError::MissingArgument("direction"))?
            .parse()?;

        let (action, rest) = match kind {
            ActionKind::FocusNeighbor => (Action::FocusNeighbor { direction }, 2),
            ActionKind::Split => (Action::Split { direction }, 2),
            ActionKind::ResizeRelative => {
                let amount = args
                    .get(2)
                    .ok_or_else(|| PanewiseError::InvalidAmount("missing".into()))?;
                let amount = parse_amount(amount)?;
                (Action::ResizeRelative { direction, amount }, 3)
            }
        };

        if args.len() > rest + 2 {
            debug!(extra = ?&args[rest + 2..], "ignoring surplus arguments");
        }

        Ok(Request {
            action,
            chords: non_empty(args.get(rest)),
            editor_pattern: non_empty(args.get(rest + 1)),
        })
    }
}
