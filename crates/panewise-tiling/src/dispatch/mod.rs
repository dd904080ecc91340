//! Turns one parsed request into redirect or workspace calls.

use panewise_common::{Action, Direction, HostError, KeyProtocol, PaneId, PanewiseError, Request};
use tracing::{debug, info, warn};

use crate::redirect::{ProcessMatcher, Redirector};
use crate::resize::resolve;
use crate::workspace::Workspace;

/// Why a request finished without doing anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoOpReason {
    /// No neighbor on the axis of a resize.
    NoNeighbor,
    /// The pane closed before the request was handled.
    PaneGone,
}

/// What a handled request did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Redirected { events: usize },
    Focused,
    Resized,
    Split,
    NoOp(NoOpReason),
}

pub struct Dispatcher<'a, W: Workspace + ?Sized> {
    workspace: &'a W,
    matcher: &'a ProcessMatcher,
    protocol: Option<KeyProtocol>,
}

impl<'a, W: Workspace + ?Sized> Dispatcher<'a, W> {
    /// `protocol`, when set, overrides the key protocol the pane reports.
    pub fn new(workspace: &'a W, matcher: &'a ProcessMatcher, protocol: Option<KeyProtocol>) -> Self {
        Self {
            workspace,
            matcher,
            protocol,
        }
    }

    pub fn handle(&self, request: &Request, pane: PaneId) -> Result<Outcome, PanewiseError> {
        debug!(action = request.action.name(), %pane, chords = ?request.chords, "handling request");

        let outcome = match self.try_handle(request, pane) {
            Ok(outcome) => outcome,
            Err(PanewiseError::Host(HostError::MissingPane(gone))) => {
                warn!(pane = %gone, "pane disappeared, nothing to do");
                Outcome::NoOp(NoOpReason::PaneGone)
            }
            Err(e) => return Err(e),
        };

        info!(action = request.action.name(), ?outcome, "request handled");
        Ok(outcome)
    }

    fn try_handle(&self, request: &Request, pane: PaneId) -> Result<Outcome, PanewiseError> {
        if let Some(chords) = request.chords.as_deref() {
            let overridden;
            let matcher = match request.editor_pattern.as_deref() {
                Some(pattern) => {
                    overridden = self.matcher.clone().with_editor_pattern(Some(pattern))?;
                    &overridden
                }
                None => self.matcher,
            };
            let redirector = Redirector::new(self.workspace, matcher).with_protocol(self.protocol);
            if redirector.should_redirect(pane)? {
                let events = redirector.redirect(pane, chords)?;
                return Ok(Outcome::Redirected { events });
            }
        }

        match request.action {
            Action::FocusNeighbor { direction } => {
                self.workspace.focus_neighbor(direction)?;
                Ok(Outcome::Focused)
            }
            Action::ResizeRelative { direction, amount } => self.resize(pane, direction, amount),
            Action::Split { direction } => {
                self.workspace.launch_split(direction.split_orientation())?;
                if direction.needs_reposition() {
                    if let Err(e) = self.workspace.move_pane(direction) {
                        warn!(%direction, error = %e, "split applied but new pane was not repositioned");
                        return Err(e.into());
                    }
                }
                Ok(Outcome::Split)
            }
        }
    }

    fn resize(&self, pane: PaneId, direction: Direction, amount: u32) -> Result<Outcome, PanewiseError> {
        let presence = self.workspace.neighbors(pane)?;
        match resolve(direction, &presence) {
            Some(primitive) => {
                debug!(%direction, %primitive, amount, "resolved resize");
                self.workspace.resize_active_pane(primitive, amount)?;
                Ok(Outcome::Resized)
            }
            None => {
                debug!(%direction, "no neighbor on axis, skipping resize");
                Ok(Outcome::NoOp(NoOpReason::NoNeighbor))
            }
        }
    }
}
