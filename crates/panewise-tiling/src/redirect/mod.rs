//! Forwarding chord sequences into a nested multiplexer or editor.

mod matcher;

pub use matcher::{ProcessMatch, ProcessMatcher};

use panewise_common::{KeyProtocol, PaneId, PanewiseError};
use panewise_input::encode_sequence;
use tracing::{debug, info};

use crate::workspace::{self, Workspace};

/// Decides whether a pane should receive raw keys, and delivers them.
pub struct Redirector<'a, W: Workspace + ?Sized> {
    workspace: &'a W,
    matcher: &'a ProcessMatcher,
    protocol: Option<KeyProtocol>,
}

impl<'a, W: Workspace + ?Sized> Redirector<'a, W> {
    pub fn new(workspace: &'a W, matcher: &'a ProcessMatcher) -> Self {
        Self {
            workspace,
            matcher,
            protocol: None,
        }
    }

    /// Encode with `protocol` instead of asking the pane for its own.
    pub fn with_protocol(mut self, protocol: Option<KeyProtocol>) -> Self {
        self.protocol = protocol;
        self
    }

    pub fn should_redirect(&self, pane: PaneId) -> workspace::Result<bool> {
        let processes = self.workspace.foreground_processes(pane)?;
        let hit = self.matcher.find_match(&processes);
        debug!(
            %pane,
            processes = processes.len(),
            matched = hit.as_ref().map(|m| m.command.as_str()),
            "redirect check"
        );
        Ok(hit.is_some())
    }

    /// Encode every chord of `sequence`, then write them to `pane` in order.
    ///
    /// Nothing is written unless the whole sequence encodes. Returns the
    /// number of key events written.
    pub fn redirect(&self, pane: PaneId, sequence: &str) -> Result<usize, PanewiseError> {
        let protocol = match self.protocol {
            Some(protocol) => Some(protocol),
            None => self.workspace.key_protocol(pane)?,
        };
        let events = encode_sequence(sequence, protocol)?;

        for event in &events {
            self.workspace.write_to_pane(pane, event.as_bytes())?;
        }
        info!(%pane, sequence, events = events.len(), "redirected keys");
        Ok(events.len())
    }
}
