//! In-memory workspace that records every mutation, for tests.

use std::cell::RefCell;

use panewise_common::{
    Direction, ForegroundProcess, HostError, KeyProtocol, NeighborPresence, PaneId,
    ResizePrimitive, SplitOrientation,
};

use super::{Result, Workspace};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Call {
    Resize(ResizePrimitive, u32),
    Focus(Direction),
    Split(SplitOrientation),
    Move(Direction),
    Write(PaneId, Vec<u8>),
}

pub(crate) struct RecordingWorkspace {
    pub presence: NeighborPresence,
    pub processes: Vec<ForegroundProcess>,
    pub protocol: Option<KeyProtocol>,
    /// When set, every call reports the pane as gone.
    pub gone: bool,
    /// When set, `move_pane` fails as a host command.
    pub fail_moves: bool,
    calls: RefCell<Vec<Call>>,
}

impl RecordingWorkspace {
    pub fn new() -> Self {
        Self {
            presence: NeighborPresence::default(),
            processes: Vec::new(),
            protocol: Some(KeyProtocol::Legacy),
            gone: false,
            fail_moves: false,
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn with_presence(mut self, presence: NeighborPresence) -> Self {
        self.presence = presence;
        self
    }

    pub fn running(mut self, commands: &[&str]) -> Self {
        self.processes = commands
            .iter()
            .map(|cmd| ForegroundProcess::new(cmd.split_whitespace()))
            .collect();
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn writes(&self) -> Vec<Vec<u8>> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|call| match call {
                Call::Write(_, bytes) => Some(bytes.clone()),
                _ => None,
            })
            .collect()
    }

    fn check(&self, pane: PaneId) -> Result<()> {
        if self.gone {
            Err(HostError::MissingPane(pane))
        } else {
            Ok(())
        }
    }

    fn record(&self, call: Call) -> Result<()> {
        self.check(PaneId(0))?;
        self.calls.borrow_mut().push(call);
        Ok(())
    }
}

impl Workspace for RecordingWorkspace {
    fn neighbors(&self, pane: PaneId) -> Result<NeighborPresence> {
        self.check(pane)?;
        Ok(self.presence)
    }

    fn resize_active_pane(&self, primitive: ResizePrimitive, amount: u32) -> Result<()> {
        self.record(Call::Resize(primitive, amount))
    }

    fn focus_neighbor(&self, direction: Direction) -> Result<()> {
        self.record(Call::Focus(direction))
    }

    fn launch_split(&self, orientation: SplitOrientation) -> Result<()> {
        self.record(Call::Split(orientation))
    }

    fn move_pane(&self, direction: Direction) -> Result<()> {
        if self.fail_moves {
            return Err(HostError::CommandFailed {
                command: format!("move {direction}"),
                message: "refused".into(),
            });
        }
        self.record(Call::Move(direction))
    }

    fn foreground_processes(&self, pane: PaneId) -> Result<Vec<ForegroundProcess>> {
        self.check(pane)?;
        Ok(self.processes.clone())
    }

    fn key_protocol(&self, pane: PaneId) -> Result<Option<KeyProtocol>> {
        self.check(pane)?;
        Ok(self.protocol)
    }

    fn write_to_pane(&self, pane: PaneId, bytes: &[u8]) -> Result<()> {
        self.check(pane)?;
        self.calls.borrow_mut().push(Call::Write(pane, bytes.to_vec()));
        Ok(())
    }
}
