//! kitty remote control (`kitten @ ...`) as a [`Workspace`].

use panewise_common::{
    Axis, Direction, ForegroundProcess, HostError, KeyProtocol, NeighborPresence, PaneId,
    ResizePrimitive, SplitOrientation,
};
use serde::Deserialize;
use tracing::{debug, info};

use super::command::{CommandOutput, CommandRunner, ProcessRunner};
use crate::workspace::{Result, Workspace};

/// kitty's message when a `--match` expression selects nothing.
const NO_MATCH: &str = "No matching windows";

#[derive(Debug, Deserialize)]
struct OsWindow {
    #[serde(default)]
    tabs: Vec<Tab>,
}

#[derive(Debug, Deserialize)]
struct Tab {
    #[serde(default)]
    windows: Vec<Window>,
}

#[derive(Debug, Deserialize)]
struct Window {
    id: u32,
    #[serde(default)]
    foreground_processes: Vec<ForegroundProcess>,
}

/// Drives a running kitty through `kitten @`.
///
/// Remote control has to be enabled in kitty (`allow_remote_control`), and
/// `listen_on` must be set when running outside a kitty window.
pub struct KittyWorkspace<R: CommandRunner = ProcessRunner> {
    kitten: String,
    listen_on: Option<String>,
    protocol: KeyProtocol,
    runner: R,
}

impl KittyWorkspace {
    pub fn new(kitten: impl Into<String>) -> Self {
        Self::with_runner(kitten, ProcessRunner)
    }
}

impl<R: CommandRunner> KittyWorkspace<R> {
    pub fn with_runner(kitten: impl Into<String>, runner: R) -> Self {
        Self {
            kitten: kitten.into(),
            listen_on: None,
            protocol: KeyProtocol::default(),
            runner,
        }
    }

    /// Address of kitty's remote-control socket (`--to`).
    pub fn listen_on(mut self, address: Option<String>) -> Self {
        self.listen_on = address;
        self
    }

    /// Key protocol programs in kitty panes are assumed to speak.
    ///
    /// Remote control does not report a window's live keyboard mode, so
    /// this value is what [`Workspace::key_protocol`] answers for every
    /// pane.
    pub fn protocol(mut self, protocol: KeyProtocol) -> Self {
        self.protocol = protocol;
        self
    }

    fn invoke(&self, args: &[&str], stdin: Option<&[u8]>) -> Result<(String, CommandOutput)> {
        let mut full = vec!["@".to_string()];
        if let Some(address) = &self.listen_on {
            full.push("--to".to_string());
            full.push(address.clone());
        }
        full.extend(args.iter().map(|a| a.to_string()));

        let shown = format!("{} {}", self.kitten, full.join(" "));
        debug!(command = %shown, "kitty remote control");
        let output = self.runner.run(&self.kitten, &full, stdin)?;
        Ok((shown, output))
    }

    fn run(&self, args: &[&str]) -> Result<String> {
        let (shown, output) = self.invoke(args, None)?;
        output.into_result(&shown)
    }

    fn list_pane(&self, pane: PaneId) -> Result<Vec<OsWindow>> {
        let matcher = format!("id:{}", pane.0);
        let (shown, output) = self.invoke(&["ls", "--match", &matcher], None)?;
        if !output.success && output.stderr.contains(NO_MATCH) {
            return Err(HostError::MissingPane(pane));
        }
        let stdout = output.into_result(&shown)?;
        serde_json::from_str(&stdout)
            .map_err(|e| HostError::Protocol(format!("unreadable `ls` output: {e}")))
    }

    fn has_neighbor(&self, direction: Direction) -> Result<bool> {
        let matcher = format!("neighbor:{}", direction.edge_name());
        let (shown, output) = self.invoke(&["ls", "--match", &matcher], None)?;
        if output.success {
            return Ok(true);
        }
        if output.stderr.contains(NO_MATCH) {
            return Ok(false);
        }
        output.into_result(&shown).map(|_| false)
    }
}

impl<R: CommandRunner> Workspace for KittyWorkspace<R> {
    /// kitty resolves `neighbor:<edge>` against its active window, not
    /// `pane`. The mapped kitten runs for the active window, so the two
    /// agree when invoked from a key mapping.
    fn neighbors(&self, pane: PaneId) -> Result<NeighborPresence> {
        let mut presence = NeighborPresence::default();
        for direction in Direction::ALL {
            presence.set(direction, self.has_neighbor(direction)?);
        }
        debug!(%pane, ?presence, "neighbors");
        Ok(presence)
    }

    fn resize_active_pane(&self, primitive: ResizePrimitive, amount: u32) -> Result<()> {
        let axis = match primitive.axis() {
            Axis::Horizontal => "horizontal",
            Axis::Vertical => "vertical",
        };
        let increment = (i64::from(amount) * i64::from(primitive.sign())).to_string();
        self.run(&["resize-window", "--axis", axis, "--increment", &increment])?;
        info!(%primitive, amount, "resized active window");
        Ok(())
    }

    fn focus_neighbor(&self, direction: Direction) -> Result<()> {
        let matcher = format!("neighbor:{}", direction.edge_name());
        self.run(&["focus-window", "--match", &matcher])?;
        info!(%direction, "focused neighbor");
        Ok(())
    }

    fn launch_split(&self, orientation: SplitOrientation) -> Result<()> {
        let location = match orientation {
            SplitOrientation::Horizontal => "--location=hsplit",
            SplitOrientation::Vertical => "--location=vsplit",
        };
        self.run(&["launch", "--cwd=current", location])?;
        info!(%orientation, "launched split");
        Ok(())
    }

    fn move_pane(&self, direction: Direction) -> Result<()> {
        self.run(&["action", "move_window", direction.as_str()])?;
        info!(%direction, "moved window");
        Ok(())
    }

    fn foreground_processes(&self, pane: PaneId) -> Result<Vec<ForegroundProcess>> {
        let processes = self
            .list_pane(pane)?
            .into_iter()
            .flat_map(|os| os.tabs)
            .flat_map(|tab| tab.windows)
            .find(|window| window.id == pane.0)
            .map(|window| window.foreground_processes)
            .ok_or(HostError::MissingPane(pane))?;
        Ok(processes)
    }

    fn key_protocol(&self, _pane: PaneId) -> Result<Option<KeyProtocol>> {
        Ok(Some(self.protocol))
    }

    fn write_to_pane(&self, pane: PaneId, bytes: &[u8]) -> Result<()> {
        let matcher = format!("id:{}", pane.0);
        let (shown, output) =
            self.invoke(&["send-text", "--match", &matcher, "--stdin"], Some(bytes))?;
        if !output.success && output.stderr.contains(NO_MATCH) {
            return Err(HostError::MissingPane(pane));
        }
        output.into_result(&shown)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests;
