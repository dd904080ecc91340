use panewise_common::{
    Direction, ForegroundProcess, HostError, KeyProtocol, NeighborPresence, PaneId,
    ResizePrimitive, SplitOrientation,
};

#[cfg(test)]
pub(crate) mod recording;

pub type Result<T> = std::result::Result<T, HostError>;

/// Capabilities the host workspace manager exposes to the dispatcher.
///
/// Every call goes straight to the host; nothing is cached between calls.
/// A pane that disappeared mid-request is reported as
/// [`HostError::MissingPane`].
pub trait Workspace {
    /// Which sides of `pane` have an adjacent pane.
    ///
    /// Hosts may answer for the active pane; callers pass the pane the
    /// request was issued from, which is the active one.
    fn neighbors(&self, pane: PaneId) -> Result<NeighborPresence>;

    /// Grow or shrink the active pane's own edge by `amount` steps.
    fn resize_active_pane(&self, primitive: ResizePrimitive, amount: u32) -> Result<()>;

    fn focus_neighbor(&self, direction: Direction) -> Result<()>;

    /// Open a new pane next to the active one, inheriting its working
    /// directory. The new pane is placed after the active one.
    fn launch_split(&self, orientation: SplitOrientation) -> Result<()>;

    /// Move the active pane one slot in `direction`.
    fn move_pane(&self, direction: Direction) -> Result<()>;

    /// Foreground processes of `pane`, most specific first.
    fn foreground_processes(&self, pane: PaneId) -> Result<Vec<ForegroundProcess>>;

    /// Native key event format of `pane`, if it accepts key events at all.
    ///
    /// Hosts that cannot query a pane's live keyboard mode answer with a
    /// configured protocol.
    fn key_protocol(&self, pane: PaneId) -> Result<Option<KeyProtocol>>;

    fn write_to_pane(&self, pane: PaneId, bytes: &[u8]) -> Result<()>;
}
