pub mod actions;
pub mod errors;
pub mod types;

pub use actions::{Action, Request};
pub use errors::{ConfigError, HostError, KeyError, PanewiseError};
pub use types::{
    Axis, Direction, ForegroundProcess, KeyProtocol, NeighborPresence, PaneId,
    ResizePrimitive, SplitOrientation,
};

pub type Result<T> = std::result::Result<T, PanewiseError>;
