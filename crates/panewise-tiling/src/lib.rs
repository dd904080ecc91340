//! Directional pane operations on a host workspace: neighbor-relative
//! resize, focus, split, and keystroke forwarding into nested programs.

pub mod dispatch;
pub mod host;
pub mod redirect;
pub mod resize;
pub mod workspace;

pub use dispatch::{Dispatcher, NoOpReason, Outcome};
pub use host::KittyWorkspace;
pub use redirect::{ProcessMatch, ProcessMatcher, Redirector};
pub use resize::resolve;
pub use workspace::Workspace;
