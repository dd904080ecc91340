//! Host workspace backends.

pub mod command;
pub mod kitty;

pub use command::{CommandOutput, CommandRunner, ProcessRunner};
pub use kitty::KittyWorkspace;
