mod core;
mod neighbors;
mod process;

pub use self::core::*;
pub use neighbors::NeighborPresence;
pub use process::ForegroundProcess;
