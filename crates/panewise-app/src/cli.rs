use std::path::PathBuf;

use clap::Parser;
use panewise_common::KeyProtocol;

/// Directional pane operations for kitty, with keystroke forwarding into
/// tmux and vim.
#[derive(Parser, Debug)]
#[command(name = "panewise", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log directive added to RUST_LOG (e.g. `panewise=debug`).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Pane the request applies to. Defaults to $KITTY_WINDOW_ID.
    #[arg(long)]
    pub pane: Option<u32>,

    /// kitty remote-control address, overriding `host.listen_on`.
    #[arg(long)]
    pub to: Option<String>,

    /// Key protocol used for forwarded chords (legacy or kitty).
    #[arg(long)]
    pub protocol: Option<KeyProtocol>,

    /// Print the effective configuration as JSON and exit.
    #[arg(long)]
    pub dump_config: bool,

    /// ACTION DIRECTION [AMOUNT] [CHORDS] [PATTERN]
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub request: Vec<String>,
}

pub fn parse() -> Args {
    Args::parse()
}
