use serde::{Deserialize, Serialize};

/// A process currently owning a pane's controlling terminal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForegroundProcess {
    #[serde(default)]
    pub pid: Option<u32>,
    #[serde(default)]
    pub cmdline: Vec<String>,
}

impl ForegroundProcess {
    pub fn new<I, S>(cmdline: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            pid: None,
            cmdline: cmdline.into_iter().map(Into::into).collect(),
        }
    }

    /// First token of the command line, or `""` when the host reported none.
    pub fn command_name(&self) -> &str {
        self.cmdline.first().map(String::as_str).unwrap_or("")
    }
}
