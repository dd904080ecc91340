//! Child-process plumbing for the host's remote-control CLI.

use std::io::Write;
use std::process::{Command, Stdio};

use panewise_common::HostError;
use tracing::trace;

/// Captured result of one CLI invocation.
#[derive(Debug, Clone, Default)]
pub struct CommandOutput {
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    /// Turn a non-zero exit into [`HostError::CommandFailed`].
    pub fn into_result(self, command: &str) -> Result<String, HostError> {
        if self.success {
            Ok(self.stdout)
        } else {
            Err(HostError::CommandFailed {
                command: command.to_string(),
                message: self.stderr.trim().to_string(),
            })
        }
    }
}

/// Runs a CLI with arguments and optional stdin.
pub trait CommandRunner {
    fn run(&self, program: &str, args: &[String], stdin: Option<&[u8]>)
        -> Result<CommandOutput, HostError>;
}

/// Runs commands as blocking child processes.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessRunner;

impl CommandRunner for ProcessRunner {
    fn run(
        &self,
        program: &str,
        args: &[String],
        stdin: Option<&[u8]>,
    ) -> Result<CommandOutput, HostError> {
        trace!(program, ?args, "spawning host command");

        let mut child = Command::new(program)
            .args(args)
            .stdin(if stdin.is_some() { Stdio::piped() } else { Stdio::null() })
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()?;

        if let Some(input) = stdin {
            if let Some(mut pipe) = child.stdin.take() {
                pipe.write_all(input)?;
            }
        }

        let output = child.wait_with_output()?;
        Ok(CommandOutput {
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}
