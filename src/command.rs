//! Local command execution for querying the daemon
//!
//! This module provides:
//! - The CommandRunner seam so the version lookup can be tested without a daemon
//! - A system runner that executes real processes

use crate::error::CommandError;
use std::process::Command;

/// Captured output of a finished command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    /// The command line that was executed
    pub command: String,
    /// Standard output
    pub stdout: String,
    /// Standard error
    pub stderr: String,
}

/// Trait for running a local command to completion
pub trait CommandRunner {
    /// Run `program` with `args`, succeeding only on a zero exit status
    fn run(&self, program: &str, args: &[&str]) -> Result<CommandOutput, CommandError>;
}

/// Runner that spawns real processes
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemCommandRunner;

impl SystemCommandRunner {
    /// Create a new system runner
    pub fn new() -> Self {
        Self
    }
}

/// Render a command line for messages
fn command_line(program: &str, args: &[&str]) -> String {
    std::iter::once(program)
        .chain(args.iter().copied())
        .collect::<Vec<_>>()
        .join(" ")
}

impl CommandRunner for SystemCommandRunner {
    fn run(&self, program: &str, args: &[&str]) -> Result<CommandOutput, CommandError> {
        let command = command_line(program, args);
        let output = Command::new(program)
            .args(args)
            .output()
            .map_err(|e| CommandError::spawn(&command, e))?;

        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();

        if !output.status.success() {
            return Err(CommandError::failed(
                command,
                output.status.to_string(),
                stderr.trim(),
            ));
        }

        Ok(CommandOutput {
            command,
            stdout,
            stderr,
        })
    }
}
