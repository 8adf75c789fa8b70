// file: src/process/invoker.rs
// version: 1.0.0
// guid: 2a8d6f1b-93c4-4e7a-8f25-b0e9d3c61a47

//! Blocking invocation of an external administration binary

use crate::error::{AgentError, Result};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use tracing::debug;

/// Runs one configured executable with per-call argument vectors
#[derive(Debug, Clone)]
pub struct ProcessInvoker {
    program: PathBuf,
}

impl ProcessInvoker {
    /// Create an invoker for the given executable path
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Path of the executable this invoker runs
    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Render the full command line for logs and error messages
    pub fn command_line<S: AsRef<OsStr>>(&self, args: &[S]) -> String {
        let mut line = self.program.display().to_string();
        for arg in args {
            line.push(' ');
            line.push_str(&arg.as_ref().to_string_lossy());
        }
        line
    }

    /// Run the executable with `args` and return its standard output
    ///
    /// Blocks until the process exits. Standard input is closed so a tool
    /// waiting for interactive input fails instead of hanging.
    pub fn run<S: AsRef<OsStr>>(&self, args: &[S]) -> Result<String> {
        let command = self.command_line(args);
        debug!("Executing: {}", command);

        let output = Command::new(&self.program)
            .args(args)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| AgentError::ProcessStart {
                program: self.program.display().to_string(),
                source: e,
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout).to_string();

        if !output.status.success() {
            let exit_code = output.status.code();
            let stderr = String::from_utf8_lossy(&output.stderr);

            debug!("Command failed with exit code {:?}: {}", exit_code, command);
            if !stdout.trim().is_empty() {
                debug!("STDOUT: {}", stdout.trim_end());
            }
            if !stderr.trim().is_empty() {
                debug!("STDERR: {}", stderr.trim_end());
            }

            return Err(AgentError::ProcessExecution {
                command,
                exit_code,
                stderr: if stderr.trim().is_empty() {
                    stdout
                } else {
                    stderr.to_string()
                },
            });
        }

        debug!("Command completed: {} ({} bytes of output)", command, stdout.len());
        Ok(stdout)
    }
}
