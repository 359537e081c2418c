//! # Subprocess Execution
//!
//! Every git invocation goes through the [`CommandRunner`] trait. The binary
//! uses [`SystemRunner`], which spawns the real executable; tests substitute a
//! runner that records the calls and replays scripted results.
//!
//! A runner distinguishes two kinds of trouble:
//! - the program could not be started at all: `Err` from [`CommandRunner::run`]
//! - the program ran and exited non-zero: `Ok` with `success == false`
//!
//! Only the second kind is a step failure in the pipeline's sense.

use crate::GIT_PROGRAM;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

/// Captured result of one finished invocation
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommandOutput {
    /// Whether the process exited with status 0
    pub success: bool,
    /// Exit code, `None` if the process was terminated by a signal
    pub code: Option<i32>,
    /// Captured standard output (lossy UTF-8)
    pub stdout: String,
    /// Captured standard error (lossy UTF-8)
    pub stderr: String,
}

impl CommandOutput {
    /// A successful invocation that printed `stdout`
    #[must_use]
    pub fn ok(stdout: impl Into<String>) -> Self {
        Self {
            success: true,
            code: Some(0),
            stdout: stdout.into(),
            stderr: String::new(),
        }
    }

    /// An invocation that exited with the non-zero `code`
    #[must_use]
    pub fn failed(code: i32, stdout: impl Into<String>, stderr: impl Into<String>) -> Self {
        Self {
            success: false,
            code: Some(code),
            stdout: stdout.into(),
            stderr: stderr.into(),
        }
    }
}

impl From<Output> for CommandOutput {
    fn from(output: Output) -> Self {
        Self {
            success: output.status.success(),
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }
}

/// Executes the version-control program with a given argument list
pub trait CommandRunner {
    /// Run the program with `args`, blocking until it exits.
    ///
    /// # Errors
    ///
    /// Returns an error only if the program could not be launched or waited on.
    /// A non-zero exit status is reported through [`CommandOutput::success`].
    fn run(&mut self, args: &[&str]) -> Result<CommandOutput>;
}

/// Runs git as a child process in the current working directory
#[derive(Debug, Clone)]
pub struct SystemRunner {
    /// Resolved path of the executable
    program: PathBuf,
}

impl SystemRunner {
    /// Locate `git` on `PATH`
    ///
    /// # Errors
    ///
    /// Returns an error if no `git` executable can be found.
    pub fn new() -> Result<Self> {
        let program = which::which(GIT_PROGRAM).with_context(|| {
            format!("Could not find '{GIT_PROGRAM}' in PATH. Is git installed?")
        })?;
        Ok(Self { program })
    }

    /// Use an explicit executable instead of searching `PATH`
    #[must_use]
    pub fn with_program(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Path of the executable this runner spawns
    #[must_use]
    pub fn program(&self) -> &Path {
        &self.program
    }
}

impl CommandRunner for SystemRunner {
    fn run(&mut self, args: &[&str]) -> Result<CommandOutput> {
        let output = Command::new(&self.program)
            .args(args)
            .stdin(Stdio::null())
            .output()
            .with_context(|| format!("Failed to execute {}", self.program.display()))?;

        Ok(output.into())
    }
}
