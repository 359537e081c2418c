use crate::steps::GitStep;
use std::fmt;

/// A git step that ran but exited unsuccessfully.
///
/// Every cause (nothing to commit, rejected push, network or authentication
/// trouble) maps to this one error. The captured stderr is carried verbatim so
/// it can be shown to the user exactly as git wrote it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandFailed {
    /// The step that failed
    pub step: GitStep,
    /// Exit code, `None` when the child was killed by a signal
    pub code: Option<i32>,
    /// Captured standard error of the failed invocation
    pub stderr: String,
}

impl CommandFailed {
    /// Create a failure record for `step`
    #[must_use]
    pub fn new(step: GitStep, code: Option<i32>, stderr: impl Into<String>) -> Self {
        Self {
            step,
            code,
            stderr: stderr.into(),
        }
    }
}

impl fmt::Display for CommandFailed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "{} exited with status {code}", self.step.command_line())?,
            None => write!(f, "{} was terminated by a signal", self.step.command_line())?,
        }
        let stderr = self.stderr.trim_end();
        if !stderr.is_empty() {
            write!(f, ": {stderr}")?;
        }
        Ok(())
    }
}

impl std::error::Error for CommandFailed {}
