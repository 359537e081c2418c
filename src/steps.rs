use crate::errors::CommandFailed;
use crate::process::{CommandOutput, CommandRunner};
use crate::{BRANCH, COMMIT_MESSAGE, GIT_PROGRAM, REMOTE};
use anyhow::{Context, Result};
use std::fmt;
use tracing::{Level, debug, span, warn};

/// One of the three git invocations autopush performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GitStep {
    /// `git add .`
    Stage,
    /// `git commit -m "Automated commit"`
    Commit,
    /// `git push origin main`
    Push,
}

impl GitStep {
    /// The steps in the order they run.
    pub const SEQUENCE: [Self; 3] = [Self::Stage, Self::Commit, Self::Push];

    /// Arguments passed to git for this step
    #[must_use]
    pub const fn args(self) -> &'static [&'static str] {
        match self {
            Self::Stage => &["add", "."],
            Self::Commit => &["commit", "-m", COMMIT_MESSAGE],
            Self::Push => &["push", REMOTE, BRANCH],
        }
    }

    /// Short lowercase name used in logs
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Stage => "stage",
            Self::Commit => "commit",
            Self::Push => "push",
        }
    }

    /// Shell-like rendering of the invocation, for messages
    #[must_use]
    pub fn command_line(self) -> String {
        let rendered: Vec<String> = self
            .args()
            .iter()
            .map(|arg| {
                if arg.contains(' ') {
                    format!("\"{arg}\"")
                } else {
                    (*arg).to_string()
                }
            })
            .collect();
        format!("{GIT_PROGRAM} {}", rendered.join(" "))
    }

    /// Run this step through `runner`.
    ///
    /// # Errors
    ///
    /// Returns a [`CommandFailed`] (inside the `anyhow::Error`) when git exits
    /// unsuccessfully, or the runner's own error when git could not be launched.
    pub fn run<R: CommandRunner + ?Sized>(self, runner: &mut R) -> Result<CommandOutput> {
        let span = span!(Level::INFO, "git_step", step = self.name());
        let _guard = span.enter();

        debug!(program = GIT_PROGRAM, args = ?self.args(), "Running git step");

        let output = runner
            .run(self.args())
            .with_context(|| format!("Failed to run {}", self.command_line()))?;

        debug!(
            code = ?output.code,
            stdout_bytes = output.stdout.len(),
            stderr_bytes = output.stderr.len(),
            "Git step finished"
        );

        if !output.success {
            warn!(code = ?output.code, "Git step failed");
            return Err(CommandFailed::new(self, output.code, output.stderr).into());
        }

        Ok(output)
    }
}

impl fmt::Display for GitStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
