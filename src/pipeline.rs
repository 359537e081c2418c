//! # Push Pipeline
//!
//! [`run_push`] runs the three [`GitStep`]s in order:
//!
//! ```text
//! stage ──ok──> commit ──ok──> push ──ok──> success line
//!   │             │             │
//!   └─fail────────┴─fail────────┴─fail──> failure line, stop
//! ```
//!
//! The stdout of every successful step is echoed before the next step starts.
//! A step exiting non-zero is caught here, reported with its stderr and turned
//! into [`PushOutcome::Failed`]; it is not propagated as an error, so the
//! binary still exits with status 0. Only problems outside git's own exit
//! status (git missing, stdout closed) come back as `Err`.

use crate::errors::CommandFailed;
use crate::output;
use crate::process::CommandRunner;
use crate::steps::GitStep;
use anyhow::Result;
use std::io::Write;
use tracing::info;

/// How a push attempt ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PushOutcome {
    /// All three steps succeeded
    Pushed,
    /// A step exited non-zero; the remaining steps were skipped
    Failed(CommandFailed),
}

impl PushOutcome {
    /// Whether every step succeeded
    #[must_use]
    pub const fn is_pushed(&self) -> bool {
        matches!(self, Self::Pushed)
    }
}

/// Stage, commit and push, writing progress to `out`.
///
/// # Errors
///
/// Returns an error if git could not be launched or `out` could not be
/// written. A step that runs and fails is *not* an error: it is reported on
/// `out` and returned as [`PushOutcome::Failed`].
pub fn run_push<R, W>(runner: &mut R, out: &mut W) -> Result<PushOutcome>
where
    R: CommandRunner + ?Sized,
    W: Write + ?Sized,
{
    match run_steps(runner, out) {
        Ok(()) => {
            output::success(out)?;
            info!("Pushed to {}/{}", crate::REMOTE, crate::BRANCH);
            Ok(PushOutcome::Pushed)
        }
        Err(err) => match err.downcast::<CommandFailed>() {
            Ok(failed) => {
                output::failure(out, &failed.stderr)?;
                info!(step = failed.step.name(), "Push sequence stopped");
                Ok(PushOutcome::Failed(failed))
            }
            Err(other) => Err(other),
        },
    }
}

/// Run every step in order, echoing stdout, stopping at the first failure
fn run_steps<R, W>(runner: &mut R, out: &mut W) -> Result<()>
where
    R: CommandRunner + ?Sized,
    W: Write + ?Sized,
{
    for step in GitStep::SEQUENCE {
        let result = step.run(runner)?;
        output::step_output(out, &result.stdout)?;
    }
    Ok(())
}
