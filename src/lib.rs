#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! # Autopush - One-Shot Stage, Commit and Push
//!
//! Autopush drives the `git` executable through a fixed three-step sequence:
//!
//! 1. `git add .`
//! 2. `git commit -m "Automated commit"`
//! 3. `git push origin main`
//!
//! Each step runs to completion before the next one starts. The first step that
//! exits with a non-zero status stops the sequence and its captured stderr is
//! reported; later steps never run.
//!
//! ## Architecture
//!
//! - [`steps`]: the fixed git invocations and their argument lists
//! - [`process`]: the [`process::CommandRunner`] seam and the real subprocess runner
//! - [`pipeline`]: [`pipeline::run_push`], the sequential runner
//! - [`errors`]: the single "command failed" error kind
//! - [`output`]: user-facing text written to stdout
//! - [`cli`] and [`logging`]: command line and diagnostics for the binary
//!
//! ## Example Usage
//!
//! ```no_run
//! use autopush::pipeline::{PushOutcome, run_push};
//! use autopush::process::SystemRunner;
//!
//! # fn main() -> anyhow::Result<()> {
//! let mut runner = SystemRunner::new()?;
//! let mut stdout = std::io::stdout().lock();
//!
//! match run_push(&mut runner, &mut stdout)? {
//!     PushOutcome::Pushed => {}
//!     PushOutcome::Failed(failure) => eprintln!("stopped at {}", failure.step),
//! }
//! # Ok(())
//! # }
//! ```

/// Command-line interface definition (shared with xtask for man pages).
pub mod cli;

/// The "external command failed" error kind.
pub mod errors;

/// Tracing subscriber setup.
pub mod logging;

/// User-facing output written after each step.
pub mod output;

/// The sequential stage/commit/push runner.
pub mod pipeline;

/// Subprocess execution behind the `CommandRunner` trait.
pub mod process;

/// The fixed git invocations.
pub mod steps;

/// Current version of the autopush binary.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Name of the version-control executable looked up on `PATH`.
pub const GIT_PROGRAM: &str = "git";

/// Message used for every commit.
pub const COMMIT_MESSAGE: &str = "Automated commit";

/// Remote the commit is pushed to.
pub const REMOTE: &str = "origin";

/// Branch pushed to [`REMOTE`].
pub const BRANCH: &str = "main";
