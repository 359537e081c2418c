//! User-facing text for autopush.
//!
//! Everything here goes to the writer handed in by the caller, which is stdout
//! in the binary. Diagnostics belong to `tracing` and stderr, never here.

use crate::{BRANCH, REMOTE};
use anyhow::{Context, Result};
use colored::Colorize;
use std::io::Write;

/// Label printed in front of a failed step's stderr.
pub const FAILURE_LABEL: &str = "An error occurred:";

/// Echo the captured stdout of a successful step, followed by a newline.
///
/// # Errors
///
/// Returns an error if the writer fails.
pub fn step_output<W: Write + ?Sized>(out: &mut W, stdout: &str) -> Result<()> {
    writeln!(out, "{stdout}").context("Failed to write step output")
}

/// Print the final confirmation after all steps succeeded.
///
/// # Errors
///
/// Returns an error if the writer fails.
pub fn success<W: Write + ?Sized>(out: &mut W) -> Result<()> {
    writeln!(out, "{}", success_message().green()).context("Failed to write success message")?;
    out.flush().context("Failed to flush output")
}

/// Print the captured stderr of the step that failed.
///
/// # Errors
///
/// Returns an error if the writer fails.
pub fn failure<W: Write + ?Sized>(out: &mut W, stderr: &str) -> Result<()> {
    writeln!(out, "{} {stderr}", FAILURE_LABEL.red().bold())
        .context("Failed to write failure message")?;
    out.flush().context("Failed to flush output")
}

/// Text of the success line.
#[must_use]
pub fn success_message() -> String {
    format!("Code pushed to {REMOTE}/{BRANCH} successfully!")
}
