//! Command-line interface definition for autopush.
//!
//! The program takes no operational arguments: running it always performs the
//! same stage, commit and push sequence. The definition lives in the library so
//! the xtask crate can render a man page from it.

use clap::Parser;

/// Main CLI structure for autopush.
#[derive(Parser, Debug)]
#[command(
    name = "autopush",
    version = crate::VERSION,
    about = "Stage, commit and push to origin/main in one step",
    long_about = "Runs `git add .`, `git commit -m \"Automated commit\"` and \
                  `git push origin main` in order, stopping at the first step that fails"
)]
pub struct Cli {
    /// Show debug diagnostics on stderr
    #[arg(short, long)]
    pub verbose: bool,
}
