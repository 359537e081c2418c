use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Filter directive used when `--verbose` is off
const DEFAULT_DIRECTIVE: &str = "warn";

/// Filter directive used with `--verbose`
const VERBOSE_DIRECTIVE: &str = "warn,autopush=debug";

/// Build the filter for the requested verbosity
#[must_use]
pub fn filter(verbose: bool) -> EnvFilter {
    EnvFilter::new(if verbose {
        VERBOSE_DIRECTIVE
    } else {
        DEFAULT_DIRECTIVE
    })
}

/// Install the global subscriber. Records go to stderr so stdout carries only
/// the step output. Calling this twice is harmless; the second call is ignored.
pub fn init(verbose: bool) {
    let _ = tracing_subscriber::registry()
        .with(filter(verbose))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .without_time()
                .with_target(false),
        )
        .try_init();
}
