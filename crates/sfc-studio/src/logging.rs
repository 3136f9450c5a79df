//! Logging setup.
//!
//! Events go to stderr so command output on stdout stays clean. `RUST_LOG`
//! takes precedence over the `--verbose` flag.

use tracing_subscriber::EnvFilter;

const VERBOSE_FILTER: &str = "warn,sfc_extract=debug,sfc_templates=debug,sfc_studio=debug";
const QUIET_FILTER: &str = "warn";

/// Install the global subscriber.
pub fn init(verbose: bool) {
    let filter = match std::env::var("RUST_LOG") {
        Ok(directives) => EnvFilter::new(directives),
        Err(_) => EnvFilter::new(default_directives(verbose)),
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init();
}

fn default_directives(verbose: bool) -> &'static str {
    if verbose {
        VERBOSE_FILTER
    } else {
        QUIET_FILTER
    }
}
