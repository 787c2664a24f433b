//! Command-line harness over the solver
//!
//! Non-interactive: every command reads a board from its arguments, prints a
//! report and exits.

pub mod commands;
pub mod config;
pub mod output;

use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber.
///
/// `RUST_LOG` wins when set; otherwise warnings only, or debug output for
/// this crate when `verbose` is on.
pub fn init_tracing(verbose: bool) {
    let default = if verbose { "warn,noughts=debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .init();
}
