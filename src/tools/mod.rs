//! Command-line front ends for the helper binaries
//!
//! Each tool parses its arguments with clap and reports through the
//! writers it is given, returning the process exit status.

pub mod compose_command;
pub mod compose_variables;

use std::io;
use tracing_subscriber::EnvFilter;

/// Exit status for every failure path
pub const EXIT_FAILURE: i32 = -1;

/// Install a stderr logger; stdout is reserved for tool output.
///
/// `RUST_LOG` wins over the `--debug` flag when set.
pub fn init_logging(debug: bool) {
    let level = if debug { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .init();
}
