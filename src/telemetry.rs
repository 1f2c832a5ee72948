//! Tracing subscriber setup for the `casego` binary.
//!
//! Logs go to stderr so stdout carries only the token or plaintext.

use tracing_subscriber::EnvFilter;

use crate::error::{CasegoError, Result};

/// Install a global `fmt` subscriber. `RUST_LOG` wins over `log_level`.
///
/// # Errors
///
/// Returns [`CasegoError::Config`] if the filter is invalid or a subscriber is
/// already installed.
pub fn init(log_level: &str) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(log_level)
            .map_err(|e| CasegoError::Config(format!("invalid log level {log_level:?}: {e}")))?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| CasegoError::Config(format!("failed to initialise tracing subscriber: {e}")))
}
