//! Tracing setup for the demo binary and for callers embedding the library.
//!
//! `RUST_LOG` wins when set, e.g. `RUST_LOG=member_jdbc=debug` to see
//! not-found lookups.

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

/// Install a compact console subscriber. Errors if one is already installed.
pub fn init_tracing(debug: bool) -> Result<()> {
    let default_level = if debug { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(debug)
        .compact()
        .try_init()
        .map_err(|err| anyhow!(err))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_fails_instead_of_panicking() {
        // Another test may have installed a subscriber already; either way the
        // second call must come back as an error.
        let _ = init_tracing(false);

        assert!(init_tracing(true).is_err());
    }
}
