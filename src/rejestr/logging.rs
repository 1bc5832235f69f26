//! Logging setup.
//!
//! The library emits `tracing` events and never installs a subscriber on its
//! own. Hosts that have no subscriber of their own can call [`init`].

use crate::error::{RejestrError, Result};
use tracing_subscriber::{fmt, EnvFilter};

const DEFAULT_FILTER: &str = "rejestr=info";

/// Installs a formatted subscriber filtered by `RUST_LOG`
/// (default `rejestr=info`).
///
/// Fails if a global subscriber is already set.
pub fn init() -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true)
        .try_init()
        .map_err(|e| RejestrError::Logging(e.to_string()))
}
