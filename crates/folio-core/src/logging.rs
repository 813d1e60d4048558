//! Console logging setup.
//!
//! `RUST_LOG` wins over the default filter handed in by the caller:
//!
//! ```bash
//! RUST_LOG=folio_core=trace folio-desktop
//! ```

use tracing_subscriber::EnvFilter;

use crate::error::{FolioError, FolioResult};

/// Builds the filter: `RUST_LOG` if set, otherwise `default_filter`.
pub fn filter(default_filter: &str) -> FolioResult<EnvFilter> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(default_filter)
            .map_err(|e| FolioError::Logging(format!("bad filter {:?}: {}", default_filter, e))),
    }
}

/// Installs a global fmt subscriber.
pub fn init(default_filter: &str) -> FolioResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(filter(default_filter)?)
        .with_target(true)
        .try_init()
        .map_err(|e| FolioError::Logging(e.to_string()))
}
