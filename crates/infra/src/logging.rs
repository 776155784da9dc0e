//! Tracing subscriber bootstrap
//!
//! `RUST_LOG` wins over the configured level when it holds a valid filter.

use deskclock_domain::{DeskClockError, LoggingConfig, Result};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Install the global tracing subscriber described by `config`.
///
/// Returns `Ok(true)` when the subscriber was installed and `Ok(false)` when
/// a global subscriber already existed (a second call, or a host process that
/// set up its own).
///
/// # Errors
/// Returns `DeskClockError::Config` when `config.level` is not a valid filter
/// directive and `RUST_LOG` does not provide one.
pub fn init_tracing(config: &LoggingConfig) -> Result<bool> {
    let filter = env_filter(&config.level)?;
    let registry = tracing_subscriber::registry().with(filter);

    let installed = if config.json {
        registry.with(fmt::layer().json().with_current_span(false)).try_init()
    } else {
        registry.with(fmt::layer().with_target(true)).try_init()
    };

    match installed {
        Ok(()) => {
            tracing::debug!(level = %config.level, json = config.json, "tracing initialized");
            Ok(true)
        }
        Err(_) => Ok(false),
    }
}

fn env_filter(level: &str) -> Result<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    filter_for_level(level)
}

fn filter_for_level(level: &str) -> Result<EnvFilter> {
    EnvFilter::try_new(level.trim())
        .map_err(|e| DeskClockError::Config(format!("Invalid log level '{level}': {e}")))
}
