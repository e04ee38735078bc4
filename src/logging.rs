//! Tracing subscriber initialization.
//!
//! [`init`] installs the global `tracing` subscriber once at startup. The
//! filter directive comes from the `RUST_LOG` environment variable when set,
//! falling back to the configured level. Production deployments typically
//! enable JSON output; development gets human-readable lines.

use serde::Deserialize;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use crate::error::{Error, Result};

/// Configuration for the global subscriber.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Filter directive, e.g. `"info"` or `"graphkit=debug"`.
    pub level: String,
    /// Emit JSON log lines instead of human-readable output.
    pub json: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

/// Installs the global `tracing` subscriber.
///
/// # Errors
///
/// Returns an [`Error`] with code `invalid_log_level` if the filter
/// directive does not parse, or `logger_init` if a global subscriber is
/// already installed.
pub fn init(config: &LogConfig) -> Result<()> {
    let directive = std::env::var("RUST_LOG").unwrap_or_else(|_| config.level.clone());
    let filter = EnvFilter::try_new(&directive).map_err(|e| {
        Error::new(
            "invalid_log_level",
            format!("invalid log filter directive '{directive}'"),
        )
        .with_source(e)
    })?;

    let registry = tracing_subscriber::registry().with(filter);
    let installed = if config.json {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .try_init()
    } else {
        registry.with(tracing_subscriber::fmt::layer()).try_init()
    };

    installed
        .map_err(|e| Error::new("logger_init", "a global subscriber is already set").with_source(e))
}
