//! Configuration loading from TOML files and environment variables.
//!
//! Environment variables take precedence over the file, using the
//! `GRAPHKIT_` prefix with `__` as the section separator: for example
//! `GRAPHKIT_LOG__LEVEL=debug` overrides the `[log] level` entry.

use figment::providers::{Env, Format, Toml};
use figment::Figment;
use serde::Deserialize;

use crate::cache::CacheConfig;
use crate::error::{Error, Result};
use crate::logging::LogConfig;

/// Environment variable prefix for overrides.
const ENV_PREFIX: &str = "GRAPHKIT_";

/// Top-level configuration for the crate's ambient services.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Logging configuration.
    pub log: LogConfig,
    /// Cache configuration.
    pub cache: CacheConfig,
}

impl Config {
    /// Loads configuration from the TOML file at `path`, overlaid with
    /// `GRAPHKIT_`-prefixed environment variables.
    ///
    /// A missing file is not an error: defaults (plus any environment
    /// overrides) apply.
    ///
    /// # Errors
    ///
    /// Returns an [`Error`] with code `config_load` if the file or an
    /// override cannot be parsed into a valid configuration.
    pub fn load(path: &str) -> Result<Self> {
        Figment::new()
            .merge(Toml::file(path))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .map_err(|e| {
                Error::new("config_load", format!("failed to load configuration from '{path}'"))
                    .with_source(e)
            })
    }
}
