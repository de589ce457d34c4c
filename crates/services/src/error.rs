//! Shared error types for the services crate.

use std::path::PathBuf;

use thiserror::Error;

use hedge_core::model::SessionError;

/// Errors emitted by `HedgeShell` and the tick driver.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum HedgeError {
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error("ticker was cancelled before the session completed")]
    TickerCancelled,
    #[error("ticker task failed: {0}")]
    TickerFailed(String),
}

/// Errors emitted while loading `HedgeConfig`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Parse(#[from] toml::de::Error),
    #[error(transparent)]
    Invalid(#[from] hedge_core::Error),
}

/// Errors emitted while assembling app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Config(#[from] ConfigError),
}
