// src/error.rs
use std::path::PathBuf;

use thiserror::Error;

/// Result type alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// No usable API key in the environment or `.env`.
    #[error("API key not found. Set API_KEY in the environment or in a .env file")]
    MissingApiKey,

    /// Any other invalid configuration value.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Network failure talking to the API.
    #[error("Request to {endpoint} failed: {source}")]
    Request {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    /// The API answered with a non-success status.
    #[error("{endpoint} returned HTTP {status}: {body}")]
    Status { endpoint: String, status: u16, body: String },

    /// A request parameter was rejected before sending.
    #[error("Invalid {name} parameter: {value}")]
    InvalidParam { name: &'static str, value: String },

    /// The API body was not the JSON shape we asked for.
    #[error("Could not decode {endpoint} response: {message}")]
    Decode { endpoint: String, message: String },

    /// The team list came back empty, so there is nothing to collect.
    #[error("No teams returned by the API")]
    NoTeams,

    /// A dataset file (or the whole directory) is not there.
    #[error("No data at {}", .0.display())]
    DataMissing(PathBuf),

    /// A dataset file or record does not have the expected shape.
    #[error("Malformed {what}: {reason}")]
    Malformed { what: String, reason: String },

    #[error("I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error at {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io { path: path.into(), source }
    }

    pub fn json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Error::Json { path: path.into(), source }
    }

    /// Per-item failures the collector logs and skips.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            Error::Request { .. } | Error::Status { .. } | Error::InvalidParam { .. } | Error::Decode { .. }
        )
    }
}
