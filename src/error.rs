//! Error types for controller interactions.

use thiserror::Error;

/// Errors from talking to the controller's subnet service.
///
/// Every failure is returned to the caller; nothing here retries or
/// terminates the process.
#[derive(Error, Debug)]
pub enum ControllerError {
    /// Network-level failure reaching the controller, including
    /// timeouts and body-read failures.
    #[error("transport error reaching controller: {0}")]
    Transport(#[from] reqwest::Error),

    /// Response status outside the expected set for the operation.
    #[error("unexpected status {status} from controller during {operation}")]
    UnexpectedStatus {
        operation: &'static str,
        status: u16,
    },

    /// Response body was not the JSON shape the controller documents.
    /// `path` is the JSON path at which deserialization failed.
    #[error("malformed controller response at {path}: {source}")]
    MalformedResponse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Errors assembling a [`ControllerConfig`](crate::config::ControllerConfig)
/// from the environment.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    MissingVar(&'static str),

    #[error("invalid value for {var}: {value}")]
    InvalidValue { var: &'static str, value: String },
}
