// Error types shared across the Syncline workspace.

use thiserror::Error;

/// Failure of an outbound HTTP call, either at the socket level or as a
/// non-2xx status from the remote endpoint.
#[derive(Debug, Clone, Error)]
#[error("Request to {url} failed: {message}")]
pub struct TransportError {
    pub url: String,
    pub message: String,
}

impl TransportError {
    pub fn new(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            message: message.into(),
        }
    }
}

/// Top-level error type for Syncline operations.
#[derive(Debug, Error)]
pub enum SynclineError {
    /// Invalid or incomplete runtime configuration, caught before any
    /// network call is made.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// An endpoint template could not be resolved into a valid URL.
    #[error("Template error: {0}")]
    Template(String),

    /// The anti-forgery state returned by the provider does not match
    /// the pending authorization attempt.
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// The provider redirect is missing a parameter the flow needs.
    #[error("Missing '{0}' parameter in the redirect query")]
    MissingCallbackParameter(String),

    /// The provider's token response lacks a field declared mandatory.
    #[error("Missing '{field}' field in the OAuth response from {endpoint}")]
    MissingTokenField { field: String, endpoint: String },

    /// The provider answered, but with a payload the engine cannot use.
    #[error("Response error: {0}")]
    Response(String),

    /// The HTTP exchange itself failed.
    #[error(transparent)]
    Transport(#[from] TransportError),
}

pub type Result<T> = std::result::Result<T, SynclineError>;
