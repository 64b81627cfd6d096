//! Error types for gesture interception.

use thiserror::Error;

/// Error raised by a host context handler.
pub type HandlerError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors that can occur while intercepting or forwarding a gesture.
#[derive(Debug, Error)]
pub enum GestureError {
    /// A context handler claimed the gesture and then failed.
    #[error("context handler {script} failed: {source}")]
    Handler {
        script: String,
        #[source]
        source: HandlerError,
    },

    /// The raw gesture could not be forwarded to the system.
    #[error("failed to forward gesture {gesture}: {reason}")]
    Forward { gesture: String, reason: String },

    /// A gesture map could not be parsed.
    #[error("invalid gesture map: {0}")]
    InvalidMap(String),
}

impl From<serde_json::Error> for GestureError {
    fn from(e: serde_json::Error) -> Self {
        GestureError::InvalidMap(e.to_string())
    }
}
