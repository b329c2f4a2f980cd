//! Error types for the prop-controller message bus

use thiserror::Error;

/// Failure reported by a message sink
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SendError {
    /// The receiving side has gone away
    #[error("Message sink disconnected")]
    Disconnected,

    /// The sink refused the message
    #[error("Message rejected: {0}")]
    Rejected(String),
}

/// Result type for controller operations that send messages
pub type Result<T> = std::result::Result<T, SendError>;
