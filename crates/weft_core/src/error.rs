//! Error types for weft_core

use thiserror::Error;

/// Errors raised while loading or installing device configuration
#[derive(Error, Debug)]
pub enum WeftError {
    /// Device configuration could not be read from disk
    #[error("Failed to read device configuration {path}: {source}")]
    ConfigRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Device configuration is not valid TOML
    #[error("Invalid device configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Device configuration declares no devices
    #[error("Device configuration must declare at least one device")]
    NoDevices,

    /// Two devices share one id
    #[error("Duplicate device id: {0}")]
    DuplicateDevice(String),

    /// A device's min width is larger than its max width
    #[error("Device '{id}' has min width {min_width}px above max width {max_width}px")]
    InvertedBounds {
        id: String,
        min_width: u32,
        max_width: u32,
    },

    /// The process-wide device set was already installed
    #[error("Global device configuration is already initialized")]
    AlreadyInitialized,
}

/// Result type for weft_core operations
pub type Result<T> = std::result::Result<T, WeftError>;
