//! Error types for pinch_view

use thiserror::Error;

use pinch_gesture::TuningError;
use view_sink::SinkError;

/// Main error type for pinch_view
#[derive(Error, Debug)]
pub enum PinchViewError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Frame source error: {0}")]
    Source(#[from] SourceError),

    #[error("Tuning error: {0}")]
    Tuning(#[from] TuningError),

    #[error("Host view error: {0}")]
    Sink(#[from] SinkError),

    #[error("Preview window error: {0}")]
    Window(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-related errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadFile(String),

    #[error("Failed to parse config: {0}")]
    Parse(String),

    #[error("Invalid configuration value: {field} - {message}")]
    InvalidValue { field: String, message: String },
}

/// Frame source errors
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Failed to bind to {addr}: {message}")]
    Bind { addr: String, message: String },

    #[error("Failed to open replay file {path}: {message}")]
    Open { path: String, message: String },

    #[error("Malformed frame: {0}")]
    Parse(String),

    #[error("Source not available in this build: {0}")]
    Unavailable(String),
}

/// Result type alias for pinch_view operations
pub type Result<T> = std::result::Result<T, PinchViewError>;
