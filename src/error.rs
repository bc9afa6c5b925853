//! Error types for flac2wav

use thiserror::Error;

/// Result type alias for flac2wav operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for flac2wav
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Decoder initialization error
    #[error("Initialization error: {0}")]
    Init(String),

    /// Format error
    #[error("Format error: {0}")]
    Format(String),

    /// Decode error reported by the decoding engine mid-stream
    #[error("Stream error: {0}")]
    Stream(String),

    /// Unsupported stream parameters
    #[error("Unsupported: {0}")]
    Unsupported(String),

    /// Invalid state
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// End of stream
    #[error("End of stream")]
    EndOfStream,
}

impl Error {
    /// Create an initialization error
    pub fn init<S: Into<String>>(msg: S) -> Self {
        Error::Init(msg.into())
    }

    /// Create a format error
    pub fn format<S: Into<String>>(msg: S) -> Self {
        Error::Format(msg.into())
    }

    /// Create a stream error
    pub fn stream<S: Into<String>>(msg: S) -> Self {
        Error::Stream(msg.into())
    }

    /// Create an unsupported error
    pub fn unsupported<S: Into<String>>(msg: S) -> Self {
        Error::Unsupported(msg.into())
    }

    /// Create an invalid state error
    pub fn invalid_state<S: Into<String>>(msg: S) -> Self {
        Error::InvalidState(msg.into())
    }
}
