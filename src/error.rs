//! Error handling for noisy-tone
//!
//! Every failure is fatal at the process boundary; the variants exist so the
//! binary can report what went wrong instead of crashing on a degenerate
//! buffer.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for noisy-tone operations
pub type Result<T> = std::result::Result<T, ToneError>;

/// Main error type for synthesis and WAV I/O
#[derive(Error, Debug)]
pub enum ToneError {
    // Parameter Errors
    #[error("Invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    #[error("Signal is empty: {sample_rate} Hz x {duration_secs}s rounds to zero samples")]
    EmptySignal { sample_rate: u32, duration_secs: f64 },

    // Processing Errors
    #[error("Buffer length mismatch: expected {expected} samples, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    // Audio File Errors
    #[error("Failed to write audio file: {path}")]
    AudioWrite {
        path: PathBuf,
        #[source]
        source: hound::Error,
    },

    #[error("Failed to write audio stream")]
    SinkWrite {
        #[source]
        source: hound::Error,
    },

    #[error("Failed to read audio file: {path}")]
    AudioRead {
        path: PathBuf,
        #[source]
        source: hound::Error,
    },

    #[error("Unsupported audio format: {format}")]
    UnsupportedFormat { format: String },

    // I/O Errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // Serialization Errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ToneError {
    /// Get the error code for this error type
    pub fn error_code(&self) -> &'static str {
        match self {
            ToneError::InvalidParameter { .. } => "INVALID_PARAMETER",
            ToneError::EmptySignal { .. } => "EMPTY_SIGNAL",
            ToneError::LengthMismatch { .. } => "LENGTH_MISMATCH",
            ToneError::AudioWrite { .. } => "AUDIO_WRITE",
            ToneError::SinkWrite { .. } => "SINK_WRITE",
            ToneError::AudioRead { .. } => "AUDIO_READ",
            ToneError::UnsupportedFormat { .. } => "UNSUPPORTED_FORMAT",
            ToneError::Io(_) => "IO_ERROR",
            ToneError::Serialization(_) => "SERIALIZATION_ERROR",
        }
    }

    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        ToneError::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}
