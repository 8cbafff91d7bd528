use std::path::PathBuf;

use thiserror::Error;

/// Usage line printed when the input text is missing
pub const USAGE: &str = "Usage: rephrase <text_to_rephrase> [tone] [enable_log]";

/// Hint printed after the usage line
pub const TONE_HINT: &str = "Example tones: formal, casual, friendly, professional, humorous, etc.";

/// Every way a single rephrase run can fail.
#[derive(Debug, Error)]
pub enum RephraseError {
    #[error("Credentials file not found at {}", .0.display())]
    ConfigNotFound(PathBuf),

    #[error("Invalid JSON format in {}: {reason}", .path.display())]
    ConfigMalformed { path: PathBuf, reason: String },

    #[error("No 'api_key' found in {}", .0.display())]
    ConfigIncomplete(PathBuf),

    #[error("{}\n{}", USAGE, TONE_HINT)]
    Usage,

    #[error("Gemini API call failed: {0}")]
    ExternalCallFailed(String),

    #[error("Failed to write log record to {}: {source}", .path.display())]
    LoggingIoFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, RephraseError>;
