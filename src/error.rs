//! Error handling for feed fetching, parsing and rendering.
//!
//! Transport, parse and selection failures are kept distinct so the calling
//! layer can decide how to word them for the user.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SugarError {
    #[error("Network error fetching {url}: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Unexpected response status {status} from {url}")]
    HttpStatus { status: u16, url: String },

    #[error("Empty response body from {url}")]
    EmptyBody { url: String },

    #[error("Malformed timestamp '{text}': {reason}")]
    MalformedTimestamp { text: String, reason: String },

    #[error("Malformed feed line {line_number}: {reason} (line: '{line}')")]
    MalformedLine {
        line_number: usize,
        line: String,
        reason: String,
    },

    #[error("Invalid reading count '{value}': expected a positive integer")]
    InvalidCount { value: String },

    #[error("Requested {requested} readings but the feed only has {available}")]
    IndexOutOfRange { requested: usize, available: usize },

    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl SugarError {
    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a malformed timestamp error
    pub fn malformed_timestamp(text: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedTimestamp {
            text: text.into(),
            reason: reason.into(),
        }
    }

    /// Create a malformed line error for a 1-based line number
    pub fn malformed_line(
        line_number: usize,
        line: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::MalformedLine {
            line_number,
            line: line.into(),
            reason: reason.into(),
        }
    }

    /// True for failures raised while talking to the feed endpoint
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Self::Network { .. } | Self::HttpStatus { .. } | Self::EmptyBody { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, SugarError>;
