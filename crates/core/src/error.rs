//! Crate-wide error type for protocol and channel failures
//!
//! All failures surface synchronously to the immediate caller; there is no
//! retry layer and no partial-result path.

use crate::response::status::StatusWord;

/// Error type covering every failure mode of a command round trip
#[derive(Debug, Clone, Eq, PartialEq, thiserror::Error)]
pub enum Error {
    /// Failed to connect to the device
    #[error("Connection error: failed to connect to device")]
    Connection,

    /// Failed to transmit data over the card channel
    #[error("Transmission error: failed to transmit data")]
    Transmission,

    /// Parse error when processing a frame
    #[error("Parse error: {0}")]
    Parse(&'static str),

    /// Card-reported status word other than success
    #[error("Status error {status}, message: {message:?}")]
    Status {
        /// Status word that caused the error
        status: StatusWord,
        /// Optional error message
        message: Option<&'static str>,
    },

    /// Command frame has an impossible length
    #[error("Invalid command length: {0}")]
    InvalidCommandLength(usize),

    /// Error with contextual message wrapping a source error
    #[error("{context}: {source}")]
    Context {
        /// Contextual message
        context: String,
        /// Source error
        source: Box<Self>,
    },

    /// Generic dynamic error with string message
    #[error("{0}")]
    Message(String),
}

impl Error {
    /// Wrap this error with context information
    pub fn with_context<S: Into<String>>(self, context: S) -> Self {
        Self::Context {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// Create a new error with a dynamic message
    pub fn message<S: Into<String>>(message: S) -> Self {
        Self::Message(message.into())
    }

    /// Create a new status error
    pub const fn status(sw1: u8, sw2: u8) -> Self {
        Self::Status {
            status: StatusWord::new(sw1, sw2),
            message: None,
        }
    }

    /// Create a new status error with a message
    pub const fn status_with_message(sw1: u8, sw2: u8, message: &'static str) -> Self {
        Self::Status {
            status: StatusWord::new(sw1, sw2),
            message: Some(message),
        }
    }

    /// Get the status word if this is a status error
    pub const fn status_word(&self) -> Option<StatusWord> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Extension trait for `Result` with protocol errors
pub trait ResultExt<T> {
    /// Add context to an error
    fn context<S: Into<String>>(self, context: S) -> Result<T, Error>;
}

impl<T> ResultExt<T> for Result<T, Error> {
    fn context<S: Into<String>>(self, context: S) -> Self {
        self.map_err(|e| e.with_context(context))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_word_accessor() {
        let err = Error::status(0x6D, 0x00);
        assert_eq!(err.status_word(), Some(StatusWord::new(0x6D, 0x00)));
        assert_eq!(Error::Transmission.status_word(), None);
    }

    #[test]
    fn test_context_wrapping() {
        let err: Result<(), Error> = Err(Error::Connection);
        let wrapped = err.context("opening reader").unwrap_err();
        assert!(wrapped.to_string().starts_with("opening reader: "));
    }
}
