//! Error types for the PC/SC transport

use cardmem_core::Error;

/// PC/SC-specific errors
#[derive(Debug, thiserror::Error)]
pub enum PcscError {
    /// Error reported by the PC/SC stack
    #[error("PC/SC error: {0}")]
    Pcsc(#[from] pcsc::Error),

    /// No readers available
    #[error("No readers available")]
    NoReadersAvailable,

    /// Reader not found
    #[error("Reader not found: {0}")]
    ReaderNotFound(String),

    /// No card present in reader
    #[error("No card present in reader: {0}")]
    NoCard(String),
}

impl From<PcscError> for Error {
    fn from(error: PcscError) -> Self {
        match &error {
            PcscError::NoReadersAvailable
            | PcscError::ReaderNotFound(_)
            | PcscError::NoCard(_) => Self::Connection,
            PcscError::Pcsc(_) => Self::Message(error.to_string()),
        }
    }
}
