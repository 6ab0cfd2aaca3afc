//! Error types for the host client

use cardmem_core::StatusWord;

/// Errors surfaced while driving the query round trip
///
/// Card-reported failures carry the numeric status word so the operator
/// sees exactly what the card answered.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Channel or protocol-plumbing failure
    #[error(transparent)]
    Apdu(#[from] cardmem_core::Error),

    /// The card refused applet selection
    #[error("applet selection failed with status {0}")]
    SelectionFailed(StatusWord),

    /// The card answered the query with a non-success status word
    #[error("card reported status {0}")]
    Card(StatusWord),

    /// Success status but no payload to decode
    #[error("response payload missing")]
    MissingPayload,
}
