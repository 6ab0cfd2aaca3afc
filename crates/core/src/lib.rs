//! Wire protocol and card channel abstractions for the card memory info service
//!
//! This crate provides the foundational types for the memory info protocol:
//! APDU commands and responses, status word interpretation, the transport
//! abstraction over a card channel, and the executor driving one synchronous
//! command/response round trip at a time.
//!
//! The [`protocol`] module is the single definition of everything both ends
//! of the wire must agree on: the application identifier, the class and
//! instruction bytes, and the fixed-layout memory counter payload. The
//! card-side service and the host-side client both consume it, so the
//! constants can never drift apart.
#![forbid(unsafe_code)]
#![warn(missing_docs, rustdoc::missing_crate_level_docs)]

// Re-export bytes for convenience
pub use bytes::{Bytes, BytesMut};

pub mod command;
pub mod error;
pub mod executor;
pub mod protocol;
pub mod response;
pub mod transport;

pub use command::{ApduCommand, Command};
pub use error::{Error, ResultExt};
pub use executor::{CardExecutor, Executor};
pub use protocol::MemoryInfo;
pub use response::Response;
pub use response::status::StatusWord;
pub use transport::CardTransport;

/// Prelude module containing commonly used traits and types
pub mod prelude {
    pub use crate::{Bytes, BytesMut, Error, ResultExt};

    pub use crate::command::{ApduCommand, Command};

    pub use crate::response::Response;
    pub use crate::response::status::{StatusWord, common as status};

    pub use crate::protocol::{self, MemoryInfo};

    pub use crate::transport::CardTransport;

    pub use crate::executor::{CardExecutor, Executor};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reexports() {
        let cmd = Command::new(protocol::CLA_INFO, protocol::INS_GET_INFO, 0x00, 0x00);
        assert_eq!(cmd.class(), 0x31);
        assert_eq!(cmd.instruction(), 0x41);

        let resp = Response::success(Some(Bytes::from_static(&[0x01, 0x02])));
        assert!(resp.is_success());
        assert_eq!(resp.status(), StatusWord::new(0x90, 0x00));
    }
}
