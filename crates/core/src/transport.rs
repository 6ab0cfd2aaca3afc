//! Transport trait for APDU communication with cards
//!
//! A transport is the raw byte-exchange channel supplied by an external
//! collaborator: it sends one command frame and returns the matching
//! response frame, synchronously.

use std::fmt;

use bytes::Bytes;
use tracing::{debug, trace};

use crate::error::Error;

/// Trait for basic card transports
///
/// A transport is responsible for sending and receiving raw APDU bytes. It
/// has no knowledge of command structure or protocol semantics.
pub trait CardTransport: Send + Sync + fmt::Debug {
    /// Error type returned by the transport
    type Error: Into<Error> + fmt::Debug;

    /// Send raw APDU bytes to the card and return the response bytes
    fn transmit_raw(&mut self, command: &[u8]) -> Result<Bytes, Self::Error> {
        trace!(command = ?hex::encode(command), "Transmitting raw command");
        let result = self.do_transmit_raw(command);
        match &result {
            Ok(response) => {
                trace!(response = ?hex::encode(response), "Received raw response");
            }
            Err(e) => {
                debug!(error = ?e, "Transport error during transmission");
            }
        }
        result
    }

    /// Internal implementation of `transmit_raw`
    ///
    /// This is the method that concrete implementations should override.
    fn do_transmit_raw(&mut self, command: &[u8]) -> Result<Bytes, Self::Error>;

    /// Check if the transport is connected to a card
    fn is_connected(&self) -> bool;

    /// Reset the transport connection
    fn reset(&mut self) -> Result<(), Self::Error>;
}

#[cfg(test)]
#[derive(Debug, Clone)]
pub(crate) struct MockTransport {
    pub(crate) responses: Vec<Bytes>,
    pub(crate) commands: Vec<Bytes>,
    pub(crate) connected: bool,
}

#[cfg(test)]
impl MockTransport {
    /// Mock transport that always returns the given response
    pub(crate) fn with_response(response: Bytes) -> Self {
        Self {
            responses: vec![response],
            commands: Vec::new(),
            connected: true,
        }
    }
}

#[cfg(test)]
impl CardTransport for MockTransport {
    type Error = Error;

    fn do_transmit_raw(&mut self, command: &[u8]) -> Result<Bytes, Self::Error> {
        if !self.connected {
            return Err(Error::Connection);
        }

        self.commands.push(Bytes::copy_from_slice(command));

        if self.responses.is_empty() {
            return Err(Error::Transmission);
        }

        // Either clone the single response or take the next one
        if self.responses.len() == 1 {
            Ok(self.responses[0].clone())
        } else {
            Ok(self.responses.remove(0))
        }
    }

    fn is_connected(&self) -> bool {
        self.connected
    }

    fn reset(&mut self) -> Result<(), Self::Error> {
        self.connected = true;
        self.commands.clear();
        Ok(())
    }
}
