//! Executor driving one command/response exchange at a time
//!
//! The executor owns the channel to the card for the duration of a session
//! and issues strictly one command at a time, blocking until the response
//! arrives before the next command may be sent.

use std::fmt;

use bytes::Bytes;
use tracing::{debug, trace};

use crate::command::ApduCommand;
use crate::error::{Error, ResultExt};
use crate::response::Response;
use crate::transport::CardTransport;

/// Trait for APDU command execution
pub trait Executor: Send + Sync + fmt::Debug {
    /// Transmit raw command bytes and return the raw response bytes
    fn transmit(&mut self, command: &[u8]) -> Result<Bytes, Error> {
        trace!(command = ?hex::encode(command), "Transmitting command");
        let response = self.do_transmit(command);
        match &response {
            Ok(bytes) => {
                trace!(response = ?hex::encode(bytes), "Received response");
            }
            Err(err) => {
                debug!(error = ?err, "Error during transmission");
            }
        }
        response
    }

    /// Internal implementation of `transmit`
    fn do_transmit(&mut self, command: &[u8]) -> Result<Bytes, Error>;

    /// Execute a typed APDU command and parse its response
    fn execute<C: ApduCommand>(&mut self, command: &C) -> Result<C::Success, C::Error>
    where
        Self: Sized,
    {
        let response_bytes = self
            .transmit(&command.to_bytes())
            .map_err(C::convert_error)?;
        let response = Response::from_bytes(&response_bytes).map_err(C::convert_error)?;
        C::parse_response(response)
    }

    /// Reset the executor, including the transport
    fn reset(&mut self) -> Result<(), Error>;
}

/// Card executor binding a transport to the request-then-reply model
#[derive(Debug)]
pub struct CardExecutor<T: CardTransport> {
    /// The transport used for communication
    transport: T,
    /// The last response received
    last_response: Option<Bytes>,
}

impl<T: CardTransport> CardExecutor<T> {
    /// Create a new card executor with the given transport
    pub const fn new(transport: T) -> Self {
        Self {
            transport,
            last_response: None,
        }
    }

    /// Get a reference to the underlying transport
    pub const fn transport(&self) -> &T {
        &self.transport
    }

    /// Get a mutable reference to the underlying transport
    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    /// Take ownership of the transport and return it
    pub fn into_transport(self) -> T {
        self.transport
    }

    /// Get the last response received
    pub const fn last_response(&self) -> Option<&Bytes> {
        self.last_response.as_ref()
    }
}

impl<T: CardTransport> Executor for CardExecutor<T> {
    fn do_transmit(&mut self, command: &[u8]) -> Result<Bytes, Error> {
        let response = self
            .transport
            .transmit_raw(command)
            .map_err(Into::into)
            .context("Transport error")?;
        self.last_response = Some(response.clone());
        Ok(response)
    }

    fn reset(&mut self) -> Result<(), Error> {
        self.transport
            .reset()
            .map_err(Into::into)
            .context("Failed to reset transport")?;
        self.last_response = None;
        Ok(())
    }
}
