//! Host-side driver for the query round trip

use tracing::{debug, info};

use cardmem_core::prelude::*;

use crate::commands::{GetInfoCommand, SelectCommand};
use crate::error::Error;

/// Host client owning the channel to the card for the session
///
/// Drives the fixed two-step flow: select the applet by identifier, then
/// query the memory counters. Selection failure is fatal: the error is
/// returned and no further command should be sent on the channel.
#[derive(Debug)]
pub struct CardInfoClient<E: Executor> {
    executor: E,
}

impl<E: Executor> CardInfoClient<E> {
    /// Create a client over an established channel
    pub const fn new(executor: E) -> Self {
        Self { executor }
    }

    /// Select the info applet by its application identifier
    pub fn select(&mut self) -> Result<(), Error> {
        debug!("Selecting info applet");
        self.executor.execute(&SelectCommand::applet())?;
        info!("Applet selected");
        Ok(())
    }

    /// Query the three free-memory counters
    pub fn memory_info(&mut self) -> Result<MemoryInfo, Error> {
        debug!("Sending memory info request");
        self.executor.execute(&GetInfoCommand::new())
    }

    /// Get a mutable reference to the underlying executor
    pub fn executor_mut(&mut self) -> &mut E {
        &mut self.executor
    }

    /// Take back the executor
    pub fn into_executor(self) -> E {
        self.executor
    }
}
