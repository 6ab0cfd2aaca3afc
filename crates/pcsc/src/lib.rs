//! PC/SC transport implementation for the memory info client
//!
//! This crate provides an implementation of the `CardTransport` trait from
//! `cardmem-core` using the PC/SC API: reader discovery and the synchronous
//! byte-exchange channel to a connected card.
//!
//! # Examples
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use cardmem_core::prelude::*;
//! use cardmem_transport_pcsc::PcscDeviceManager;
//!
//! let manager = PcscDeviceManager::new()?;
//! let readers = manager.list_readers()?;
//!
//! // Connect to the first reader holding a card
//! let reader = readers
//!     .iter()
//!     .find(|r| r.has_card())
//!     .ok_or("no card present in any reader")?;
//!
//! let transport = manager.open_reader(reader.name())?;
//! let mut executor = CardExecutor::new(transport);
//!
//! let select = Command::new_with_data(0x00, 0xA4, 0x04, 0x00, protocol::AID.to_vec());
//! let response = executor.execute(&select)?;
//! println!("select status: {}", response.status());
//! # Ok(())
//! # }
//! ```
#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod manager;
mod reader;
mod transport;

pub use config::{PcscConfig, ShareMode};
pub use error::PcscError;
pub use manager::PcscDeviceManager;
pub use reader::PcscReader;
pub use transport::PcscTransport;

// Re-export some pcsc types for convenience
pub use pcsc::{Protocol, Protocols};
