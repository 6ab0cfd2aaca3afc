//! Host client for the card memory info service
//!
//! Drives the fixed two-step round trip against a card running the info
//! applet: select the applet by its application identifier, then query the
//! three free-memory counters. The client is generic over
//! [`cardmem_core::Executor`], so it runs unchanged over a PC/SC channel or
//! an in-process virtual card.
#![forbid(unsafe_code)]
#![warn(missing_docs, rustdoc::missing_crate_level_docs)]

pub mod client;
pub mod commands;
pub mod display;
pub mod error;

pub use client::CardInfoClient;
pub use commands::{GetInfoCommand, SelectCommand};
pub use error::Error;
