//! Card-resident memory info service
//!
//! The applet answers exactly one query type after being selected: it
//! measures the free bytes in the platform's three memory pools and emits
//! them as a fixed 6-byte payload. The platform's resource accounting is
//! abstracted behind the [`MemoryAccounting`] capability trait, so the
//! service itself carries no dependency on any particular execution
//! environment.
//!
//! [`VirtualCard`] hosts an applet instance behind the
//! [`cardmem_core::CardTransport`] trait, which makes the whole wire
//! protocol exercisable in-process, without a reader.
#![forbid(unsafe_code)]
#![warn(missing_docs, rustdoc::missing_crate_level_docs)]

pub mod accounting;
pub mod applet;
pub mod dispatch;
pub mod virtual_card;

pub use accounting::{FixedAccounting, MemoryAccounting, MemoryPool};
pub use applet::InfoApplet;
pub use dispatch::Operation;
pub use virtual_card::VirtualCard;
