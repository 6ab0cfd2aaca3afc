//! Command dispatch for the info applet

use cardmem_core::protocol;

/// Closed set of operations addressable through the command header
///
/// Decoding the (CLA, INS) pair up front keeps the byte comparisons in one
/// place; everything outside the set lands on [`Operation::Unsupported`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Report the free bytes in the three memory pools
    GetInfo,
    /// Any other (CLA, INS) pair; answered with `6D 00`
    Unsupported,
}

impl Operation {
    /// Decode the operation addressed by a command header
    pub const fn decode(cla: u8, ins: u8) -> Self {
        match (cla, ins) {
            (protocol::CLA_INFO, protocol::INS_GET_INFO) => Self::GetInfo,
            _ => Self::Unsupported,
        }
    }
}
