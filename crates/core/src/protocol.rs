//! Shared protocol definition for the memory info service
//!
//! This module is the single interface-definition artifact consumed by both
//! the card-resident applet and the host client. Every constant the two ends
//! of the wire must agree on lives here, exactly once.

use bytes::{BufMut, Bytes, BytesMut};

use crate::error::Error;

/// Application identifier the info applet registers under.
///
/// Sent as the data field of a select-by-name command. The resulting frame
/// is `00 A4 04 00 0A 32 A1 A3 4E 13 22 1E 12 33 19` and must match the
/// applet's registered name bit for bit.
pub const AID: [u8; 10] = [
    0x32, 0xA1, 0xA3, 0x4E, 0x13, 0x22, 0x1E, 0x12, 0x33, 0x19,
];

/// Class byte of the info protocol.
pub const CLA_INFO: u8 = 0x31;

/// Instruction byte of the memory info query.
pub const INS_GET_INFO: u8 = 0x41;

/// Header bytes of the select-by-name command.
pub mod select {
    /// Interindustry class byte.
    pub const CLA: u8 = 0x00;
    /// SELECT instruction.
    pub const INS: u8 = 0xA4;
    /// P1: select by DF name.
    pub const P1_BY_NAME: u8 = 0x04;
    /// P2: first or only occurrence.
    pub const P2: u8 = 0x00;
}

/// Free memory counters reported by the card, in bytes.
///
/// The wire layout is three big-endian u16 values in this exact field
/// order, 6 bytes total. The payload is only meaningful when the response
/// status word is `90 00`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemoryInfo {
    /// Free persistent storage, retained across power cycles.
    pub persistent: u16,
    /// Free transient memory cleared on card reset.
    pub transient_reset: u16,
    /// Free transient memory cleared when the applet is deselected.
    pub transient_deselect: u16,
}

impl MemoryInfo {
    /// Encoded payload length in bytes.
    pub const LEN: usize = 6;

    /// Encode the counters into the fixed 6-byte payload.
    pub fn to_bytes(&self) -> Bytes {
        let mut buf = BytesMut::with_capacity(Self::LEN);
        buf.put_u16(self.persistent);
        buf.put_u16(self.transient_reset);
        buf.put_u16(self.transient_deselect);
        buf.freeze()
    }

    /// Decode counters from a response payload.
    ///
    /// The payload must be exactly 6 bytes; the three counters are read at
    /// offsets 0, 2 and 4.
    pub fn from_bytes(data: &[u8]) -> Result<Self, Error> {
        if data.len() != Self::LEN {
            return Err(Error::Parse("memory info payload must be exactly 6 bytes"));
        }
        Ok(Self {
            persistent: u16::from_be_bytes([data[0], data[1]]),
            transient_reset: u16::from_be_bytes([data[2], data[3]]),
            transient_deselect: u16::from_be_bytes([data[4], data[5]]),
        })
    }
}
