//! GET INFO command querying the three memory counters

use cardmem_core::prelude::*;

use crate::error::Error;

/// Memory info query: `CLA 0x31, INS 0x41, P1 0x00, P2 0x00`, no data
///
/// The reply carries the three counters as consecutive big-endian u16
/// values at offsets 0, 2 and 4. The payload is only interpreted when the
/// status word equals `90 00`; any other status is surfaced with its
/// numeric value.
#[derive(Debug, Clone, Copy, Default)]
pub struct GetInfoCommand;

impl GetInfoCommand {
    /// Create the query command
    pub const fn new() -> Self {
        Self
    }
}

impl ApduCommand for GetInfoCommand {
    type Success = MemoryInfo;
    type Error = Error;

    fn convert_error(error: cardmem_core::Error) -> Self::Error {
        error.into()
    }

    fn class(&self) -> u8 {
        protocol::CLA_INFO
    }

    fn instruction(&self) -> u8 {
        protocol::INS_GET_INFO
    }

    fn p1(&self) -> u8 {
        0x00
    }

    fn p2(&self) -> u8 {
        0x00
    }

    fn data(&self) -> Option<&[u8]> {
        None
    }

    fn parse_response(response: Response) -> Result<Self::Success, Self::Error> {
        if !response.is_success() {
            return Err(Error::Card(response.status()));
        }
        let payload = response.payload().ok_or(Error::MissingPayload)?;
        Ok(MemoryInfo::from_bytes(payload)?)
    }
}
