//! SELECT command addressing the info applet by name

use cardmem_core::prelude::*;

use crate::error::Error;

/// Select-by-name command carrying an application identifier
#[derive(Debug, Clone)]
pub struct SelectCommand {
    aid: Bytes,
}

impl SelectCommand {
    /// Select command for the info applet's registered identifier
    pub fn applet() -> Self {
        Self::with_aid(Bytes::from_static(&protocol::AID))
    }

    /// Select command for an arbitrary identifier
    pub fn with_aid(aid: impl Into<Bytes>) -> Self {
        Self { aid: aid.into() }
    }
}

impl ApduCommand for SelectCommand {
    type Success = ();
    type Error = Error;

    fn convert_error(error: cardmem_core::Error) -> Self::Error {
        error.into()
    }

    fn class(&self) -> u8 {
        protocol::select::CLA
    }

    fn instruction(&self) -> u8 {
        protocol::select::INS
    }

    fn p1(&self) -> u8 {
        protocol::select::P1_BY_NAME
    }

    fn p2(&self) -> u8 {
        protocol::select::P2
    }

    fn data(&self) -> Option<&[u8]> {
        Some(&self.aid)
    }

    fn parse_response(response: Response) -> Result<Self::Success, Self::Error> {
        if response.is_success() {
            Ok(())
        } else {
            Err(Error::SelectionFailed(response.status()))
        }
    }
}
