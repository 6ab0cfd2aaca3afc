//! APDU command definitions and traits
//!
//! Commands are ephemeral: constructed per call, serialized, and discarded
//! once the response has been parsed.

use std::fmt;

use bytes::{BufMut, Bytes, BytesMut};

use crate::error::Error;
use crate::response::Response;

/// Core trait for APDU commands
///
/// Typed commands know their header bytes and how to interpret the response
/// they provoke.
pub trait ApduCommand {
    /// Success response type
    type Success;

    /// Error response type
    type Error: fmt::Debug;

    /// Convert a core error into the command-specific error type
    fn convert_error(error: Error) -> Self::Error;

    /// Command class (CLA)
    fn class(&self) -> u8;

    /// Instruction code (INS)
    fn instruction(&self) -> u8;

    /// First parameter (P1)
    fn p1(&self) -> u8;

    /// Second parameter (P2)
    fn p2(&self) -> u8;

    /// Command payload data (optional)
    fn data(&self) -> Option<&[u8]>;

    /// Expected response length (optional)
    fn expected_length(&self) -> Option<u8> {
        None
    }

    /// Convert to raw APDU bytes
    fn to_bytes(&self) -> Bytes {
        let mut buffer = BytesMut::with_capacity(self.command_length());

        // Header: CLA, INS, P1, P2
        buffer.put_u8(self.class());
        buffer.put_u8(self.instruction());
        buffer.put_u8(self.p1());
        buffer.put_u8(self.p2());

        // Lc and data if present
        if let Some(data) = self.data() {
            buffer.put_u8(data.len() as u8);
            buffer.put_slice(data);
        }

        // Le if present
        if let Some(le) = self.expected_length() {
            buffer.put_u8(le);
        }

        buffer.freeze()
    }

    /// Length of the serialized command
    fn command_length(&self) -> usize {
        let mut length = 4;
        if let Some(data) = self.data() {
            length += 1 + data.len();
        }
        if self.expected_length().is_some() {
            length += 1;
        }
        length
    }

    /// Parse a response into the command's response type
    fn parse_response(response: Response) -> Result<Self::Success, Self::Error>;
}

/// Generic APDU command structure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    /// Command class byte
    pub cla: u8,
    /// Instruction byte
    pub ins: u8,
    /// Parameter 1
    pub p1: u8,
    /// Parameter 2
    pub p2: u8,
    /// Command data (optional)
    pub data: Option<Bytes>,
    /// Expected length (optional)
    pub le: Option<u8>,
}

impl Command {
    /// Create a new command with just the header bytes
    pub const fn new(cla: u8, ins: u8, p1: u8, p2: u8) -> Self {
        Self {
            cla,
            ins,
            p1,
            p2,
            data: None,
            le: None,
        }
    }

    /// Create a new command with data payload
    pub fn new_with_data<T: Into<Bytes>>(cla: u8, ins: u8, p1: u8, p2: u8, data: T) -> Self {
        Self {
            cla,
            ins,
            p1,
            p2,
            data: Some(data.into()),
            le: None,
        }
    }

    /// Set the data field
    pub fn with_data<T: Into<Bytes>>(mut self, data: T) -> Self {
        self.data = Some(data.into());
        self
    }

    /// Set the expected length field
    pub const fn with_le(mut self, le: u8) -> Self {
        self.le = Some(le);
        self
    }

    /// Parse a command from raw bytes
    ///
    /// Accepts the short-form cases: header only, header + Le, header + Lc +
    /// data, and header + Lc + data + Le.
    pub fn from_bytes(data: &[u8]) -> Result<Self, Error> {
        if data.len() < 4 {
            return Err(Error::InvalidCommandLength(data.len()));
        }

        let mut command = Self::new(data[0], data[1], data[2], data[3]);

        if data.len() == 4 {
            return Ok(command);
        }
        if data.len() == 5 {
            // Only Le present, no data
            command.le = Some(data[4]);
            return Ok(command);
        }

        let lc = data[4] as usize;
        if data.len() < 5 + lc {
            return Err(Error::InvalidCommandLength(data.len()));
        }
        if lc > 0 {
            command.data = Some(Bytes::copy_from_slice(&data[5..5 + lc]));
        }

        match data.len() - (5 + lc) {
            0 => {}
            1 => command.le = Some(data[5 + lc]),
            _ => return Err(Error::InvalidCommandLength(data.len())),
        }

        Ok(command)
    }
}

impl ApduCommand for Command {
    type Success = Response;
    type Error = Error;

    fn convert_error(error: Error) -> Self::Error {
        error
    }

    fn class(&self) -> u8 {
        self.cla
    }

    fn instruction(&self) -> u8 {
        self.ins
    }

    fn p1(&self) -> u8 {
        self.p1
    }

    fn p2(&self) -> u8 {
        self.p2
    }

    fn data(&self) -> Option<&[u8]> {
        self.data.as_deref()
    }

    fn expected_length(&self) -> Option<u8> {
        self.le
    }

    fn parse_response(response: Response) -> Result<Self::Success, Self::Error> {
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_only_serialization() {
        let cmd = Command::new(0x31, 0x41, 0x00, 0x00);
        assert_eq!(cmd.command_length(), 4);
        assert_eq!(cmd.to_bytes().as_ref(), &[0x31, 0x41, 0x00, 0x00]);
    }

    #[test]
    fn test_data_serialization() {
        let data = Bytes::from_static(&[0x32, 0xA1, 0xA3]);
        let cmd = Command::new_with_data(0x00, 0xA4, 0x04, 0x00, data);
        let bytes = cmd.to_bytes();

        assert_eq!(bytes[0], 0x00); // CLA
        assert_eq!(bytes[1], 0xA4); // INS
        assert_eq!(bytes[2], 0x04); // P1
        assert_eq!(bytes[3], 0x00); // P2
        assert_eq!(bytes[4], 0x03); // Lc
        assert_eq!(&bytes[5..], &[0x32, 0xA1, 0xA3]);
    }

    #[test]
    fn test_command_from_bytes() {
        // Header only
        let cmd = Command::from_bytes(&[0x31, 0x41, 0x00, 0x00]).unwrap();
        assert_eq!(cmd.cla, 0x31);
        assert_eq!(cmd.ins, 0x41);
        assert!(cmd.data.is_none());
        assert!(cmd.le.is_none());

        // Header + Le
        let cmd = Command::from_bytes(&[0x00, 0xB0, 0x00, 0x00, 0xFF]).unwrap();
        assert!(cmd.data.is_none());
        assert_eq!(cmd.le, Some(0xFF));

        // Header + Lc + data
        let cmd = Command::from_bytes(&[0x00, 0xA4, 0x04, 0x00, 0x02, 0xAA, 0xBB]).unwrap();
        assert_eq!(cmd.data.as_ref().unwrap().as_ref(), &[0xAA, 0xBB]);
        assert!(cmd.le.is_none());

        // Header + Lc + data + Le
        let cmd = Command::from_bytes(&[0x00, 0xA4, 0x04, 0x00, 0x02, 0xAA, 0xBB, 0x00]).unwrap();
        assert_eq!(cmd.data.as_ref().unwrap().as_ref(), &[0xAA, 0xBB]);
        assert_eq!(cmd.le, Some(0x00));

        // Truncated frames
        assert!(Command::from_bytes(&[0x00, 0xA4, 0x04]).is_err());
        assert!(Command::from_bytes(&[0x00, 0xA4, 0x04, 0x00, 0x05, 0x01]).is_err());
    }

    #[test]
    fn test_round_trip() {
        let cmd = Command::new_with_data(0x00, 0xA4, 0x04, 0x00, Bytes::from_static(&[0x01; 10]));
        let parsed = Command::from_bytes(&cmd.to_bytes()).unwrap();
        assert_eq!(parsed, cmd);
    }
}
