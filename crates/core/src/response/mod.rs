//! APDU response definitions
//!
//! A response is an optional payload followed by the two status word bytes.

pub mod status;

use bytes::{BufMut, Bytes, BytesMut};
use tracing::trace;

use crate::error::Error;
use status::StatusWord;

/// Basic APDU response structure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    /// Response payload data
    payload: Option<Bytes>,
    /// Status word
    status: StatusWord,
}

impl Response {
    /// Create a new response with payload and status
    pub fn new(payload: Option<Bytes>, status: impl Into<StatusWord>) -> Self {
        Self {
            payload,
            status: status.into(),
        }
    }

    /// Create a success response
    pub const fn success(payload: Option<Bytes>) -> Self {
        Self {
            payload,
            status: StatusWord::new(0x90, 0x00),
        }
    }

    /// Create an error response carrying only a status word
    pub fn error(status: impl Into<StatusWord>) -> Self {
        Self {
            payload: None,
            status: status.into(),
        }
    }

    /// Parse a response from raw bytes (payload followed by status word)
    pub fn from_bytes(data: &[u8]) -> Result<Self, Error> {
        if data.len() < 2 {
            return Err(Error::Parse("response shorter than a status word"));
        }

        let (payload, trailer) = data.split_at(data.len() - 2);
        let status = StatusWord::new(trailer[0], trailer[1]);
        let payload = (!payload.is_empty()).then(|| Bytes::copy_from_slice(payload));

        trace!(
            sw1 = format_args!("{:#04x}", status.sw1),
            sw2 = format_args!("{:#04x}", status.sw2),
            payload_len = payload.as_ref().map_or(0, |p| p.len()),
            "Parsed APDU response"
        );

        Ok(Self { payload, status })
    }

    /// Get the response payload data
    pub const fn payload(&self) -> Option<&Bytes> {
        self.payload.as_ref()
    }

    /// Get the status word
    pub const fn status(&self) -> StatusWord {
        self.status
    }

    /// Check if the response indicates success
    pub const fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Consume the response, yielding the payload only on success
    ///
    /// On any other status word the payload bytes are discarded untouched.
    pub fn require_success(self) -> Result<Option<Bytes>, Error> {
        if self.is_success() {
            Ok(self.payload)
        } else {
            Err(Error::Status {
                status: self.status,
                message: None,
            })
        }
    }
}

impl TryFrom<&[u8]> for Response {
    type Error = Error;

    fn try_from(data: &[u8]) -> Result<Self, Error> {
        Self::from_bytes(data)
    }
}

impl From<Response> for Bytes {
    fn from(response: Response) -> Self {
        let mut buf = BytesMut::with_capacity(response.payload.as_ref().map_or(0, |p| p.len()) + 2);
        if let Some(payload) = response.payload {
            buf.put_slice(&payload);
        }
        buf.put_u8(response.status.sw1);
        buf.put_u8(response.status.sw2);
        buf.freeze()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::response::status::common;

    #[test]
    fn test_response_from_bytes() {
        let resp = Response::from_bytes(&[0x01, 0x02, 0x03, 0x90, 0x00]).unwrap();
        assert_eq!(resp.payload().unwrap().as_ref(), &[0x01, 0x02, 0x03]);
        assert_eq!(resp.status(), common::SUCCESS);
        assert!(resp.is_success());

        let resp = Response::from_bytes(&[0x90, 0x00]).unwrap();
        assert!(resp.payload().is_none());
        assert!(resp.is_success());

        assert!(Response::from_bytes(&[0x90]).is_err());
        assert!(Response::from_bytes(&[]).is_err());
    }

    #[test]
    fn test_require_success() {
        let resp = Response::success(Some(Bytes::from_static(&[0x01, 0x02])));
        let payload = resp.require_success().unwrap();
        assert_eq!(payload.unwrap().as_ref(), &[0x01, 0x02]);

        let resp = Response::error((0x6D, 0x00));
        let err = resp.require_success().unwrap_err();
        assert_eq!(err.status_word().unwrap().to_u16(), 0x6D00);
    }

    #[test]
    fn test_response_encoding() {
        let resp = Response::success(Some(Bytes::from_static(&[0xAA, 0xBB])));
        let bytes: Bytes = resp.into();
        assert_eq!(bytes.as_ref(), &[0xAA, 0xBB, 0x90, 0x00]);

        let resp = Response::error(common::INS_NOT_SUPPORTED);
        let bytes: Bytes = resp.into();
        assert_eq!(bytes.as_ref(), &[0x6D, 0x00]);
    }
}
