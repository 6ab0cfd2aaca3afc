//! In-process card platform hosting the info applet
//!
//! The platform owns applet selection: a select-by-name frame whose data
//! matches the registered identifier selects the applet, any other name is
//! answered `6A 82`, and non-select commands reach the applet only while it
//! is selected. Because it implements [`CardTransport`], host-side code can
//! be driven end to end without a reader.

use std::fmt;

use cardmem_core::prelude::*;

use crate::accounting::MemoryAccounting;
use crate::applet::InfoApplet;

/// Virtual card platform with a single resident applet
pub struct VirtualCard<M> {
    applet: InfoApplet<M>,
    selected: bool,
}

impl<M> fmt::Debug for VirtualCard<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VirtualCard")
            .field("selected", &self.selected)
            .finish()
    }
}

impl<M: MemoryAccounting> VirtualCard<M> {
    /// Create a card hosting an applet over the given accounting facility
    pub const fn new(accounting: M) -> Self {
        Self {
            applet: InfoApplet::new(accounting),
            selected: false,
        }
    }

    /// Whether the applet is currently selected
    pub const fn is_selected(&self) -> bool {
        self.selected
    }

    fn handle(&mut self, command: &Command) -> Response {
        if is_select_by_name(command) {
            return self.handle_select(command);
        }
        if !self.selected {
            return Response::error(status::CONDITIONS_NOT_SATISFIED);
        }
        self.applet.process(command)
    }

    fn handle_select(&mut self, command: &Command) -> Response {
        if command.data.as_deref() == Some(protocol::AID.as_slice()) {
            self.selected = true;
            self.applet.select()
        } else {
            self.selected = false;
            Response::error(status::FILE_NOT_FOUND)
        }
    }
}

const fn is_select_by_name(command: &Command) -> bool {
    command.cla == protocol::select::CLA
        && command.ins == protocol::select::INS
        && command.p1 == protocol::select::P1_BY_NAME
}

impl<M> CardTransport for VirtualCard<M>
where
    M: MemoryAccounting + Send + Sync,
{
    type Error = Error;

    fn do_transmit_raw(&mut self, command: &[u8]) -> Result<Bytes, Self::Error> {
        let command = Command::from_bytes(command)?;
        Ok(self.handle(&command).into())
    }

    fn is_connected(&self) -> bool {
        true
    }

    fn reset(&mut self) -> Result<(), Self::Error> {
        self.selected = false;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accounting::FixedAccounting;
    use hex_literal::hex;

    const SELECT_APDU: [u8; 15] = hex!("00A404000A32A1A34E13221E123319");

    fn card() -> VirtualCard<FixedAccounting> {
        VirtualCard::new(FixedAccounting {
            persistent: 1000,
            transient_reset: 200,
            transient_deselect: 50,
        })
    }

    #[test]
    fn test_select_with_exact_identifier() {
        let mut card = card();
        let response = card.transmit_raw(&SELECT_APDU).unwrap();
        assert_eq!(response.as_ref(), hex!("9000"));
        assert!(card.is_selected());
    }

    #[test]
    fn test_select_with_any_altered_name_byte_fails() {
        // Flip every byte of the name in turn; each altered frame must be
        // refused and leave the applet deselected.
        for i in 5..SELECT_APDU.len() {
            let mut frame = SELECT_APDU;
            frame[i] ^= 0x01;

            let mut card = card();
            let response = card.transmit_raw(&frame).unwrap();
            assert_eq!(response.as_ref(), hex!("6A82"));
            assert!(!card.is_selected());
        }
    }

    #[test]
    fn test_command_before_selection_is_refused() {
        let mut card = card();
        let response = card.transmit_raw(&hex!("31410000")).unwrap();
        assert_eq!(response.as_ref(), hex!("6985"));
    }

    #[test]
    fn test_get_info_frame_layout() {
        let mut card = card();
        card.transmit_raw(&SELECT_APDU).unwrap();

        let response = card.transmit_raw(&hex!("31410000")).unwrap();
        assert_eq!(response.len(), MemoryInfo::LEN + 2);
        assert_eq!(response.as_ref(), hex!("03E800C8 0032 9000"));
    }

    #[test]
    fn test_unsupported_instruction_after_selection() {
        let mut card = card();
        card.transmit_raw(&SELECT_APDU).unwrap();

        let response = card.transmit_raw(&hex!("31420000")).unwrap();
        assert_eq!(response.as_ref(), hex!("6D00"));
    }

    #[test]
    fn test_reset_deselects() {
        let mut card = card();
        card.transmit_raw(&SELECT_APDU).unwrap();
        assert!(card.is_selected());

        card.reset().unwrap();
        assert!(!card.is_selected());

        let response = card.transmit_raw(&hex!("31410000")).unwrap();
        assert_eq!(response.as_ref(), hex!("6985"));
    }
}
