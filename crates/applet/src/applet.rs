//! The resident info applet

use tracing::debug;

use cardmem_core::prelude::*;

use crate::accounting::MemoryAccounting;
use crate::dispatch::Operation;

/// Card-resident service answering the memory info query
///
/// Selection unconditionally succeeds and emits no data. A command whose
/// header decodes to the info operation is answered with the three
/// counters as 6 payload bytes under status `90 00`; every other header is
/// answered with `6D 00` and no payload. Processing is read-only and
/// idempotent.
#[derive(Debug)]
pub struct InfoApplet<M> {
    accounting: M,
}

impl<M: MemoryAccounting> InfoApplet<M> {
    /// Create an applet over the platform's accounting facility
    pub const fn new(accounting: M) -> Self {
        Self { accounting }
    }

    /// Handle selection by the platform
    ///
    /// Always succeeds; control returns without emitting data.
    pub fn select(&mut self) -> Response {
        Response::success(None)
    }

    /// Process one command to completion
    pub fn process(&mut self, command: &Command) -> Response {
        match Operation::decode(command.cla, command.ins) {
            Operation::GetInfo => self.memory_info(),
            Operation::Unsupported => {
                debug!(
                    cla = format_args!("{:#04x}", command.cla),
                    ins = format_args!("{:#04x}", command.ins),
                    "Rejecting unsupported command"
                );
                Response::error(status::INS_NOT_SUPPORTED)
            }
        }
    }

    /// Measure the three pools and emit the fixed 6-byte payload
    fn memory_info(&self) -> Response {
        Response::success(Some(self.accounting.measure().to_bytes()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accounting::FixedAccounting;

    fn applet() -> InfoApplet<FixedAccounting> {
        InfoApplet::new(FixedAccounting {
            persistent: 1000,
            transient_reset: 200,
            transient_deselect: 50,
        })
    }

    #[test]
    fn test_select_succeeds_without_data() {
        let response = applet().select();
        assert!(response.is_success());
        assert!(response.payload().is_none());
    }

    #[test]
    fn test_get_info_payload() {
        let mut applet = applet();
        let response = applet.process(&Command::new(0x31, 0x41, 0x00, 0x00));

        assert_eq!(response.status(), status::SUCCESS);
        let payload = response.payload().unwrap();
        assert_eq!(payload.len(), MemoryInfo::LEN);
        assert_eq!(
            MemoryInfo::from_bytes(payload).unwrap(),
            MemoryInfo {
                persistent: 1000,
                transient_reset: 200,
                transient_deselect: 50,
            }
        );
    }

    #[test]
    fn test_unsupported_headers_carry_no_payload() {
        let mut applet = applet();
        // Wrong class, wrong instruction, or both
        for (cla, ins) in [
            (0x00, 0x41),
            (0x30, 0x41),
            (0x31, 0x40),
            (0x31, 0x42),
            (0xFF, 0xFF),
        ] {
            let response = applet.process(&Command::new(cla, ins, 0x00, 0x00));
            assert_eq!(response.status(), status::INS_NOT_SUPPORTED);
            assert!(response.payload().is_none());
        }
    }

    #[test]
    fn test_repeated_queries_are_identical() {
        let mut applet = applet();
        let cmd = Command::new(0x31, 0x41, 0x00, 0x00);
        let first = applet.process(&cmd);
        let second = applet.process(&cmd);
        assert_eq!(first, second);
    }
}
