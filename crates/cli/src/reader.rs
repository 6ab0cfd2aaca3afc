//! Reader discovery helpers

use cardmem_transport_pcsc::{PcscDeviceManager, PcscError, PcscReader};

/// Pick a reader: by name when given, otherwise the first one holding a card
///
/// Fails before any command is sent when no suitable reader exists.
pub(crate) fn pick_reader<'a>(
    readers: &'a [PcscReader],
    name: Option<&str>,
) -> Result<&'a PcscReader, PcscError> {
    match name {
        Some(name) => readers
            .iter()
            .find(|r| r.name() == name)
            .ok_or_else(|| PcscError::ReaderNotFound(name.to_string())),
        None => readers
            .iter()
            .find(|r| r.has_card())
            .ok_or_else(|| PcscError::NoCard("no card found in any reader".to_string())),
    }
}

/// List all available readers with their card status
pub(crate) fn list_readers(manager: &PcscDeviceManager) -> Result<(), PcscError> {
    let readers = manager.list_readers()?;

    println!("Available readers:");
    for (i, reader) in readers.iter().enumerate() {
        let status = if reader.has_card() {
            "card present"
        } else {
            "no card"
        };
        println!("{}. {} ({})", i + 1, reader.name(), status);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reader(name: &str, has_card: bool) -> PcscReader {
        PcscReader::new(name.to_string(), has_card, None)
    }

    #[test]
    fn test_pick_reader_with_no_readers() {
        assert!(pick_reader(&[], None).is_err());
        assert!(pick_reader(&[], Some("ACS ACR122U")).is_err());
    }

    #[test]
    fn test_pick_reader_prefers_card_present() {
        let readers = [reader("Reader A", false), reader("Reader B", true)];
        assert_eq!(pick_reader(&readers, None).unwrap().name(), "Reader B");
    }

    #[test]
    fn test_pick_reader_by_name() {
        let readers = [reader("Reader A", false), reader("Reader B", true)];
        assert_eq!(
            pick_reader(&readers, Some("Reader A")).unwrap().name(),
            "Reader A"
        );
        assert!(pick_reader(&readers, Some("Reader C")).is_err());
    }

    #[test]
    fn test_pick_reader_without_card_fails() {
        let readers = [reader("Reader A", false)];
        assert!(matches!(
            pick_reader(&readers, None),
            Err(PcscError::NoCard(_))
        ));
    }
}
