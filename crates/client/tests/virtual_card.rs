//! End-to-end round trips against the in-process virtual card

use cardmem_applet::{FixedAccounting, VirtualCard};
use cardmem_client::{CardInfoClient, Error, SelectCommand};
use cardmem_core::prelude::*;
use hex_literal::hex;

fn executor() -> CardExecutor<VirtualCard<FixedAccounting>> {
    CardExecutor::new(VirtualCard::new(FixedAccounting {
        persistent: 1000,
        transient_reset: 200,
        transient_deselect: 50,
    }))
}

#[test]
fn test_select_then_query() {
    let mut client = CardInfoClient::new(executor());
    client.select().unwrap();

    let info = client.memory_info().unwrap();
    assert_eq!(
        info,
        MemoryInfo {
            persistent: 1000,
            transient_reset: 200,
            transient_deselect: 50,
        }
    );
}

#[test]
fn test_repeated_queries_return_identical_values() {
    let mut client = CardInfoClient::new(executor());
    client.select().unwrap();

    let first = client.memory_info().unwrap();
    let second = client.memory_info().unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_query_without_selection_fails() {
    let mut client = CardInfoClient::new(executor());
    let err = client.memory_info().unwrap_err();
    assert!(matches!(err, Error::Card(sw) if sw.to_u16() == 0x6985));
}

#[test]
fn test_selection_with_wrong_identifier_fails() {
    // Last identifier byte altered
    let mut executor = executor();
    let err = executor
        .execute(&SelectCommand::with_aid(
            hex!("32A1A34E13221E123318").to_vec(),
        ))
        .unwrap_err();
    assert!(matches!(err, Error::SelectionFailed(sw) if sw.to_u16() == 0x6A82));
}

#[test]
fn test_unsupported_instruction_is_rejected() {
    let mut executor = executor();
    executor.execute(&SelectCommand::applet()).unwrap();

    let response = executor.transmit(&hex!("31420000")).unwrap();
    assert_eq!(response.as_ref(), hex!("6D00"));
}

#[test]
fn test_raw_response_layout() {
    let mut executor = executor();
    executor.execute(&SelectCommand::applet()).unwrap();

    let response = executor.transmit(&hex!("31410000")).unwrap();
    assert_eq!(response.len(), 8);
    assert_eq!(&response[..6], hex!("03E800C80032"));
    assert_eq!(&response[6..], hex!("9000"));
}
