//! Integration tests for typed identifiers

use core_kernel::{CustomerId, PaymentId, TransactionId, VehicleRecordId};

#[test]
fn prefixes_are_distinct() {
    assert_eq!(CustomerId::prefix(), "CUST");
    assert_eq!(TransactionId::prefix(), "TXN");
    assert_eq!(PaymentId::prefix(), "PAY");
    assert_eq!(VehicleRecordId::prefix(), "VEH");
}

#[test]
fn display_and_parse_round_trip() {
    let id = CustomerId::new_v7();
    let parsed: CustomerId = id.to_string().parse().unwrap();
    assert_eq!(id, parsed);
}

#[test]
fn parses_bare_uuid() {
    let id = TransactionId::new();
    let bare = id.as_uuid().to_string();
    let parsed: TransactionId = bare.parse().unwrap();
    assert_eq!(id, parsed);
}

#[test]
fn serde_is_transparent() {
    let id = PaymentId::new();
    let json = serde_json::to_string(&id).unwrap();
    assert_eq!(json, format!("\"{}\"", id.as_uuid()));
}

#[test]
fn v7_ids_are_time_ordered() {
    let a = TransactionId::new_v7();
    let b = TransactionId::new_v7();
    assert!(a.as_uuid().as_bytes() <= b.as_uuid().as_bytes());
}
