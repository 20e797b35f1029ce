//! Intake deserialization and validation.

use shared_types::{CaseData, CustodyStatus};
use validator::Validate;

#[test]
fn full_intake_payload_deserializes() {
    let case: CaseData = serde_json::from_str(
        r#"{
            "jurisdiction": "CA",
            "charges": ["ca-dui", "ca-battery"],
            "case_stage": "arraignment",
            "custody_status": "out_on_bail",
            "has_attorney": true
        }"#,
    )
    .unwrap();
    assert_eq!(case.jurisdiction, "CA");
    assert_eq!(case.charges.len(), 2);
    assert_eq!(case.custody(), CustodyStatus::OutOnBail);
    assert!(case.has_attorney);
}

/// Intake forms sometimes submit a lone charge as a bare string.
#[test]
fn bare_string_charge_becomes_single_element_list() {
    let case: CaseData =
        serde_json::from_str(r#"{"jurisdiction": "TX", "charges": "tx-dwi"}"#).unwrap();
    assert_eq!(case.charges, vec!["tx-dwi".to_string()]);
}

#[test]
fn empty_payload_fills_defaults() {
    let case: CaseData = serde_json::from_str("{}").unwrap();
    assert_eq!(case.jurisdiction, "");
    assert!(case.charges.is_empty());
    assert_eq!(case.stage(), None);
    assert_eq!(case.custody(), CustodyStatus::Unknown);
    assert!(!case.has_attorney);
}

#[test]
fn missing_jurisdiction_fails_validation() {
    let case: CaseData = serde_json::from_str(r#"{"charges": ["ca-dui"]}"#).unwrap();
    let err = case.validate().unwrap_err();
    assert!(err.field_errors().contains_key("jurisdiction"));
}

#[test]
fn populated_intake_passes_validation() {
    let case: CaseData =
        serde_json::from_str(r#"{"jurisdiction": "NY", "case_stage": "trial"}"#).unwrap();
    assert!(case.validate().is_ok());
}

#[test]
fn unrecognized_stage_text_parses_to_none() {
    let case: CaseData =
        serde_json::from_str(r#"{"jurisdiction": "CA", "case_stage": "booking"}"#).unwrap();
    assert_eq!(case.stage(), None);
}
