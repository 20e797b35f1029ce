//! Degradation paths: composition must produce a usable document from
//! unknown charges, unknown jurisdictions, unknown stages, and entirely
//! empty intake. Nothing here may panic or return an error.

use guidance::compose;
use shared_types::CaseData;

use crate::common::case;

#[test]
fn unknown_charge_ids_are_skipped_silently() {
    let doc = compose(&case(
        "CA",
        &["ca-jaywalking-while-juggling"],
        "arrest",
        "released",
        false,
    ));
    // No charge matched, so no statute-prefixed alerts.
    assert!(!doc.critical_alerts.iter().any(|a| a.starts_with('[')));
    assert!(!doc.overview.is_empty());
    assert!(!doc.rights.is_empty());
}

/// Free-text charges fall through to the keyword classifier, so a charge
/// that is not in the knowledge base still yields on-topic evidence.
#[test]
fn free_text_charge_gets_category_evidence() {
    let doc = compose(&case("CA", &["drunk driving"], "pretrial", "released", true));
    assert!(doc
        .evidence_to_gather
        .iter()
        .any(|item| item == "Breath or blood test records and calibration logs"));
}

#[test]
fn unclassifiable_charge_gets_generic_evidence() {
    let doc = compose(&case(
        "CA",
        &["public nuisance"],
        "pretrial",
        "released",
        true,
    ));
    assert!(doc
        .evidence_to_gather
        .iter()
        .any(|item| item == "A written timeline of events"));
}

#[test]
fn matched_charge_suppresses_category_fallback_evidence() {
    // The DUI record is curated; the DUI category row must not leak in.
    let doc = compose(&case("CA", &["ca-dui"], "pretrial", "released", true));
    assert!(doc
        .evidence_to_gather
        .iter()
        .any(|item| item == "Breathalyzer calibration and maintenance records"));
    assert!(!doc
        .evidence_to_gather
        .iter()
        .any(|item| item == "Receipts from the evening of the stop"));
}

#[test]
fn unknown_jurisdiction_uses_federal_rules() {
    let doc = compose(&case("ZZ", &["ca-battery"], "arrest", "detained", false));
    assert!(doc.critical_alerts[0].contains("without unnecessary delay"));
    assert!(doc
        .resources
        .iter()
        .any(|r| r.contains("Speedy Trial Act")));
}

#[test]
fn unknown_stage_contributes_nothing_stage_specific() {
    let doc = compose(&case(
        "CA",
        &["ca-battery"],
        "secret-tribunal",
        "released",
        true,
    ));
    assert!(doc.court_preparation.is_empty());
    // Unknown stages still get the arraignment-style question bank.
    assert!(doc
        .mock_questions
        .iter()
        .any(|q| q.question == "How do you plead?"));
    assert_eq!(doc.timeline.len(), 5);
}

#[test]
fn appeal_stage_has_no_playbook_but_composes() {
    let doc = compose(&case("CA", &["ca-battery"], "appeal", "released", true));
    assert!(doc.overview.starts_with("Your case is on appeal."));
    assert!(doc.court_preparation.is_empty());
    assert!(!doc.rights.is_empty());
}

#[test]
fn empty_intake_still_yields_a_complete_document() {
    let doc = compose(&CaseData::default());
    assert!(!doc.overview.is_empty());
    assert_eq!(doc.rights.len(), 4);
    assert!(!doc.resources.is_empty());
    assert!(!doc.evidence_to_gather.is_empty());
    assert_eq!(doc.timeline.len(), 5);
    assert!(!doc.mock_questions.is_empty());
    assert!(doc.deadlines.iter().any(|d| d.title == "Discovery deadline"));
}

#[test]
fn garbage_custody_is_treated_as_unknown() {
    let doc = compose(&case("CA", &["ca-battery"], "arrest", "floating", false));
    // Not detained, so no custody alert and no jail-call warning.
    assert!(!doc.critical_alerts[0].starts_with("Arraignment deadline:"));
    assert!(!doc.warnings.iter().any(|w| w.contains("Jail calls")));
}

#[test]
fn mixed_known_and_unknown_charges_keep_known_contributions() {
    let doc = compose(&case(
        "CA",
        &["no-such-charge", "ca-battery"],
        "pretrial",
        "released",
        true,
    ));
    assert!(doc
        .critical_alerts
        .iter()
        .any(|a| a.starts_with("[242]")));
}
