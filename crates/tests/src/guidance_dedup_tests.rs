//! Deduplication behavior across a composed document.
//!
//! Dedup is by exact string equality. Near-duplicates with different
//! wording are deliberately kept, and equal immediate-action texts keep
//! their first position with the highest urgency any source contributed.

use guidance::compose;
use pretty_assertions::assert_eq;
use shared_types::Urgency;

use crate::common::{assert_no_duplicate_actions, assert_no_duplicates, case, detained_arrest_case};

#[test]
fn no_list_field_contains_duplicates() {
    let doc = compose(&detained_arrest_case());
    assert_no_duplicates(&doc.critical_alerts, "critical_alerts");
    assert_no_duplicates(&doc.next_steps, "next_steps");
    assert_no_duplicates(&doc.rights, "rights");
    assert_no_duplicates(&doc.resources, "resources");
    assert_no_duplicates(&doc.warnings, "warnings");
    assert_no_duplicates(&doc.evidence_to_gather, "evidence_to_gather");
    assert_no_duplicates(&doc.court_preparation, "court_preparation");
    assert_no_duplicates(&doc.avoid_actions, "avoid_actions");
    assert_no_duplicate_actions(&doc.immediate_actions);
}

#[test]
fn dedup_holds_across_overlapping_charges() {
    // Both charges list "Dashcam footage" in identical words.
    let doc = compose(&case(
        "CA",
        &["ca-dui", "ca-reckless-driving-criminal"],
        "pretrial",
        "released",
        false,
    ));
    assert_no_duplicates(&doc.evidence_to_gather, "evidence_to_gather");
    assert_no_duplicate_actions(&doc.immediate_actions);
    let dashcam = doc
        .evidence_to_gather
        .iter()
        .filter(|item| item.as_str() == "Dashcam footage")
        .count();
    assert_eq!(dashcam, 1);
}

/// The reckless driving charge contributes "Preserve dashcam or phone
/// video before it is overwritten" as an urgent action, and the traffic
/// category fallback contributes the same sentence at medium urgency. One
/// entry survives, at the higher urgency.
#[test]
fn equal_action_text_keeps_highest_urgency() {
    let doc = compose(&detained_arrest_case());
    let preserved: Vec<_> = doc
        .immediate_actions
        .iter()
        .filter(|a| a.action.starts_with("Preserve dashcam"))
        .collect();
    assert_eq!(preserved.len(), 1);
    assert_eq!(preserved[0].urgency, Urgency::Urgent);
}

#[test]
fn dashcam_evidence_appears_once() {
    let doc = compose(&detained_arrest_case());
    let count = doc
        .evidence_to_gather
        .iter()
        .filter(|item| item.as_str() == "Dashcam footage")
        .count();
    assert_eq!(count, 1);
}

/// Differently worded variants of the same advice are not collapsed:
/// the stage playbook's social media warning names the arrest, the
/// invariant one names the case.
#[test]
fn near_duplicates_with_different_wording_survive() {
    let doc = compose(&detained_arrest_case());
    assert!(doc
        .avoid_actions
        .iter()
        .any(|a| a == "Do not post about your arrest on social media"));
    assert!(doc
        .avoid_actions
        .iter()
        .any(|a| a == "Do not post about your case or co-defendants on social media"));
}

#[test]
fn repeated_charge_ids_merge_into_one_contribution() {
    let once = compose(&case("CA", &["ca-battery"], "pretrial", "released", true));
    let twice = compose(&case(
        "CA",
        &["ca-battery", "ca-battery"],
        "pretrial",
        "released",
        true,
    ));
    assert_eq!(once.evidence_to_gather, twice.evidence_to_gather);
    assert_eq!(once.critical_alerts, twice.critical_alerts);
}
