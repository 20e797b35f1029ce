//! Knowledge base lookups through the public API.

use guidance::knowledge::{classify, knowledge};
use shared_types::{CaseStage, OffenseCategory, FEDERAL_RULES_KEY};

#[test]
fn seeded_knowledge_base_verifies() {
    assert!(knowledge().verify().is_ok());
}

#[test]
fn charge_lookups_resolve_known_ids_and_skip_unknown() {
    let kb = knowledge();
    assert_eq!(kb.charges.get_by_id("pa-simple-assault").unwrap().statute_code, "18-2701");
    assert!(kb.charges.get_by_id("zz-nothing").is_none());

    let ids = vec![
        "ca-dui".to_string(),
        "zz-nothing".to_string(),
        "us-wire-fraud".to_string(),
    ];
    let found = kb.charges.get_by_ids(&ids);
    assert_eq!(found.len(), 2);
    assert_eq!(found[0].id, "ca-dui");
    assert_eq!(found[1].id, "us-wire-fraud");
}

#[test]
fn seed_charges_stay_within_the_category_vocabulary() {
    let kb = knowledge();
    for record in kb.charges.records() {
        assert!(
            ["infraction", "misdemeanor", "felony"].contains(&record.category.as_str()),
            "charge {} has category {:?}",
            record.id,
            record.category
        );
    }
}

#[test]
fn every_seeded_charge_has_a_resolvable_citation() {
    let kb = knowledge();
    for record in kb.charges.records() {
        assert!(
            guidance::generate_citation(&record.jurisdiction, &record.statute_code).is_some(),
            "charge {} has uncitable code {:?}",
            record.id,
            record.statute_code
        );
    }
}

#[test]
fn every_seeded_charge_has_a_reading_link() {
    let kb = knowledge();
    for record in kb.charges.records() {
        assert!(
            guidance::resolve_url(&record.jurisdiction, &record.statute_code).is_some(),
            "charge {} has unresolvable code {:?}",
            record.id,
            record.statute_code
        );
    }
}

#[test]
fn jurisdiction_rules_fall_back_to_federal() {
    let kb = knowledge();
    assert_eq!(kb.jurisdictions.get("CA").jurisdiction, "CA");
    assert_eq!(kb.jurisdictions.get("wy").jurisdiction, FEDERAL_RULES_KEY);
    assert_eq!(kb.jurisdictions.get("US").jurisdiction, FEDERAL_RULES_KEY);
    assert_eq!(kb.jurisdictions.get("").jurisdiction, FEDERAL_RULES_KEY);
}

#[test]
fn stage_playbooks_exist_except_appeal() {
    let kb = knowledge();
    for stage in [
        CaseStage::Arrest,
        CaseStage::Arraignment,
        CaseStage::Pretrial,
        CaseStage::Trial,
        CaseStage::Sentencing,
    ] {
        assert!(kb.stages.get(stage).is_some(), "missing playbook for {stage:?}");
    }
    assert!(kb.stages.get(CaseStage::Appeal).is_none());
}

#[test]
fn classifier_orders_specific_before_general() {
    assert_eq!(classify("domestic battery"), OffenseCategory::Domestic);
    assert_eq!(classify("aggravated battery"), OffenseCategory::Assault);
    assert_eq!(classify("identity theft"), OffenseCategory::Fraud);
    assert_eq!(classify("petit larceny"), OffenseCategory::Theft);
    assert_eq!(classify("driving while intoxicated"), OffenseCategory::Dui);
    assert_eq!(classify("reckless driving"), OffenseCategory::Traffic);
    assert_eq!(classify("completely novel offense"), OffenseCategory::Default);
}

#[test]
fn category_rows_cover_every_classifier_outcome() {
    let kb = knowledge();
    for (category, _) in guidance::knowledge::CLASSIFIER_RULES {
        let row = kb.categories.get(*category);
        assert!(!row.immediate_actions.is_empty());
        assert!(!row.evidence.is_empty());
    }
    let default_row = kb.categories.default_row();
    assert_eq!(default_row.category, OffenseCategory::Default);
}
