//! Guidance composition engine.
//!
//! `compose` is a pure, total function from intake `CaseData` to a
//! `GuidanceDocument`. Every output field has its own builder over the
//! static knowledge tables:
//! 1. Resolve stage, custody, jurisdiction rules, charge records
//! 2. Classify raw charge strings into offense categories for fallback
//! 3. Build each field from its contributing tables, in contribution order
//! 4. Deduplicate every list by exact text, highest urgency winning
//!
//! Missing or unrecognized input never fails the document: unknown charge
//! ids are skipped, unknown jurisdictions use the federal rules, and an
//! unknown stage simply contributes nothing stage-specific.

use shared_types::{
    CaseData, CaseStage, ChargeRecord, CustodyStatus, DeadlineEntry, DeadlinePriority,
    GuidanceDocument, ImmediateAction, JurisdictionRules, MockQuestion, OffenseCategory,
    StageRules, TimelineStage, Urgency,
};

use crate::knowledge::{classify, knowledge, KnowledgeBase};

use super::dedup::{dedup_actions, dedup_strings};

/// Rights that apply at every stage of every criminal case.
const BASIC_RIGHTS: &[&str] = &[
    "You have the right to remain silent",
    "You have the right to an attorney, appointed free of charge if you cannot afford one",
    "You are presumed innocent until proven guilty",
    "You have the right to a speedy and public trial",
];

/// Case-hygiene prohibitions that apply regardless of stage or charge.
const INVARIANT_AVOID_ACTIONS: &[&str] = &[
    "Do not discuss your case with anyone except your attorney",
    "Do not post about your case or co-defendants on social media",
    "Do not miss any court date",
];

const GENERAL_WARNINGS: &[&str] = &[
    "Anything you say to police, cellmates, or on recorded calls can be used against you",
    "Missing a court date can lead to a warrant and new charges",
];

/// Action inserted first when the person is unrepresented at arrest.
const NO_ATTORNEY_ARREST_ACTION: &str =
    "Contact a public defender or criminal defense attorney immediately";

/// Compose a guidance document using the process-wide knowledge base.
pub fn compose(case: &CaseData) -> GuidanceDocument {
    compose_with(knowledge(), case)
}

/// Compose against an explicit knowledge base. Production goes through
/// `compose`; tests supply their own tables here.
pub fn compose_with(kb: &KnowledgeBase, case: &CaseData) -> GuidanceDocument {
    let stage = case.stage();
    let custody = case.custody();
    let jurisdiction_rules = kb.jurisdictions.get(&case.jurisdiction);
    let stage_rules = stage.and_then(|s| kb.stages.get(s));
    let matched = kb.charges.get_by_ids(&case.charges);
    let categories = charge_categories(&case.charges);

    GuidanceDocument {
        overview: build_overview(case, stage, custody, &matched),
        critical_alerts: build_critical_alerts(case, stage, custody, jurisdiction_rules, &matched),
        immediate_actions: build_immediate_actions(kb, case, stage, stage_rules, &matched, &categories),
        next_steps: build_next_steps(case, stage, jurisdiction_rules),
        deadlines: build_deadlines(stage, jurisdiction_rules),
        rights: build_rights(stage_rules, &matched),
        resources: build_resources(jurisdiction_rules),
        warnings: build_warnings(stage, custody, &matched),
        evidence_to_gather: build_evidence(kb, &matched, &categories),
        court_preparation: build_court_preparation(stage_rules),
        avoid_actions: build_avoid_actions(stage_rules, &matched),
        timeline: build_timeline(stage),
        mock_questions: build_mock_questions(case, stage, &matched),
    }
}

/// Classify each raw charge string into an offense category, first
/// occurrence of each category kept. Charge ids are slugs that classify
/// like free text ("ca-reckless-driving-criminal" contains "driving").
fn charge_categories(charges: &[String]) -> Vec<OffenseCategory> {
    let mut categories = Vec::new();
    for raw in charges {
        let category = classify(raw);
        if !categories.contains(&category) {
            categories.push(category);
        }
    }
    categories
}

// ---------------------------------------------------------------------------
// Overview
// ---------------------------------------------------------------------------

/// Three fixed clauses: situation by (stage, custody), action by
/// (has_attorney, stage), key issue from the first matched charge's first
/// defense. Attorney-acquisition advice is never omitted when the person
/// is unrepresented.
fn build_overview(
    case: &CaseData,
    stage: Option<CaseStage>,
    custody: CustodyStatus,
    matched: &[&ChargeRecord],
) -> String {
    let detained = custody == CustodyStatus::Detained;
    let situation = match (stage, detained) {
        (Some(CaseStage::Arrest), true) => "You are in custody following an arrest.",
        (Some(CaseStage::Arrest), false) => {
            "You have been arrested and released while the case is pending."
        }
        (Some(CaseStage::Arraignment), true) => {
            "You are being held in custody ahead of your arraignment."
        }
        (Some(CaseStage::Arraignment), false) => {
            "Your arraignment is coming up, where the charges will be read and you will enter a plea."
        }
        (Some(CaseStage::Pretrial), true) => {
            "You are in custody while your case moves through the pretrial phase."
        }
        (Some(CaseStage::Pretrial), false) => {
            "Your case is in the pretrial phase, where evidence is exchanged and motions are decided."
        }
        (Some(CaseStage::Trial), _) => "Your case is going to trial.",
        (Some(CaseStage::Sentencing), _) => "Your case has reached the sentencing phase.",
        (Some(CaseStage::Appeal), _) => "Your case is on appeal.",
        (None, true) => "You are in custody while your case is in progress.",
        (None, false) => "Your case is in progress.",
    };

    let action = if case.has_attorney {
        match stage {
            Some(CaseStage::Arrest) => {
                "Follow your attorney's instructions and refer all questions to them."
            }
            Some(CaseStage::Arraignment) => {
                "Work with your attorney on your plea and your bail presentation."
            }
            Some(CaseStage::Pretrial) => {
                "Work through discovery and motion strategy with your attorney."
            }
            Some(CaseStage::Trial) => "Coordinate trial preparation closely with your attorney.",
            Some(CaseStage::Sentencing) => {
                "Prepare your mitigation presentation with your attorney."
            }
            _ => "Stay in close contact with your attorney.",
        }
    } else {
        match stage {
            Some(CaseStage::Arrest) => {
                "Before answering any questions, get a lawyer: ask for a public defender right away."
            }
            _ => {
                "Your most important next step is getting a lawyer; apply for a public defender or contact a defense attorney before your next court date."
            }
        }
    };

    let key_issue = matched
        .first()
        .and_then(|charge| charge.common_defenses.first())
        .map(|defense| format!("A common defense focus for this charge: {}.", defense))
        .unwrap_or_else(|| {
            "Every case turns on its specific facts; review the details with counsel as soon as possible.".to_string()
        });

    format!("{} {} {}", situation, action, key_issue)
}

// ---------------------------------------------------------------------------
// Alerts and actions
// ---------------------------------------------------------------------------

/// General stage and attorney alerts first, then per-charge urgent actions
/// prefixed with their statute code, in charge list order.
fn build_critical_alerts(
    case: &CaseData,
    stage: Option<CaseStage>,
    custody: CustodyStatus,
    jurisdiction_rules: &JurisdictionRules,
    matched: &[&ChargeRecord],
) -> Vec<String> {
    let mut alerts = Vec::new();

    if stage == Some(CaseStage::Arrest) && custody == CustodyStatus::Detained {
        alerts.push(format!(
            "Arraignment deadline: {}",
            jurisdiction_rules.arraignment_deadline
        ));
    }

    if !case.has_attorney {
        alerts.push(
            "You are not yet represented. Ask the court for a public defender at your first appearance."
                .to_string(),
        );
    }

    for charge in matched {
        for action in &charge.urgent_actions {
            alerts.push(format!("[{}] {}", charge.statute_code, action));
        }
    }

    dedup_strings(alerts)
}

/// Contribution order fixes relative placement; dedup then keeps the first
/// occurrence and the highest urgency contributed for an equal text.
fn build_immediate_actions(
    kb: &KnowledgeBase,
    case: &CaseData,
    stage: Option<CaseStage>,
    stage_rules: Option<&StageRules>,
    matched: &[&ChargeRecord],
    categories: &[OffenseCategory],
) -> Vec<ImmediateAction> {
    let mut actions = Vec::new();

    if !case.has_attorney && stage == Some(CaseStage::Arrest) {
        actions.push(ImmediateAction {
            action: NO_ATTORNEY_ARREST_ACTION.to_string(),
            urgency: Urgency::Urgent,
        });
    }

    if let Some(rules) = stage_rules {
        for action in &rules.critical_actions {
            actions.push(ImmediateAction {
                action: action.clone(),
                urgency: Urgency::Urgent,
            });
        }
        for action in &rules.immediate_actions {
            actions.push(ImmediateAction {
                action: action.clone(),
                urgency: Urgency::High,
            });
        }
    }

    for charge in matched {
        for action in &charge.urgent_actions {
            actions.push(ImmediateAction {
                action: action.clone(),
                urgency: Urgency::Urgent,
            });
        }
    }

    for category in categories {
        for action in &kb.categories.get(*category).immediate_actions {
            actions.push(ImmediateAction {
                action: action.clone(),
                urgency: Urgency::Medium,
            });
        }
    }

    dedup_actions(actions)
}

fn build_next_steps(
    case: &CaseData,
    stage: Option<CaseStage>,
    jurisdiction_rules: &JurisdictionRules,
) -> Vec<String> {
    let mut steps = Vec::new();

    if !case.has_attorney {
        steps.push(format!(
            "Apply for a public defender. {}",
            jurisdiction_rules.public_defender_income
        ));
    }

    steps.push(
        "Review every document you receive from the court and keep copies together in one place"
            .to_string(),
    );

    let preparation = match stage {
        Some(CaseStage::Arrest) => {
            "Prepare for your arraignment, where you will hear the charges and enter a plea"
        }
        Some(CaseStage::Arraignment) => {
            "Prepare for the preliminary hearing and the first pretrial conferences"
        }
        Some(CaseStage::Pretrial) => {
            "Work with counsel toward suppression motions, negotiations, or a trial date"
        }
        Some(CaseStage::Trial) => "Plan for the verdict and, if needed, sentencing preparation",
        Some(CaseStage::Sentencing) => {
            "Discuss appeal deadlines and post-sentencing options with your attorney"
        }
        _ => "Confirm your next court date with the clerk's office",
    };
    steps.push(preparation.to_string());

    dedup_strings(steps)
}

/// Deadlines keyed to stage; priorities are fixed by construction, not
/// computed. The discovery deadline is always present and carries no day
/// count because its timing varies with the court's schedule.
fn build_deadlines(
    stage: Option<CaseStage>,
    jurisdiction_rules: &JurisdictionRules,
) -> Vec<DeadlineEntry> {
    let mut deadlines = Vec::new();

    if stage == Some(CaseStage::Arrest) {
        deadlines.push(DeadlineEntry {
            title: "Arraignment".to_string(),
            detail: jurisdiction_rules.arraignment_deadline.clone(),
            priority: DeadlinePriority::Critical,
            days_from_now: Some(2),
        });
    }

    if stage == Some(CaseStage::Arraignment) {
        deadlines.push(DeadlineEntry {
            title: "Preliminary hearing".to_string(),
            detail: jurisdiction_rules.preliminary_hearing.clone(),
            priority: DeadlinePriority::Important,
            days_from_now: Some(10),
        });
    }

    deadlines.push(DeadlineEntry {
        title: "Discovery deadline".to_string(),
        detail: jurisdiction_rules.discovery_deadline.clone(),
        priority: DeadlinePriority::Normal,
        days_from_now: None,
    });

    deadlines
}

// ---------------------------------------------------------------------------
// Rights, resources, warnings
// ---------------------------------------------------------------------------

/// Invariant constitutional rights, then the stage playbook's rights, then
/// each charge's specific rights suffixed with its statute code.
fn build_rights(stage_rules: Option<&StageRules>, matched: &[&ChargeRecord]) -> Vec<String> {
    let mut rights: Vec<String> = BASIC_RIGHTS.iter().map(|s| s.to_string()).collect();

    if let Some(rules) = stage_rules {
        rights.extend(rules.rights.iter().cloned());
    }

    for charge in matched {
        for right in &charge.specific_rights {
            rights.push(format!("{} ({})", right, charge.statute_code));
        }
    }

    dedup_strings(rights)
}

fn build_resources(jurisdiction_rules: &JurisdictionRules) -> Vec<String> {
    dedup_strings(vec![
        format!(
            "Public defender eligibility: {}",
            jurisdiction_rules.public_defender_income
        ),
        format!("Bail and release: {}", jurisdiction_rules.bail_system),
        format!("Speedy trial window: {}", jurisdiction_rules.speedy_trial),
        "Court self-help centers can explain procedure but cannot give legal advice".to_string(),
        "State bar lawyer referral services can arrange low-cost consultations".to_string(),
    ])
}

fn build_warnings(
    stage: Option<CaseStage>,
    custody: CustodyStatus,
    matched: &[&ChargeRecord],
) -> Vec<String> {
    let mut warnings: Vec<String> = GENERAL_WARNINGS.iter().map(|s| s.to_string()).collect();

    if custody == CustodyStatus::Detained {
        warnings.push(
            "Jail calls and visits, except with your attorney, are recorded and reviewed by prosecutors"
                .to_string(),
        );
    }

    if matches!(stage, Some(CaseStage::Arrest) | Some(CaseStage::Arraignment)) {
        warnings.push(
            "Decisions made in the first days of a case shape everything after; get advice before agreeing to anything"
                .to_string(),
        );
    }

    for charge in matched {
        if charge.category == "felony" {
            warnings.push(format!(
                "{} is charged as a felony; a conviction can affect employment, housing, and civil rights",
                charge.name
            ));
        }
        if charge.jurisdiction == "US" {
            warnings.push(format!(
                "{} is a federal charge; federal sentencing guidelines and mandatory minimums may apply",
                charge.name
            ));
        }
    }

    dedup_strings(warnings)
}

/// Union of matched charges' evidence lists. Category fallback fires only
/// when no charge resolved, so fallback text never shadows curated charge
/// guidance.
fn build_evidence(
    kb: &KnowledgeBase,
    matched: &[&ChargeRecord],
    categories: &[OffenseCategory],
) -> Vec<String> {
    let mut evidence = Vec::new();

    if matched.is_empty() {
        if categories.is_empty() {
            evidence.extend(kb.categories.default_row().evidence.iter().cloned());
        } else {
            for category in categories {
                evidence.extend(kb.categories.get(*category).evidence.iter().cloned());
            }
        }
    } else {
        for charge in matched {
            evidence.extend(charge.evidence_to_gather.iter().cloned());
        }
    }

    dedup_strings(evidence)
}

fn build_court_preparation(stage_rules: Option<&StageRules>) -> Vec<String> {
    let items = stage_rules
        .map(|rules| rules.court_preparation.clone())
        .unwrap_or_default();
    dedup_strings(items)
}

fn build_avoid_actions(
    stage_rules: Option<&StageRules>,
    matched: &[&ChargeRecord],
) -> Vec<String> {
    let mut avoid = Vec::new();

    if let Some(rules) = stage_rules {
        avoid.extend(rules.avoid_actions.iter().cloned());
    }

    avoid.extend(INVARIANT_AVOID_ACTIONS.iter().map(|s| s.to_string()));

    for charge in matched {
        if charge.category == "felony" {
            avoid.push("Do not contact the alleged victim in any way".to_string());
        }
        if charge.name.to_lowercase().contains("domestic") {
            avoid.push(
                "Follow every term of any restraining or protective order, even if the other person invites contact"
                    .to_string(),
            );
        }
    }

    dedup_strings(avoid)
}

// ---------------------------------------------------------------------------
// Timeline and mock questions
// ---------------------------------------------------------------------------

/// Fixed five milestones. Arrest is always completed; arraignment is marked
/// completed once the stage has advanced past arrest. Later milestones stay
/// `false` regardless of stage: only arrest and arraignment are reliably
/// known from intake data.
fn build_timeline(stage: Option<CaseStage>) -> Vec<TimelineStage> {
    let past_arrest = stage.map_or(false, |s| s.position() > CaseStage::Arrest.position());
    let row = |label: &str, completed: bool| TimelineStage {
        stage: label.to_string(),
        completed,
    };
    vec![
        row("Arrest", true),
        row("Arraignment", past_arrest),
        row("Preliminary Hearing", false),
        row("Discovery", false),
        row("Trial", false),
    ]
}

/// Per-stage question banks; unknown or unbanked stages use the arraignment
/// bank. The attorney question's model answer branches on representation.
/// One charge-specific question is appended when a charge matched, and the
/// output is capped at five entries.
fn build_mock_questions(
    case: &CaseData,
    stage: Option<CaseStage>,
    matched: &[&ChargeRecord],
) -> Vec<MockQuestion> {
    let attorney_answer = if case.has_attorney {
        "Yes, Your Honor. My attorney is here with me."
    } else {
        "Not yet, Your Honor. I would like to apply for a public defender."
    };
    let ask = |question: &str, answer: &str| MockQuestion {
        question: question.to_string(),
        suggested_response: answer.to_string(),
    };

    let mut questions = match stage {
        Some(CaseStage::Arrest) => vec![
            ask(
                "Do you understand why you were arrested?",
                "You may say: I am invoking my right to remain silent and I want a lawyer. Nothing more is required.",
            ),
            ask(
                "Do you want to make a statement?",
                "Decline politely until you have counsel: not without my attorney present.",
            ),
            ask("Do you have an attorney?", attorney_answer),
            ask(
                "Is there someone we should notify?",
                "Give a family member or friend's name, and keep case details out of any call.",
            ),
        ],
        Some(CaseStage::Pretrial) => vec![
            ask(
                "Are both sides ready to proceed?",
                "Your attorney answers this; confirm scheduling with them before each conference.",
            ),
            ask(
                "Have you reviewed the discovery with counsel?",
                "Review everything before the conference so you can answer truthfully that you have.",
            ),
            ask("Do you have an attorney?", attorney_answer),
            ask(
                "Are you willing to consider the plea offer?",
                "Never answer on the spot. Ask for time to discuss any offer fully with your attorney.",
            ),
        ],
        Some(CaseStage::Trial) => vec![
            ask(
                "Will the defendant testify?",
                "This is your decision, made with counsel's advice; it is confirmed on the record outside the jury's presence.",
            ),
            ask(
                "Do you understand your right not to testify?",
                "Confirm that you understand; the jury cannot hold your silence against you.",
            ),
            ask(
                "Have you discussed the possible verdicts with counsel?",
                "Ask your attorney to re-explain lesser included offenses if anything is unclear.",
            ),
            ask(
                "Is the defense ready to proceed?",
                "Your attorney answers; your job is to be present, rested, and attentive.",
            ),
        ],
        // Arraignment bank doubles as the fallback for unknown stages.
        _ => vec![
            ask(
                "How do you plead?",
                "Say not guilty unless your attorney has advised otherwise. You can change a not-guilty plea later; the reverse is much harder.",
            ),
            ask("Do you have an attorney?", attorney_answer),
            ask(
                "Do you understand the charges against you?",
                "If anything is unclear, say so and ask the judge to explain. Never guess.",
            ),
            ask(
                "Can you afford to post bail?",
                "Be honest about your finances, and mention your job, family ties, and community roots.",
            ),
        ],
    };

    if let Some(charge) = matched.first() {
        questions.push(MockQuestion {
            question: format!("What is your response to the {} charge?", charge.name),
            suggested_response: format!(
                "Let your attorney speak to the {} charge in court; discuss its elements with them beforehand, not on the record.",
                charge.name
            ),
        });
    }

    questions.truncate(5);
    questions
}
