//! Static knowledge tables behind a process-wide singleton.
//!
//! Loaded once on first use and never mutated. Tests build their own
//! `KnowledgeBase` values directly; production code goes through
//! `knowledge()`.

pub mod charges;
pub mod classifier;
pub mod jurisdictions;
pub mod stages;

use std::collections::HashSet;
use std::sync::LazyLock;

use shared_types::{is_valid_charge_category, AppError, FEDERAL_RULES_KEY};

pub use charges::ChargeKnowledgeBase;
pub use classifier::{classify, CategoryGuidance, CategoryGuidanceTable, CLASSIFIER_RULES};
pub use jurisdictions::JurisdictionRuleTable;
pub use stages::StageRuleTable;

/// All reference tables the engines read from.
#[derive(Debug)]
pub struct KnowledgeBase {
    pub charges: ChargeKnowledgeBase,
    pub jurisdictions: JurisdictionRuleTable,
    pub stages: StageRuleTable,
    pub categories: CategoryGuidanceTable,
}

impl KnowledgeBase {
    /// Build the curated seed tables.
    pub fn seed() -> Self {
        Self {
            charges: ChargeKnowledgeBase::seed(),
            jurisdictions: JurisdictionRuleTable::seed(),
            stages: StageRuleTable::seed(),
            categories: CategoryGuidanceTable::seed(),
        }
    }

    /// Integrity check for the loaded tables. Run at startup by embedding
    /// processes; the engines themselves assume these hold.
    pub fn verify(&self) -> Result<(), AppError> {
        let mut seen = HashSet::new();
        for record in self.charges.records() {
            if !seen.insert(record.id.as_str()) {
                return Err(AppError::internal(format!(
                    "duplicate charge id: {}",
                    record.id
                )));
            }
            if !is_valid_charge_category(&record.category) {
                return Err(AppError::internal(format!(
                    "charge {} has unknown category: {}",
                    record.id, record.category
                )));
            }
            if record.evidence_to_gather.is_empty() {
                return Err(AppError::internal(format!(
                    "charge {} has no evidence list",
                    record.id
                )));
            }
        }

        if self.jurisdictions.get_exact(FEDERAL_RULES_KEY).is_none() {
            return Err(AppError::internal("federal fallback rules are missing"));
        }

        for row in self.stages.rows() {
            if row.immediate_actions.is_empty() || row.rights.is_empty() {
                return Err(AppError::internal(format!(
                    "stage {} has an empty playbook",
                    row.stage.as_str()
                )));
            }
        }

        if self
            .categories
            .rows()
            .iter()
            .all(|row| row.category != shared_types::OffenseCategory::Default)
        {
            return Err(AppError::internal("default category guidance is missing"));
        }

        Ok(())
    }
}

static KNOWLEDGE: LazyLock<KnowledgeBase> = LazyLock::new(KnowledgeBase::seed);

/// The process-wide knowledge base.
pub fn knowledge() -> &'static KnowledgeBase {
    &KNOWLEDGE
}
