//! Charge reference types.

use serde::{Deserialize, Serialize};

// ── Validation constants ────────────────────────────────────────────

/// Valid charge category values.
pub const CHARGE_CATEGORIES: &[&str] = &["infraction", "misdemeanor", "felony"];

/// Check whether a category string is a recognized charge category.
pub fn is_valid_charge_category(s: &str) -> bool {
    CHARGE_CATEGORIES.contains(&s)
}

// ── Charge record ───────────────────────────────────────────────────

/// One criminal charge as curated in the knowledge base.
///
/// Identified by `(jurisdiction, id)`; ids are human-readable slugs like
/// `"ca-dui"`. All list fields are ordered: position encodes priority and the
/// composer preserves first-occurrence order when merging across charges.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ChargeRecord {
    pub id: String,
    /// Two-letter state code or "US" for federal charges.
    pub jurisdiction: String,
    pub name: String,
    /// Statute code in the jurisdiction's native numbering ("23152", "18-2701").
    pub statute_code: String,
    /// "infraction", "misdemeanor", or "felony" (see `CHARGE_CATEGORIES`).
    /// Offenses chargeable either way are curated at their felony exposure
    /// so the composer's felony safeguards apply.
    pub category: String,
    pub description: String,
    pub max_penalty: String,
    pub common_defenses: Vec<String>,
    pub evidence_to_gather: Vec<String>,
    pub specific_rights: Vec<String>,
    pub urgent_actions: Vec<String>,
}

// ── Offense category ────────────────────────────────────────────────

/// Coarse offense buckets used by the keyword classifier when free-text
/// charge descriptions cannot be matched to a knowledge-base record.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum OffenseCategory {
    Dui,
    Assault,
    Drug,
    Theft,
    Domestic,
    Fraud,
    Burglary,
    Traffic,
    Weapons,
    Default,
}

impl OffenseCategory {
    /// Wire/storage form of the category.
    pub fn as_str(&self) -> &'static str {
        match self {
            OffenseCategory::Dui => "dui",
            OffenseCategory::Assault => "assault",
            OffenseCategory::Drug => "drug",
            OffenseCategory::Theft => "theft",
            OffenseCategory::Domestic => "domestic",
            OffenseCategory::Fraud => "fraud",
            OffenseCategory::Burglary => "burglary",
            OffenseCategory::Traffic => "traffic",
            OffenseCategory::Weapons => "weapons",
            OffenseCategory::Default => "default",
        }
    }
}
