//! Jurisdiction procedural-rule types.

use serde::{Deserialize, Serialize};

/// Reserved rule-table key holding the federal defaults. Lookups for
/// jurisdictions without their own entry fall back to this row.
pub const FEDERAL_RULES_KEY: &str = "federal";

/// Normalize a jurisdiction code for rule-table lookup.
///
/// Postal codes uppercase ("ca" -> "CA"); the federal aliases "us", "usa",
/// and "federal" all map to "US". Unrecognized input is trimmed and
/// uppercased as-is, which simply misses the table and triggers the
/// federal fallback downstream.
pub fn canonical_jurisdiction(raw: &str) -> String {
    let trimmed = raw.trim();
    match trimmed.to_ascii_lowercase().as_str() {
        "us" | "usa" | "federal" => "US".to_string(),
        _ => trimmed.to_ascii_uppercase(),
    }
}

/// Procedural rules for one jurisdiction, as plain display text.
///
/// These feed deadline alerts and the resources section verbatim. They are
/// deliberately prose rather than structured durations: state rules carry
/// qualifiers ("48 hours excluding weekends", "within 15 days if in custody")
/// that a single number cannot represent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct JurisdictionRules {
    /// Canonical code this row covers ("CA", "US"), or `FEDERAL_RULES_KEY`
    /// for the fallback row.
    pub jurisdiction: String,
    pub arraignment_deadline: String,
    pub preliminary_hearing: String,
    pub speedy_trial: String,
    pub public_defender_income: String,
    pub bail_system: String,
    pub discovery_deadline: String,
}
