//! Case intake types.
//!
//! `CaseData` is the single input to guidance composition. It is built from
//! whatever the intake layer collected, so every field tolerates missing or
//! unrecognized values; the composer falls back rather than failing.

use serde::{Deserialize, Serialize};

#[cfg(feature = "validation")]
use validator::Validate;

// ── Validation constants ────────────────────────────────────────────

/// Valid case stage values, in procedural order.
pub const CASE_STAGES: &[&str] = &[
    "arrest", "arraignment", "pretrial", "trial", "sentencing", "appeal",
];

/// Valid custody status values.
pub const CUSTODY_STATUSES: &[&str] = &["detained", "released", "out_on_bail", "unknown"];

/// Check whether a stage string is a recognized case stage.
pub fn is_valid_case_stage(s: &str) -> bool {
    CASE_STAGES.contains(&s)
}

/// Check whether a custody status string is recognized.
pub fn is_valid_custody_status(s: &str) -> bool {
    CUSTODY_STATUSES.contains(&s)
}

// ── Case stage ──────────────────────────────────────────────────────

/// Procedural stage of a criminal case, from arrest through appeal.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum CaseStage {
    Arrest,
    Arraignment,
    Pretrial,
    Trial,
    Sentencing,
    Appeal,
}

/// Canonical stage progression used when building timelines.
pub const CASE_STAGE_SEQUENCE: &[CaseStage] = &[
    CaseStage::Arrest,
    CaseStage::Arraignment,
    CaseStage::Pretrial,
    CaseStage::Trial,
    CaseStage::Sentencing,
    CaseStage::Appeal,
];

impl CaseStage {
    /// Parse from the stored text value ("arrest", "pretrial", ...).
    pub fn from_str_opt(s: &str) -> Option<Self> {
        serde_json::from_value(serde_json::Value::String(s.to_string())).ok()
    }

    /// Wire/storage form of the stage.
    pub fn as_str(&self) -> &'static str {
        match self {
            CaseStage::Arrest => "arrest",
            CaseStage::Arraignment => "arraignment",
            CaseStage::Pretrial => "pretrial",
            CaseStage::Trial => "trial",
            CaseStage::Sentencing => "sentencing",
            CaseStage::Appeal => "appeal",
        }
    }

    /// Human-readable label for document prose.
    pub fn label(&self) -> &'static str {
        match self {
            CaseStage::Arrest => "Arrest",
            CaseStage::Arraignment => "Arraignment",
            CaseStage::Pretrial => "Pretrial",
            CaseStage::Trial => "Trial",
            CaseStage::Sentencing => "Sentencing",
            CaseStage::Appeal => "Appeal",
        }
    }

    /// Zero-based position in the canonical progression.
    pub fn position(&self) -> usize {
        match self {
            CaseStage::Arrest => 0,
            CaseStage::Arraignment => 1,
            CaseStage::Pretrial => 2,
            CaseStage::Trial => 3,
            CaseStage::Sentencing => 4,
            CaseStage::Appeal => 5,
        }
    }
}

// ── Custody status ──────────────────────────────────────────────────

/// Where the person is while the case is pending.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum CustodyStatus {
    Detained,
    Released,
    OutOnBail,
    Unknown,
}

impl CustodyStatus {
    /// Parse from the stored text value, `None` for unrecognized input.
    pub fn from_str_opt(s: &str) -> Option<Self> {
        serde_json::from_value(serde_json::Value::String(s.to_string())).ok()
    }

    /// Parse with `Unknown` as the fallback for unrecognized input.
    pub fn from_str_or_unknown(s: &str) -> Self {
        Self::from_str_opt(s).unwrap_or(CustodyStatus::Unknown)
    }
}

// ── Case intake record ──────────────────────────────────────────────

/// Everything the intake flow knows about a case.
///
/// `charges` holds knowledge-base charge ids when the intake flow matched the
/// charge, or free-text descriptions when it did not; the composer resolves
/// both. Intake forms sometimes submit a lone charge as a bare string, so
/// deserialization accepts either a string or an array.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[cfg_attr(feature = "validation", derive(Validate))]
pub struct CaseData {
    /// Jurisdiction code: two-letter state ("CA"), "US", or "federal".
    #[serde(default)]
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Jurisdiction is required"))
    )]
    pub jurisdiction: String,
    /// Charge ids or free-text charge descriptions.
    #[serde(default, deserialize_with = "string_or_vec")]
    pub charges: Vec<String>,
    /// Current procedural stage, stored as text (see `CASE_STAGES`).
    #[serde(default)]
    pub case_stage: String,
    /// Custody status, stored as text (see `CUSTODY_STATUSES`).
    #[serde(default)]
    pub custody_status: String,
    /// Whether the person already has defense counsel.
    #[serde(default)]
    pub has_attorney: bool,
}

impl CaseData {
    /// Parsed stage, if the stored text is a recognized stage.
    pub fn stage(&self) -> Option<CaseStage> {
        CaseStage::from_str_opt(&self.case_stage)
    }

    /// Parsed custody status, `Unknown` for unrecognized text.
    pub fn custody(&self) -> CustodyStatus {
        CustodyStatus::from_str_or_unknown(&self.custody_status)
    }
}

/// Accept `"x"` or `["x", "y"]` for list-valued intake fields.
fn string_or_vec<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrVec {
        One(String),
        Many(Vec<String>),
    }

    Ok(match StringOrVec::deserialize(deserializer)? {
        StringOrVec::One(s) => vec![s],
        StringOrVec::Many(v) => v,
    })
}
