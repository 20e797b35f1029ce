//! Stage playbook types.

use serde::{Deserialize, Serialize};

use crate::case::CaseStage;

/// Stage-specific guidance playbook.
///
/// One row per `CaseStage`; every list is ordered by priority. An unknown
/// stage has no row, and the composer then contributes nothing stage-specific
/// rather than erroring.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct StageRules {
    pub stage: CaseStage,
    /// Alert-level items surfaced under critical alerts.
    pub critical_actions: Vec<String>,
    /// Actions for the next 24-72 hours.
    pub immediate_actions: Vec<String>,
    pub rights: Vec<String>,
    pub avoid_actions: Vec<String>,
    pub court_preparation: Vec<String>,
}
