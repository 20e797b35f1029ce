//! Guidance document types — the composed output handed to rendering layers.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ── Urgency / priority scales ───────────────────────────────────────

/// Urgency of an immediate action.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum Urgency {
    Urgent,
    High,
    Medium,
    Low,
}

impl Urgency {
    /// Numeric weight for comparisons; higher wins when merging duplicate
    /// actions from different sources.
    pub fn weight(&self) -> u32 {
        match self {
            Urgency::Urgent => 40,
            Urgency::High => 30,
            Urgency::Medium => 20,
            Urgency::Low => 10,
        }
    }
}

/// Priority of a deadline entry.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum DeadlinePriority {
    Critical,
    Important,
    Normal,
}

// ── Document sections ───────────────────────────────────────────────

/// One action with its urgency level.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ImmediateAction {
    pub action: String,
    pub urgency: Urgency,
}

/// One upcoming deadline.
///
/// `days_from_now` is an approximate day count relative to composition time;
/// `None` for deadlines with no fixed day count (e.g. discovery cutoffs
/// phrased relative to the trial date).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct DeadlineEntry {
    pub title: String,
    pub detail: String,
    pub priority: DeadlinePriority,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days_from_now: Option<i64>,
}

/// A deadline mapped onto a concrete calendar date.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct DatedDeadline {
    pub title: String,
    pub detail: String,
    pub priority: DeadlinePriority,
    pub due: NaiveDate,
}

/// One row of the case-progression timeline.
///
/// `stage` is display text, not a `CaseStage`: the timeline shows procedural
/// milestones (preliminary hearing, discovery) that are not intake stages.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct TimelineStage {
    pub stage: String,
    pub completed: bool,
}

/// One court-preparation practice question with a model answer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct MockQuestion {
    pub question: String,
    pub suggested_response: String,
}

// ── Composed document ───────────────────────────────────────────────

/// The full composed guidance document.
///
/// Every `Vec<String>` section is deduplicated by exact string equality and
/// keeps first-occurrence order; `immediate_actions` additionally keeps the
/// highest urgency seen for a repeated action text.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct GuidanceDocument {
    pub overview: String,
    pub critical_alerts: Vec<String>,
    pub immediate_actions: Vec<ImmediateAction>,
    pub next_steps: Vec<String>,
    pub deadlines: Vec<DeadlineEntry>,
    pub rights: Vec<String>,
    pub resources: Vec<String>,
    pub warnings: Vec<String>,
    pub evidence_to_gather: Vec<String>,
    pub court_preparation: Vec<String>,
    pub avoid_actions: Vec<String>,
    pub timeline: Vec<TimelineStage>,
    pub mock_questions: Vec<MockQuestion>,
}
