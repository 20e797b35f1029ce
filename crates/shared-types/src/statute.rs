//! Statute reference type shared with document-linking consumers.

use serde::{Deserialize, Serialize};

/// A statute lookup result: formal citation text and an official (or
/// aggregator) URL, either of which may be unavailable for the jurisdiction.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct StatuteReference {
    pub jurisdiction: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub citation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}
