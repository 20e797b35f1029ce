//! Statute citation and link building.
//!
//! Citations (legal-style strings such as "Cal. Penal Code § 242") and
//! reading links are produced by two independent registries: a citation
//! grammar table and a URL strategy table. Either can succeed or fail on
//! its own; a jurisdiction with prose rules but no stable web layout still
//! gets a citation.

pub mod citations;
pub mod normalize;
pub mod urls;

pub use citations::{citation_patterns, generate_citation};
pub use urls::{resolve_url, url_strategies};

use shared_types::{canonical_jurisdiction, StatuteReference};

/// Build the full reference for one statute code, carrying whatever the
/// registries could derive.
pub fn statute_reference(jurisdiction: &str, code: &str) -> StatuteReference {
    let canonical = canonical_jurisdiction(jurisdiction);
    StatuteReference {
        citation: generate_citation(&canonical, code),
        url: resolve_url(&canonical, code),
        jurisdiction: canonical,
        code: code.trim().to_string(),
    }
}
