//! Courtnav guidance engines.
//!
//! Three pure components over a static knowledge base:
//! - `knowledge` — curated charge, jurisdiction, and stage tables
//! - `composer` — turns intake `CaseData` into a `GuidanceDocument`
//! - `statutes` — formal citations and reading-link URLs for statute codes

pub mod composer;
pub mod knowledge;
pub mod statutes;

pub use composer::{compose, compose_with};
pub use knowledge::{knowledge, KnowledgeBase};
pub use statutes::{generate_citation, resolve_url, statute_reference};
