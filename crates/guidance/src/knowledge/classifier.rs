//! Keyword classifier for free-text charge descriptions.
//!
//! Older case records carry free-text charges instead of validated ids. The
//! classifier maps such text onto a coarse offense category so the composer
//! can still contribute useful fallback guidance. Rules are an explicit
//! ordered list evaluated top to bottom; the first match wins, so precedence
//! is auditable ("domestic battery" must classify as domestic, not assault).

use shared_types::OffenseCategory;

/// Ordered classification rules. Order is load-bearing: more specific
/// categories come before categories whose keywords they contain.
pub const CLASSIFIER_RULES: &[(OffenseCategory, &[&str])] = &[
    (
        OffenseCategory::Dui,
        &[
            "dui",
            "dwi",
            "owi",
            "driving under the influence",
            "driving while intoxicated",
            "drunk driving",
        ],
    ),
    (
        OffenseCategory::Domestic,
        &["domestic", "spousal", "family violence", "protective order"],
    ),
    (
        OffenseCategory::Assault,
        &["assault", "battery", "fight", "menacing"],
    ),
    (
        OffenseCategory::Weapons,
        &["weapon", "firearm", "gun", "armed", "concealed carry"],
    ),
    (
        OffenseCategory::Drug,
        &[
            "drug",
            "controlled substance",
            "narcotic",
            "marijuana",
            "methamphetamine",
            "cocaine",
            "heroin",
            "paraphernalia",
        ],
    ),
    (
        OffenseCategory::Burglary,
        &["burglary", "breaking and entering", "unlawful entry", "trespass"],
    ),
    (
        OffenseCategory::Fraud,
        &["fraud", "forgery", "identity theft", "bad check", "counterfeit", "embezzle"],
    ),
    (
        OffenseCategory::Theft,
        &["theft", "larceny", "shoplifting", "stealing", "stolen", "robbery"],
    ),
    (
        OffenseCategory::Traffic,
        &["reckless driving", "driving", "hit and run", "speeding", "suspended license"],
    ),
];

/// Classify a free-text charge description. No match falls through to
/// `Default`.
pub fn classify(text: &str) -> OffenseCategory {
    let lowered = text.to_lowercase();
    for (category, keywords) in CLASSIFIER_RULES {
        if keywords.iter().any(|kw| lowered.contains(kw)) {
            return *category;
        }
    }
    OffenseCategory::Default
}

/// Fallback guidance attached to one offense category.
#[derive(Debug, Clone)]
pub struct CategoryGuidance {
    pub category: OffenseCategory,
    pub immediate_actions: Vec<String>,
    pub evidence: Vec<String>,
}

/// Read-only table of per-category fallback guidance. The `Default` row is
/// always present and `KnowledgeBase::verify` re-checks that.
#[derive(Debug)]
pub struct CategoryGuidanceTable {
    rows: Vec<CategoryGuidance>,
}

impl CategoryGuidanceTable {
    pub fn new(rows: Vec<CategoryGuidance>) -> Self {
        Self { rows }
    }

    pub fn seed() -> Self {
        Self::new(seed_rows())
    }

    pub fn get(&self, category: OffenseCategory) -> &CategoryGuidance {
        self.rows
            .iter()
            .find(|row| row.category == category)
            .unwrap_or_else(|| self.default_row())
    }

    pub fn default_row(&self) -> &CategoryGuidance {
        self.rows
            .iter()
            .find(|row| row.category == OffenseCategory::Default)
            .unwrap_or(&self.rows[0])
    }

    pub fn rows(&self) -> &[CategoryGuidance] {
        &self.rows
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn guidance(
    category: OffenseCategory,
    immediate_actions: &[&str],
    evidence: &[&str],
) -> CategoryGuidance {
    CategoryGuidance {
        category,
        immediate_actions: strings(immediate_actions),
        evidence: strings(evidence),
    }
}

fn seed_rows() -> Vec<CategoryGuidance> {
    vec![
        guidance(
            OffenseCategory::Dui,
            &[
                "Request an administrative license hearing before the deadline",
                "Write down everything you ate, drank, and took before the stop",
            ],
            &[
                "Breath or blood test records and calibration logs",
                "Dashcam footage",
                "Receipts from the evening of the stop",
            ],
        ),
        guidance(
            OffenseCategory::Assault,
            &[
                "Photograph any injuries you sustained",
                "List everyone who witnessed the altercation",
            ],
            &[
                "Photos of injuries on both sides",
                "Surveillance or phone video",
                "Medical records",
            ],
        ),
        guidance(
            OffenseCategory::Drug,
            &[
                "Write down exactly where and how the search happened",
                "Gather any prescription documentation immediately",
            ],
            &[
                "Prescription records",
                "Lab analysis of the seized substance",
                "Bodycam footage of the search",
            ],
        ),
        guidance(
            OffenseCategory::Theft,
            &[
                "Collect receipts and proof of ownership",
                "Ask the store to preserve surveillance video before it is deleted",
            ],
            &[
                "Receipts and bank statements",
                "Store surveillance video",
                "Communications about the property",
            ],
        ),
        guidance(
            OffenseCategory::Domestic,
            &[
                "Comply strictly with any protective order",
                "Arrange alternate housing if ordered to stay away",
            ],
            &[
                "Text and call history with the other party",
                "Photos of your own injuries",
                "Witness contact information",
            ],
        ),
        guidance(
            OffenseCategory::Fraud,
            &[
                "Preserve all financial and electronic records",
                "Do not contact the alleged victim or co-parties",
            ],
            &[
                "Complete transaction records",
                "Email and message threads in full",
                "Contracts and invoices",
            ],
        ),
        guidance(
            OffenseCategory::Burglary,
            &[
                "Establish where you were at the time of the offense",
                "List anyone who can confirm your whereabouts",
            ],
            &[
                "Alibi witnesses and records such as receipts or phone location",
                "Photos showing lack of forced entry",
                "Proof of permission to enter",
            ],
        ),
        guidance(
            OffenseCategory::Traffic,
            &[
                "Preserve dashcam or phone video before it is overwritten",
                "Photograph the road, signage, and conditions",
            ],
            &[
                "Dashcam footage",
                "Photos of the roadway and signage",
                "Vehicle maintenance records",
            ],
        ),
        guidance(
            OffenseCategory::Weapons,
            &[
                "Gather permits, registrations, and purchase records",
                "Write down exactly where the weapon was found and stored",
            ],
            &[
                "Permit and registration documents",
                "Proof of lawful purchase",
                "Photos of how the weapon was stored",
            ],
        ),
        guidance(
            OffenseCategory::Default,
            &[
                "Consult a criminal defense attorney about the specific charge",
                "Start a written timeline of events while memory is fresh",
            ],
            &[
                "A written timeline of events",
                "Names and contact information of all witnesses",
                "Any documents or messages related to the incident",
            ],
        ),
    ]
}
