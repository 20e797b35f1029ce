//! Charge knowledge base — curated records for common criminal charges.
//!
//! Records are loaded once and indexed by id. Unknown ids are not errors:
//! `get_by_ids` skips them silently and the composer degrades to category
//! fallback guidance.

use std::collections::HashMap;

use shared_types::ChargeRecord;

/// Read-only charge table with an id index beside the record vec.
#[derive(Debug)]
pub struct ChargeKnowledgeBase {
    records: Vec<ChargeRecord>,
    by_id: HashMap<String, usize>,
}

impl ChargeKnowledgeBase {
    pub fn new(records: Vec<ChargeRecord>) -> Self {
        let by_id = records
            .iter()
            .enumerate()
            .map(|(idx, record)| (record.id.clone(), idx))
            .collect();
        Self { records, by_id }
    }

    /// Build the curated seed table.
    pub fn seed() -> Self {
        Self::new(seed_records())
    }

    pub fn get_by_id(&self, id: &str) -> Option<&ChargeRecord> {
        self.by_id.get(id).map(|idx| &self.records[*idx])
    }

    /// Resolve a batch of ids, silently skipping any that are unknown.
    pub fn get_by_ids(&self, ids: &[String]) -> Vec<&ChargeRecord> {
        ids.iter()
            .filter_map(|id| self.get_by_id(id))
            .collect()
    }

    pub fn records(&self) -> &[ChargeRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[allow(clippy::too_many_arguments)]
fn charge(
    id: &str,
    jurisdiction: &str,
    name: &str,
    statute_code: &str,
    category: &str,
    description: &str,
    max_penalty: &str,
    common_defenses: &[&str],
    evidence_to_gather: &[&str],
    specific_rights: &[&str],
    urgent_actions: &[&str],
) -> ChargeRecord {
    ChargeRecord {
        id: id.to_string(),
        jurisdiction: jurisdiction.to_string(),
        name: name.to_string(),
        statute_code: statute_code.to_string(),
        category: category.to_string(),
        description: description.to_string(),
        max_penalty: max_penalty.to_string(),
        common_defenses: strings(common_defenses),
        evidence_to_gather: strings(evidence_to_gather),
        specific_rights: strings(specific_rights),
        urgent_actions: strings(urgent_actions),
    }
}

/// Curated charge records. Statute codes are kept in each state's native
/// numbering so the citation and URL builders exercise real formats.
fn seed_records() -> Vec<ChargeRecord> {
    vec![
        charge(
            "ca-dui",
            "CA",
            "Driving Under the Influence",
            "23152 VC",
            "misdemeanor",
            "Operating a vehicle while impaired by alcohol or drugs, or with a \
             blood alcohol concentration of 0.08% or higher.",
            "Up to 6 months county jail, $1,000 fine, and 6-month license \
             suspension (first offense)",
            &[
                "Challenge the accuracy and calibration of the breath or blood test",
                "Dispute the legality of the traffic stop",
                "Rising blood alcohol between driving and testing",
                "Medical conditions that mimic impairment",
            ],
            &[
                "Breathalyzer calibration and maintenance records",
                "Dashcam footage",
                "Receipts and witness accounts of drinks consumed",
                "Medical records for conditions affecting test results",
            ],
            &[
                "Right to an independent blood test at your own expense",
                "Right to refuse field sobriety tests",
                "Right to a DMV hearing if requested within 10 days",
            ],
            &[
                "Request a DMV hearing within 10 days to contest license suspension",
                "Write down everything you remember about the stop while it is fresh",
            ],
        ),
        charge(
            "ca-battery",
            "CA",
            "Battery",
            "242",
            "misdemeanor",
            "Willful and unlawful use of force or violence upon another person; \
             no injury is required.",
            "Up to 6 months county jail and a $2,000 fine",
            &[
                "Self-defense or defense of another person",
                "The contact was accidental, not willful",
                "Consent to the contact",
            ],
            &[
                "Photographs of any injuries on both sides",
                "Surveillance or phone video of the incident",
                "Contact information for everyone who saw the altercation",
                "Medical records if you were injured",
            ],
            &[
                "Right to claim self-defense if you reasonably feared harm",
                "Right to a jury trial even for misdemeanor battery",
            ],
            &[
                "Photograph your own injuries before they fade",
                "List witnesses and their contact information today",
            ],
        ),
        charge(
            "ca-reckless-driving-criminal",
            "CA",
            "Reckless Driving",
            "23103 VC",
            "misdemeanor",
            "Driving with willful or wanton disregard for the safety of persons \
             or property.",
            "5 to 90 days county jail and up to a $1,000 fine",
            &[
                "Driving was negligent at most, not a willful disregard for safety",
                "Speed alone does not establish recklessness",
                "Emergency circumstances justified the manner of driving",
            ],
            &[
                "Dashcam footage",
                "Photos of road and weather conditions at the time",
                "Vehicle maintenance records showing mechanical failure",
                "Witness statements from passengers or bystanders",
            ],
            &[
                "Right to contest the officer's characterization of your driving",
                "Right to discovery of the officer's radar or pacing records",
            ],
            &[
                "Preserve dashcam or phone video before it is overwritten",
                "Photograph the roadway, signage, and skid marks if possible",
            ],
        ),
        charge(
            "ca-drug-possession",
            "CA",
            "Possession of a Controlled Substance",
            "11350 HS",
            "misdemeanor",
            "Unlawful possession of a controlled substance without a valid \
             prescription.",
            "Up to 1 year county jail; often eligible for drug diversion",
            &[
                "Unlawful search and seizure",
                "The substance belonged to someone else",
                "Valid prescription",
                "Momentary possession for disposal",
            ],
            &[
                "Prescription records",
                "Lab analysis of the seized substance",
                "Bodycam footage of the search",
                "Names of others with access to where it was found",
            ],
            &[
                "Right to challenge the search that produced the evidence",
                "Right to request drug diversion in eligible cases",
            ],
            &[
                "Do not discuss the substance with anyone but your attorney",
                "Gather any prescription documentation immediately",
            ],
        ),
        charge(
            "ca-domestic-violence",
            "CA",
            "Domestic Violence (Corporal Injury)",
            "273.5",
            "felony",
            "Willful infliction of corporal injury resulting in a traumatic \
             condition on a spouse, cohabitant, or co-parent.",
            "Up to 4 years state prison",
            &[
                "The injury was accidental",
                "Self-defense against the other party's aggression",
                "False accusation arising from a custody or separation dispute",
            ],
            &[
                "Text and call history with the other party",
                "Photos of your own injuries",
                "Witness contact information",
                "Medical records for both parties",
            ],
            &[
                "Right to contest a protective order at a noticed hearing",
                "Right to retrieve personal belongings with a civil standby",
            ],
            &[
                "Comply strictly with any protective order",
                "Arrange alternate housing if ordered to stay away",
            ],
        ),
        charge(
            "tx-dwi",
            "TX",
            "Driving While Intoxicated",
            "49.04",
            "misdemeanor",
            "Operating a motor vehicle in a public place while intoxicated.",
            "Up to 180 days county jail, $2,000 fine, and license suspension \
             up to 1 year (first offense)",
            &[
                "No probable cause for the stop",
                "Field sobriety tests administered improperly",
                "Breath test device not maintained to state standards",
            ],
            &[
                "Breath or blood test records and calibration logs",
                "Dashcam footage",
                "Receipts from the evening of the stop",
            ],
            &[
                "Right to refuse field sobriety tests",
                "Right to an administrative license revocation hearing within 15 days",
            ],
            &[
                "Request an ALR hearing within 15 days to protect your license",
                "Write down the timeline of the stop while it is fresh",
            ],
        ),
        charge(
            "tx-theft",
            "TX",
            "Theft",
            "31.03",
            "misdemeanor",
            "Unlawful appropriation of property with intent to deprive the owner.",
            "Up to 1 year county jail and $4,000 fine (Class A misdemeanor)",
            &[
                "You believed the property was yours",
                "No intent to deprive the owner",
                "Mistaken identification by store security",
            ],
            &[
                "Receipts or proof of purchase",
                "Store surveillance video",
                "Bank and card statements",
            ],
            &[
                "Right to have the value element proven beyond a reasonable doubt",
                "Right to challenge how loss-prevention detained you",
            ],
            &[
                "Ask the store to preserve surveillance video before it is deleted",
                "Collect receipts and proof of ownership",
            ],
        ),
        charge(
            "ny-assault-third",
            "NY",
            "Assault in the Third Degree",
            "120.00",
            "misdemeanor",
            "Intentionally or recklessly causing physical injury to another person.",
            "Up to 1 year jail or 3 years probation",
            &[
                "Self-defense (justification)",
                "Lack of intent to cause injury",
                "The alleged injury does not meet the physical injury threshold",
            ],
            &[
                "Photos of injuries on both sides",
                "Surveillance or phone video",
                "Medical records",
                "Contact information for witnesses",
            ],
            &[
                "Right to claim justification under Article 35",
                "Right to a jury trial for a class A misdemeanor",
            ],
            &[
                "Photograph any injuries you sustained",
                "List everyone who witnessed the altercation",
            ],
        ),
        charge(
            "ny-petit-larceny",
            "NY",
            "Petit Larceny",
            "155.25",
            "misdemeanor",
            "Stealing property valued at $1,000 or less.",
            "Up to 1 year jail",
            &[
                "Claim of right to the property",
                "No intent to steal (forgot to pay)",
                "Mistaken identification",
            ],
            &[
                "Receipts and proof of purchase",
                "Store surveillance video",
                "Witness statements from anyone with you",
            ],
            &[
                "Right to an adjournment in contemplation of dismissal in some cases",
            ],
            &[
                "Ask the store to preserve surveillance video before it is deleted",
            ],
        ),
        charge(
            "fl-battery",
            "FL",
            "Battery",
            "784.03",
            "misdemeanor",
            "Actually and intentionally touching or striking another person \
             against their will.",
            "Up to 1 year county jail and $1,000 fine",
            &[
                "Self-defense or stand-your-ground",
                "The contact was accidental",
                "Mutual combat",
            ],
            &[
                "Photos of injuries on both sides",
                "Surveillance or phone video of the incident",
                "Contact information for witnesses",
            ],
            &[
                "Right to a stand-your-ground immunity hearing",
                "Right to a jury trial",
            ],
            &[
                "Photograph your own injuries before they fade",
                "List witnesses and their contact information today",
            ],
        ),
        charge(
            "fl-grand-theft",
            "FL",
            "Grand Theft",
            "812.014",
            "felony",
            "Knowingly obtaining property valued at $750 or more with intent \
             to deprive the owner.",
            "Up to 5 years prison and $5,000 fine (third degree)",
            &[
                "The value falls below the felony threshold",
                "Good-faith belief the property was yours",
                "No intent to permanently deprive",
            ],
            &[
                "Appraisals or receipts establishing value",
                "Surveillance video",
                "Communications about the property",
            ],
            &[
                "Right to contest the state's valuation of the property",
                "Right to a jury trial",
            ],
            &[
                "Do not contact the alleged victim about returning property",
                "Gather documents showing ownership or permission",
            ],
        ),
        charge(
            "pa-simple-assault",
            "PA",
            "Simple Assault",
            "18-2701",
            "misdemeanor",
            "Attempting to cause, or intentionally, knowingly, or recklessly \
             causing bodily injury to another.",
            "Up to 2 years imprisonment (second-degree misdemeanor)",
            &[
                "Self-defense",
                "The injury was accidental, not reckless",
                "Mutual consent to a fight reduces the grading",
            ],
            &[
                "Photos of injuries on both sides",
                "Surveillance or phone video",
                "Medical records",
            ],
            &[
                "Right to claim self-defense without a duty to retreat in your home",
                "Right to a jury trial",
            ],
            &[
                "Photograph any injuries you sustained",
                "List everyone who witnessed the altercation",
            ],
        ),
        charge(
            "il-retail-theft",
            "IL",
            "Retail Theft",
            "720-5/16-25",
            "misdemeanor",
            "Taking merchandise from a retail establishment with intent to \
             deprive the merchant without paying full value.",
            "Up to 1 year jail for property under $300 (Class A misdemeanor)",
            &[
                "No intent to leave without paying",
                "Mistaken identification by loss prevention",
                "The pricing or value is overstated",
            ],
            &[
                "Receipts and proof of payment method",
                "Store surveillance video",
                "Witness statements from anyone with you",
            ],
            &[
                "Right to challenge an unlawful detention by store security",
            ],
            &[
                "Ask the store to preserve surveillance video before it is deleted",
            ],
        ),
        charge(
            "il-dui",
            "IL",
            "Driving Under the Influence",
            "625-5/11-501",
            "misdemeanor",
            "Driving or being in actual physical control of a vehicle while \
             under the influence of alcohol or drugs.",
            "Up to 1 year jail and $2,500 fine (first offense)",
            &[
                "No reasonable suspicion for the stop",
                "Improper administration of field sobriety tests",
                "You were not in actual physical control of the vehicle",
            ],
            &[
                "Breath or blood test records and calibration logs",
                "Dashcam footage",
                "Receipts from the evening of the stop",
            ],
            &[
                "Right to a statutory summary suspension hearing",
                "Right to an independent chemical test",
            ],
            &[
                "Request a summary suspension hearing promptly",
                "Write down the timeline of the stop while it is fresh",
            ],
        ),
        charge(
            "wa-theft-third",
            "WA",
            "Theft in the Third Degree",
            "9A.56.050",
            "misdemeanor",
            "Theft of property or services valued at $750 or less.",
            "Up to 364 days jail and $5,000 fine",
            &[
                "Good-faith claim of title to the property",
                "No intent to deprive",
                "Mistaken identification",
            ],
            &[
                "Receipts and proof of purchase",
                "Surveillance video",
                "Bank and card statements",
            ],
            &[
                "Right to a jury trial in district or municipal court",
            ],
            &[
                "Ask the store to preserve surveillance video before it is deleted",
            ],
        ),
        charge(
            "nj-simple-assault",
            "NJ",
            "Simple Assault",
            "2C:12-1",
            "misdemeanor",
            "Attempting to cause or purposely, knowingly, or recklessly causing \
             bodily injury to another.",
            "Up to 6 months county jail and $1,000 fine",
            &[
                "Self-defense",
                "The contact was accidental",
                "Mutual fight entered by consent reduces the grading",
            ],
            &[
                "Photos of injuries on both sides",
                "Surveillance or phone video",
                "Contact information for witnesses",
            ],
            &[
                "Right to a municipal court hearing with counsel",
            ],
            &[
                "Photograph any injuries you sustained",
                "List everyone who witnessed the altercation",
            ],
        ),
        charge(
            "us-wire-fraud",
            "US",
            "Wire Fraud",
            "18-1343",
            "felony",
            "Using interstate wire communications in furtherance of a scheme \
             to defraud.",
            "Up to 20 years federal prison",
            &[
                "No intent to defraud",
                "Good-faith belief in the truth of the statements",
                "No use of interstate wires in the alleged scheme",
            ],
            &[
                "Complete email and message threads, not excerpts",
                "Financial records showing legitimate business purpose",
                "Contracts and invoices for the transactions at issue",
            ],
            &[
                "Right to counsel during any federal interview",
                "Right to challenge venue and the interstate-nexus element",
            ],
            &[
                "Do not talk to federal agents without counsel present",
                "Preserve all electronic records; deletion can become its own charge",
            ],
        ),
    ]
}
