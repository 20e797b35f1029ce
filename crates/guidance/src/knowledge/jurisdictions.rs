//! Jurisdiction rule table — per-state procedural rules with a federal fallback.

use std::collections::HashMap;

use shared_types::{canonical_jurisdiction, JurisdictionRules, FEDERAL_RULES_KEY};

/// Read-only jurisdiction table. Every lookup resolves: jurisdictions
/// without their own row fall back to the federal row, which `seed` always
/// provides and `KnowledgeBase::verify` re-checks.
#[derive(Debug)]
pub struct JurisdictionRuleTable {
    rows: Vec<JurisdictionRules>,
    by_code: HashMap<String, usize>,
}

impl JurisdictionRuleTable {
    pub fn new(rows: Vec<JurisdictionRules>) -> Self {
        let by_code = rows
            .iter()
            .enumerate()
            .map(|(idx, row)| (row.jurisdiction.clone(), idx))
            .collect();
        Self { rows, by_code }
    }

    pub fn seed() -> Self {
        Self::new(seed_rows())
    }

    /// Rules for a jurisdiction, falling back to the federal row for any
    /// code without its own entry.
    pub fn get(&self, jurisdiction: &str) -> &JurisdictionRules {
        let canonical = canonical_jurisdiction(jurisdiction);
        let key = if canonical == "US" {
            FEDERAL_RULES_KEY
        } else {
            canonical.as_str()
        };
        self.by_code
            .get(key)
            .or_else(|| self.by_code.get(FEDERAL_RULES_KEY))
            .map(|idx| &self.rows[*idx])
            .unwrap_or(&self.rows[0])
    }

    /// Row lookup without the federal fallback, for integrity checks.
    pub fn get_exact(&self, code: &str) -> Option<&JurisdictionRules> {
        self.by_code.get(code).map(|idx| &self.rows[*idx])
    }

    pub fn rows(&self) -> &[JurisdictionRules] {
        &self.rows
    }
}

fn rules(
    jurisdiction: &str,
    arraignment_deadline: &str,
    preliminary_hearing: &str,
    speedy_trial: &str,
    public_defender_income: &str,
    bail_system: &str,
    discovery_deadline: &str,
) -> JurisdictionRules {
    JurisdictionRules {
        jurisdiction: jurisdiction.to_string(),
        arraignment_deadline: arraignment_deadline.to_string(),
        preliminary_hearing: preliminary_hearing.to_string(),
        speedy_trial: speedy_trial.to_string(),
        public_defender_income: public_defender_income.to_string(),
        bail_system: bail_system.to_string(),
        discovery_deadline: discovery_deadline.to_string(),
    }
}

/// Seed rows. The federal row is first and doubles as the fallback for any
/// jurisdiction not listed.
fn seed_rows() -> Vec<JurisdictionRules> {
    vec![
        rules(
            FEDERAL_RULES_KEY,
            "Initial appearance without unnecessary delay, typically within 48 hours of arrest",
            "Within 14 days of initial appearance if detained, 21 days if released",
            "Trial within 70 days of indictment under the Speedy Trial Act",
            "Court-appointed counsel available after a financial affidavit (CJA Form 23)",
            "Release or detention under the Bail Reform Act; detention hearing within 3 days",
            "Rule 16 disclosures begin after arraignment on the court's scheduling order",
        ),
        rules(
            "CA",
            "Within 48 hours of arrest, excluding weekends and court holidays",
            "Within 10 court days of arraignment if held in custody",
            "Misdemeanor trial within 30-45 days; felony trial within 60 days of arraignment",
            "Public defender appointed on a financial declaration; no fixed income cutoff",
            "County bail schedule; ability-to-pay review required before cash bail is set",
            "Informal discovery begins at arraignment; statutory disclosures due 30 days before trial",
        ),
        rules(
            "TX",
            "Magistrate appearance within 48 hours of arrest",
            "Examining trial available for felonies before indictment",
            "No fixed statutory deadline; governed by constitutional speedy-trial balancing",
            "Appointed counsel within 3 working days of request in most counties",
            "Cash bail or personal bond set at magistration",
            "Michael Morton Act discovery due promptly after a timely request",
        ),
        rules(
            "NY",
            "Within 24 hours of arrest in most jurisdictions",
            "Felony hearing within 120 to 144 hours when held in custody",
            "Ready for trial within 90 days for class A misdemeanors, 6 months for felonies",
            "Assigned counsel based on income and household size guidelines",
            "Most misdemeanors and non-violent felonies released without cash bail",
            "Automatic discovery within 20-35 days of arraignment",
        ),
        rules(
            "FL",
            "First appearance within 24 hours of arrest",
            "Adversary preliminary hearing within 21 days if no indictment or information",
            "Trial within 90 days of arrest for misdemeanors, 175 days for felonies",
            "Public defender appointed when income falls below 200% of the poverty guideline",
            "Bail set at first appearance; non-monetary release favored for minor offenses",
            "Discovery exhibit due within 15 days of the defense's notice of participation",
        ),
        rules(
            "PA",
            "Preliminary arraignment without unnecessary delay after arrest",
            "Preliminary hearing within 14 days if in custody, 21 days if released",
            "Trial within 365 days of the complaint under Rule 600 (180 days if detained)",
            "Public defender appointed at or before the preliminary hearing on financial need",
            "Monetary bail set by a magisterial district judge at preliminary arraignment",
            "Mandatory disclosure due before the formal arraignment",
        ),
        rules(
            "IL",
            "Initial appearance within 48 hours of arrest",
            "Preliminary hearing within 14 days for detained felony defendants",
            "Trial within 120 days in custody, 160 days out of custody after demand",
            "Public defender appointed on a signed assets-and-liabilities affidavit",
            "Cash bail abolished; pretrial release conditions set at the initial hearing",
            "Discovery schedule set at the first pretrial conference",
        ),
        rules(
            "WA",
            "Preliminary appearance by the next judicial day after arrest",
            "Case-setting hearing within 14 days of arraignment",
            "Trial within 60 days of arraignment if detained, 90 days if released",
            "Appointed counsel screened against 125% of the federal poverty level",
            "Release on personal recognizance presumed for most non-violent offenses",
            "Omnibus discovery deadlines set at the case-setting hearing",
        ),
        rules(
            "NJ",
            "First appearance within 48 hours of commitment to jail",
            "Pre-indictment disposition conference within 45 days of arrest",
            "Trial within 180 days of indictment for detained defendants",
            "Public defender application through the court with a $150 application fee",
            "Risk-based release under the Criminal Justice Reform Act; cash bail rare",
            "Prosecutor's discovery due with the indictment or within 60 days",
        ),
        rules(
            "MI",
            "Arraignment without unnecessary delay, generally within 48 hours",
            "Probable cause conference within 7 to 14 days of arraignment",
            "Trial within 180 days for defendants held in jail",
            "Court-appointed counsel screened at arraignment on an ability-to-pay basis",
            "Interim bail or personal recognizance set at arraignment",
            "Discovery due within 21 days of a request under MCR 6.201",
        ),
        rules(
            "GA",
            "First appearance within 72 hours of a warrant arrest, 48 hours without",
            "Commitment hearing on request, typically within days of arrest",
            "Trial by the second regular term after a statutory speedy-trial demand",
            "Public defender appointed when income falls below 150% of the poverty guideline",
            "Bail set at first appearance; some offenses require a superior court judge",
            "Reciprocal discovery due 10 days before trial after opt-in",
        ),
    ]
}
