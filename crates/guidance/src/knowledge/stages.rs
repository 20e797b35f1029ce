//! Stage rule table — per-stage action and rights playbooks.

use shared_types::{CaseStage, StageRules};

/// Read-only stage table. A stage without a row (and any unparseable stage
/// string) simply contributes nothing; the composer treats that as empty
/// lists, never an error.
#[derive(Debug)]
pub struct StageRuleTable {
    rows: Vec<StageRules>,
}

impl StageRuleTable {
    pub fn new(rows: Vec<StageRules>) -> Self {
        Self { rows }
    }

    pub fn seed() -> Self {
        Self::new(seed_rows())
    }

    pub fn get(&self, stage: CaseStage) -> Option<&StageRules> {
        self.rows.iter().find(|row| row.stage == stage)
    }

    pub fn rows(&self) -> &[StageRules] {
        &self.rows
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn stage_rules(
    stage: CaseStage,
    critical_actions: &[&str],
    immediate_actions: &[&str],
    rights: &[&str],
    avoid_actions: &[&str],
    court_preparation: &[&str],
) -> StageRules {
    StageRules {
        stage,
        critical_actions: strings(critical_actions),
        immediate_actions: strings(immediate_actions),
        rights: strings(rights),
        avoid_actions: strings(avoid_actions),
        court_preparation: strings(court_preparation),
    }
}

/// Seed playbooks for the five stages with curated guidance. Appeal has no
/// row on purpose; appeal guidance is individualized enough that generic
/// playbook text would mislead.
fn seed_rows() -> Vec<StageRules> {
    vec![
        stage_rules(
            CaseStage::Arrest,
            &[
                "Invoke your right to remain silent",
                "Do not consent to any search",
            ],
            &[
                "Contact a criminal defense attorney",
                "Write down everything you remember about the arrest",
                "Identify witnesses and save their contact information",
            ],
            &[
                "You have the right to remain silent",
                "You have the right to an attorney",
                "If you cannot afford an attorney, one will be appointed for you",
                "You have the right to know the charges against you",
            ],
            &[
                "Do not discuss your case on jail phones; calls are recorded",
                "Do not post about your arrest on social media",
                "Do not contact the alleged victim or witnesses",
            ],
            &[
                "Learn what happens at an arraignment",
                "Arrange transportation and childcare for your court date",
                "Gather identification and proof of residence for the bail hearing",
            ],
        ),
        stage_rules(
            CaseStage::Arraignment,
            &[
                "Appear in court on time; a missed arraignment triggers a bench warrant",
            ],
            &[
                "Review the charging documents before your hearing",
                "Decide with counsel how to plead",
                "Prepare information supporting release on your own recognizance",
            ],
            &[
                "Right to have the charges read to you in open court",
                "Right to enter a plea of not guilty",
                "Right to counsel before entering any plea",
                "Right to reasonable bail",
            ],
            &[
                "Do not plead guilty just to get it over with",
                "Do not discuss the facts of the case in open court beyond your plea",
                "Do not arrive late or dress carelessly for court",
            ],
            &[
                "Plan to arrive 30 minutes early to find the correct courtroom",
                "Bring proof of employment and community ties for the bail argument",
                "Write down questions for your attorney before the hearing",
            ],
        ),
        stage_rules(
            CaseStage::Pretrial,
            &[
                "Track every filing deadline with your attorney",
            ],
            &[
                "Review all discovery with your attorney",
                "Discuss plea offers and their collateral consequences",
                "Identify and interview defense witnesses",
            ],
            &[
                "Right to see the evidence against you",
                "Right to file motions to suppress unlawfully obtained evidence",
                "Right to compel witnesses to testify",
            ],
            &[
                "Do not contact prosecution witnesses yourself",
                "Do not miss any court appearance, however routine",
                "Do not violate any condition of release",
            ],
            &[
                "Keep a case binder of every document you receive",
                "Attend every status conference prepared to answer scheduling questions",
                "Review the prosecution's exhibit list with counsel",
            ],
        ),
        stage_rules(
            CaseStage::Trial,
            &[
                "Be in court every day on time; absence can forfeit your rights",
            ],
            &[
                "Finalize witness preparation with your attorney",
                "Review your decision about testifying with counsel",
                "Plan daily logistics for the length of the trial",
            ],
            &[
                "Right to a jury of your peers",
                "Right to confront and cross-examine witnesses",
                "Right to testify or to remain silent",
                "Right to present evidence in your own defense",
            ],
            &[
                "Do not react visibly to testimony",
                "Do not discuss the case anywhere jurors might overhear",
                "Do not speak to media during trial",
            ],
            &[
                "Dress in clean, conservative clothing every day",
                "Practice answering questions directly and briefly",
                "Plan for full days in court, including childcare and work leave",
            ],
        ),
        stage_rules(
            CaseStage::Sentencing,
            &[
                "Submit mitigation materials before the sentencing deadline",
            ],
            &[
                "Collect letters of support from employers, family, and community",
                "Complete any voluntary programs before the hearing",
                "Review the presentence report for errors with your attorney",
            ],
            &[
                "Right to speak on your own behalf before sentence is imposed",
                "Right to challenge factual errors in the presentence report",
                "Right to appeal the sentence",
            ],
            &[
                "Do not minimize the offense when addressing the court",
                "Do not miss appointments with the probation officer",
            ],
            &[
                "Prepare a short, sincere statement of responsibility",
                "Bring proof of employment, treatment, and community service",
                "Understand the sentencing range before the hearing",
            ],
        ),
    ]
}
