//! Timeline milestones and stage-keyed deadlines.

use guidance::compose;
use pretty_assertions::assert_eq;
use shared_types::DeadlinePriority;

use crate::common::case;

fn timeline_for(stage: &str) -> Vec<(String, bool)> {
    let doc = compose(&case("CA", &["ca-battery"], stage, "released", true));
    doc.timeline
        .into_iter()
        .map(|row| (row.stage, row.completed))
        .collect()
}

#[test]
fn arrest_stage_marks_only_arrest_complete() {
    let timeline = timeline_for("arrest");
    assert_eq!(timeline[0], ("Arrest".to_string(), true));
    assert_eq!(timeline[1], ("Arraignment".to_string(), false));
}

#[test]
fn stages_past_arrest_mark_arraignment_complete() {
    for stage in ["arraignment", "pretrial", "trial", "sentencing", "appeal"] {
        let timeline = timeline_for(stage);
        assert_eq!(
            timeline[1],
            ("Arraignment".to_string(), true),
            "stage {stage}"
        );
    }
}

#[test]
fn later_milestones_are_never_presumed_complete() {
    for stage in ["arrest", "arraignment", "pretrial", "trial", "sentencing"] {
        let timeline = timeline_for(stage);
        assert_eq!(timeline.len(), 5, "stage {stage}");
        for (name, completed) in &timeline[2..] {
            assert!(!completed, "stage {stage} marked {name} complete");
        }
    }
}

#[test]
fn arraignment_stage_gets_preliminary_hearing_deadline() {
    let doc = compose(&case("CA", &["ca-battery"], "arraignment", "released", true));
    let hearing = doc
        .deadlines
        .iter()
        .find(|d| d.title == "Preliminary hearing")
        .unwrap();
    assert_eq!(hearing.priority, DeadlinePriority::Important);
    assert_eq!(hearing.days_from_now, Some(10));
    assert!(!doc.deadlines.iter().any(|d| d.title == "Arraignment"));
}

#[test]
fn discovery_deadline_is_always_present() {
    for stage in ["arrest", "arraignment", "pretrial", "trial", "unknown"] {
        let doc = compose(&case("CA", &["ca-battery"], stage, "released", true));
        assert!(
            doc.deadlines.iter().any(|d| d.title == "Discovery deadline"),
            "stage {stage}"
        );
    }
}

#[test]
fn question_banks_switch_with_the_stage() {
    let arrest = compose(&case("CA", &[], "arrest", "detained", false));
    assert!(arrest
        .mock_questions
        .iter()
        .any(|q| q.question.contains("why you were arrested")));

    let trial = compose(&case("CA", &[], "trial", "released", true));
    assert!(trial
        .mock_questions
        .iter()
        .any(|q| q.question.contains("Will the defendant testify")));

    let sentencing = compose(&case("CA", &[], "sentencing", "released", true));
    assert!(sentencing
        .mock_questions
        .iter()
        .any(|q| q.question == "How do you plead?"));
}
