use bidrag_core::{
    params::{SessionRef, StepPatch},
    Locale, SessionStatus, StepId, WizardBuilder, WizardError,
};
use serde_json::json;

mod common;
use common::create_test_wizard;

fn session_ref(id: &str) -> SessionRef {
    SessionRef {
        session: id.to_string(),
    }
}

fn patch(id: &str, step: StepId, data: serde_json::Value) -> StepPatch {
    StepPatch {
        session: id.to_string(),
        step,
        data,
    }
}

/// Fill step 1 with two valid parties.
async fn fill_partene(wizard: &bidrag_core::Wizard, id: &str) {
    wizard
        .update_step(&patch(
            id,
            StepId::Partene,
            json!({
                "bidragspliktig": { "fulltNavn": "Kari Nordmann", "ident": "01019010046" },
                "bidragsmottaker": { "fulltNavn": "Ola Nordmann", "ident": "15069512361" }
            }),
        ))
        .await
        .expect("Failed to fill partene");
}

/// Fill step 2 with one valid child.
async fn fill_barna(wizard: &bidrag_core::Wizard, id: &str) {
    wizard
        .update_step(&patch(
            id,
            StepId::Barna,
            json!({
                "barn": [{ "fulltNavn": "Per Nordmann", "ident": "24056078939", "sum": "2500" }]
            }),
        ))
        .await
        .expect("Failed to fill barna");
}

/// Fill step 3 with a start date.
async fn fill_periode(wizard: &bidrag_core::Wizard, id: &str) {
    wizard
        .update_step(&patch(
            id,
            StepId::Periode,
            json!({ "fraDato": "2026-01-01" }),
        ))
        .await
        .expect("Failed to fill periode");
}

/// Fill step 4 by confirming the summary.
async fn fill_bekreftelse(wizard: &bidrag_core::Wizard, id: &str) {
    wizard
        .update_step(&patch(id, StepId::Bekreftelse, json!({ "bekreftet": true })))
        .await
        .expect("Failed to fill bekreftelse");
}

async fn incomplete_ordinals(wizard: &bidrag_core::Wizard, id: &str) -> Vec<u32> {
    wizard
        .incomplete(&session_ref(id), Locale::Nb)
        .await
        .expect("Failed to evaluate")
        .iter()
        .map(|s| s.ordinal)
        .collect()
}

#[tokio::test]
async fn test_fresh_session_reports_all_steps_incomplete() {
    let (_temp_dir, wizard) = create_test_wizard().await;

    // Scenario A: empty aggregate value.
    assert_eq!(incomplete_ordinals(&wizard, "a").await, vec![1, 2, 3, 4]);
}

#[tokio::test]
async fn test_filling_step_one_leaves_remaining_steps() {
    let (_temp_dir, wizard) = create_test_wizard().await;

    // Scenario B: valid names and idents for both parties.
    fill_partene(&wizard, "b").await;
    assert_eq!(incomplete_ordinals(&wizard, "b").await, vec![2, 3, 4]);
}

#[tokio::test]
async fn test_missing_start_date_reports_only_period_step() {
    let (_temp_dir, wizard) = create_test_wizard().await;

    // Scenario C: everything valid except fraDato.
    fill_partene(&wizard, "c").await;
    fill_barna(&wizard, "c").await;
    fill_bekreftelse(&wizard, "c").await;
    assert_eq!(incomplete_ordinals(&wizard, "c").await, vec![3]);

    fill_periode(&wizard, "c").await;
    assert_eq!(incomplete_ordinals(&wizard, "c").await, Vec::<u32>::new());
}

#[tokio::test]
async fn test_child_with_empty_sum_reports_children_step() {
    let (_temp_dir, wizard) = create_test_wizard().await;

    // Scenario E: one child with an empty sum field.
    fill_partene(&wizard, "e").await;
    fill_periode(&wizard, "e").await;
    fill_bekreftelse(&wizard, "e").await;
    wizard
        .update_step(&patch(
            "e",
            StepId::Barna,
            json!({
                "barn": [{ "fulltNavn": "Per Nordmann", "ident": "24056078939", "sum": "" }]
            }),
        ))
        .await
        .expect("Failed to fill barna");

    assert_eq!(incomplete_ordinals(&wizard, "e").await, vec![2]);
}

#[tokio::test]
async fn test_evaluation_is_idempotent_without_mutation() {
    let (_temp_dir, wizard) = create_test_wizard().await;

    fill_partene(&wizard, "idem").await;
    let first = incomplete_ordinals(&wizard, "idem").await;
    let second = incomplete_ordinals(&wizard, "idem").await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_form_data_survives_wizard_instances() {
    let temp_dir = tempfile::TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");

    {
        let wizard = WizardBuilder::new()
            .with_database_path(Some(&db_path))
            .build()
            .await
            .expect("Failed to create wizard");
        fill_periode(&wizard, "persist").await;
    }

    let wizard = WizardBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to reopen wizard");
    let session = wizard
        .session(&session_ref("persist"))
        .await
        .expect("Failed to load session");
    assert_eq!(session.form.periode.fra_dato, "2026-01-01");
}

#[tokio::test]
async fn test_submit_is_gated_on_completeness() {
    let (_temp_dir, wizard) = create_test_wizard().await;

    fill_partene(&wizard, "gate").await;
    let err = wizard
        .submit(&session_ref("gate"), Locale::Nb)
        .await
        .expect_err("Incomplete session must not submit");
    match err {
        WizardError::IncompleteAgreement { ordinals } => assert_eq!(ordinals, vec![2, 3, 4]),
        other => panic!("Unexpected error: {other}"),
    }
}

#[tokio::test]
async fn test_complete_session_submits_once() {
    let (_temp_dir, wizard) = create_test_wizard().await;
    let id = "full";

    fill_partene(&wizard, id).await;
    fill_barna(&wizard, id).await;
    fill_periode(&wizard, id).await;
    fill_bekreftelse(&wizard, id).await;

    let report = wizard
        .status(&session_ref(id), Locale::Nb)
        .await
        .expect("Failed to get status");
    assert_eq!(report.status, SessionStatus::ReadyToSubmit);

    let agreement = wizard
        .submit(&session_ref(id), Locale::Nb)
        .await
        .expect("Complete session must submit");
    assert_eq!(agreement.total(), 2500);
    assert!(format!("{agreement}").contains("Privat avtale om barnebidrag"));

    // Terminal state: no double submission, no further edits.
    let err = wizard
        .submit(&session_ref(id), Locale::Nb)
        .await
        .expect_err("Second submission must fail");
    assert!(matches!(err, WizardError::AlreadySubmitted { .. }));

    let err = wizard
        .update_step(&patch(id, StepId::Periode, json!({ "fraDato": "2027-01-01" })))
        .await
        .expect_err("Submitted session must be read-only");
    assert!(matches!(err, WizardError::AlreadySubmitted { .. }));

    let report = wizard
        .status(&session_ref(id), Locale::Nb)
        .await
        .expect("Failed to get status");
    assert_eq!(report.status, SessionStatus::Submitted);
}

#[tokio::test]
async fn test_reset_clears_session_data() {
    let (_temp_dir, wizard) = create_test_wizard().await;

    fill_partene(&wizard, "reset").await;
    wizard
        .reset(&session_ref("reset"))
        .await
        .expect("Failed to reset");

    assert_eq!(incomplete_ordinals(&wizard, "reset").await, vec![1, 2, 3, 4]);
}

#[tokio::test]
async fn test_sessions_are_isolated() {
    let (_temp_dir, wizard) = create_test_wizard().await;

    fill_partene(&wizard, "one").await;
    assert_eq!(incomplete_ordinals(&wizard, "one").await, vec![2, 3, 4]);
    assert_eq!(incomplete_ordinals(&wizard, "two").await, vec![1, 2, 3, 4]);
}

#[tokio::test]
async fn test_locale_changes_messages_not_outcome() {
    let (_temp_dir, wizard) = create_test_wizard().await;

    fill_partene(&wizard, "locale").await;
    let nb = incomplete_ordinals(&wizard, "locale").await;
    let en: Vec<u32> = wizard
        .incomplete(&session_ref("locale"), Locale::En)
        .await
        .expect("Failed to evaluate")
        .iter()
        .map(|s| s.ordinal)
        .collect();
    assert_eq!(nb, en);
}
