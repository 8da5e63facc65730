//! Unit tests for wizard session mechanics.

use tempfile::TempDir;

use super::*;
use crate::error::WizardError;
use crate::models::StepId;
use crate::params::{Goto, SessionRef};

async fn test_wizard() -> (TempDir, Wizard) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let wizard = WizardBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create wizard");
    (temp_dir, wizard)
}

fn session_ref(id: &str) -> SessionRef {
    SessionRef {
        session: id.to_string(),
    }
}

#[tokio::test]
async fn test_session_is_created_empty_on_first_touch() {
    let (_temp_dir, wizard) = test_wizard().await;

    let session = wizard
        .session(&session_ref("fresh"))
        .await
        .expect("Failed to open session");
    assert_eq!(session.id, "fresh");
    assert_eq!(session.form, crate::models::FormValue::default());
    assert_eq!(session.current_route, registry::first().route);
    assert!(!session.submitted);
}

#[tokio::test]
async fn test_goto_persists_route() {
    let (_temp_dir, wizard) = test_wizard().await;

    let step = wizard
        .goto(&Goto {
            session: "nav".to_string(),
            ordinal: 3,
        })
        .await
        .expect("Failed to goto");
    assert_eq!(step.id, StepId::Periode);

    let session = wizard
        .session(&session_ref("nav"))
        .await
        .expect("Failed to reload session");
    assert_eq!(session.current_route, step.route);
}

#[tokio::test]
async fn test_goto_unknown_ordinal_fails() {
    let (_temp_dir, wizard) = test_wizard().await;

    let err = wizard
        .goto(&Goto {
            session: "nav".to_string(),
            ordinal: 9,
        })
        .await
        .expect_err("Ordinal 9 must not resolve");
    assert!(matches!(err, WizardError::StepNotFound { ordinal: 9 }));
}

#[tokio::test]
async fn test_advance_and_back_clamp_at_edges() {
    let (_temp_dir, wizard) = test_wizard().await;
    let params = session_ref("edges");

    // A fresh session starts on the first step; back stays put.
    let step = wizard.back(&params).await.expect("Failed to move back");
    assert_eq!(step.ordinal, 1);

    for expected in [2, 3, 4, 4] {
        let step = wizard
            .advance(&params)
            .await
            .expect("Failed to move forward");
        assert_eq!(step.ordinal, expected);
    }
}

#[tokio::test]
async fn test_status_report_tracks_progress_and_active_step() {
    let (_temp_dir, wizard) = test_wizard().await;
    let params = session_ref("status");

    let report = wizard
        .status(&params, crate::i18n::Locale::Nb)
        .await
        .expect("Failed to get status");
    assert_eq!(report.status, crate::models::SessionStatus::Incomplete);
    assert_eq!(report.active.ordinal, 1);
    assert!(report
        .steps
        .iter()
        .all(|s| s.progress == crate::models::StepProgress::Empty));

    wizard
        .update_step(&crate::params::StepPatch {
            session: "status".to_string(),
            step: StepId::Periode,
            data: serde_json::json!({ "fraDato": "2026-01-01" }),
        })
        .await
        .expect("Failed to patch step");

    let report = wizard
        .status(&params, crate::i18n::Locale::Nb)
        .await
        .expect("Failed to get status");
    let periode = &report.steps[2];
    assert_eq!(periode.progress, crate::models::StepProgress::Complete);
}
