//! Per-step data reads and patches.

use tokio::task;

use super::Wizard;
use crate::{
    db::SessionDb,
    error::{Result, WizardError},
    models::{StepId, WizardSession},
    params::{SessionRef, StepPatch},
    registry,
};

impl Wizard {
    /// Applies a JSON patch to one step's data slice.
    ///
    /// Objects merge field by field with last-write-wins semantics; arrays
    /// and scalars replace wholesale. The merged form value is persisted
    /// before returning. Submitted sessions are read-only.
    pub async fn update_step(&self, params: &StepPatch) -> Result<WizardSession> {
        let db_path = self.db_path.clone();
        let id = params.session.clone();
        let step = params.step;
        let data = params.data.clone();

        task::spawn_blocking(move || {
            let mut db = SessionDb::new(&db_path)?;
            let mut session = db.open_session(&id, registry::first().route)?;

            if session.submitted {
                return Err(WizardError::AlreadySubmitted { id });
            }

            session.form.apply_patch(step, &data)?;
            db.save_form(&id, &session.form)?;
            Ok(session)
        })
        .await
        .map_err(|e| WizardError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// The current JSON value of one step's data slice.
    pub async fn step_data(
        &self,
        params: &SessionRef,
        step: StepId,
    ) -> Result<serde_json::Value> {
        let session = self.session(params).await?;
        Ok(session.form.slice(step))
    }
}
