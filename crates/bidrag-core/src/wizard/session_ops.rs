//! Session lifecycle, navigation, evaluation and submission operations.

use tokio::task;

use super::{status_report, StatusReport, Wizard};
use crate::{
    db::SessionDb,
    display::Agreement,
    error::{Result, WizardError},
    evaluator,
    i18n::Locale,
    models::{Step, WizardSession},
    navigation,
    params::{Goto, SessionRef},
    registry,
};

impl Wizard {
    /// Loads the session, creating an empty one on first touch.
    pub async fn session(&self, params: &SessionRef) -> Result<WizardSession> {
        let db_path = self.db_path.clone();
        let id = params.session.clone();

        task::spawn_blocking(move || {
            let mut db = SessionDb::new(&db_path)?;
            db.open_session(&id, registry::first().route)
        })
        .await
        .map_err(|e| WizardError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Aggregate and per-step status of the session.
    pub async fn status(&self, params: &SessionRef, locale: Locale) -> Result<StatusReport> {
        let session = self.session(params).await?;
        Ok(status_report(session, locale))
    }

    /// Steps whose data currently fails validation, in registry order.
    pub async fn incomplete(
        &self,
        params: &SessionRef,
        locale: Locale,
    ) -> Result<Vec<&'static Step>> {
        let session = self.session(params).await?;
        Ok(evaluator::incomplete_steps(&session.form, locale))
    }

    /// Moves the session to the step with the given ordinal.
    pub async fn goto(&self, params: &Goto) -> Result<&'static Step> {
        let step = registry::by_ordinal(params.ordinal).ok_or(WizardError::StepNotFound {
            ordinal: params.ordinal,
        })?;

        let db_path = self.db_path.clone();
        let id = params.session.clone();

        task::spawn_blocking(move || {
            let mut db = SessionDb::new(&db_path)?;
            db.open_session(&id, registry::first().route)?;
            db.save_route(&id, step.route)?;
            Ok(step)
        })
        .await
        .map_err(|e| WizardError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Moves the session one step forward. A no-op on the last step.
    pub async fn advance(&self, params: &SessionRef) -> Result<&'static Step> {
        self.shift(params, navigation::next).await
    }

    /// Moves the session one step back. A no-op on the first step.
    pub async fn back(&self, params: &SessionRef) -> Result<&'static Step> {
        self.shift(params, navigation::previous).await
    }

    async fn shift(
        &self,
        params: &SessionRef,
        direction: fn(&Step) -> Option<&'static Step>,
    ) -> Result<&'static Step> {
        let db_path = self.db_path.clone();
        let id = params.session.clone();

        task::spawn_blocking(move || {
            let mut db = SessionDb::new(&db_path)?;
            let session = db.open_session(&id, registry::first().route)?;

            let active =
                navigation::active_step(&session.current_route).unwrap_or_else(registry::first);
            match direction(active) {
                Some(target) => {
                    db.save_route(&id, target.route)?;
                    Ok(target)
                }
                None => Ok(active),
            }
        })
        .await
        .map_err(|e| WizardError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Submits the agreement, rendering the final document.
    ///
    /// Submission is gated: an incomplete session fails with the incomplete
    /// step ordinals, and a session can only be submitted once.
    pub async fn submit(&self, params: &SessionRef, locale: Locale) -> Result<Agreement> {
        let db_path = self.db_path.clone();
        let id = params.session.clone();

        task::spawn_blocking(move || {
            let mut db = SessionDb::new(&db_path)?;
            let session = db.open_session(&id, registry::first().route)?;

            if session.submitted {
                return Err(WizardError::AlreadySubmitted { id });
            }

            let incomplete = evaluator::incomplete_steps(&session.form, locale);
            if !incomplete.is_empty() {
                return Err(WizardError::IncompleteAgreement {
                    ordinals: incomplete.iter().map(|s| s.ordinal).collect(),
                });
            }

            db.mark_submitted(&id)?;
            Ok(Agreement::new(id, session.form))
        })
        .await
        .map_err(|e| WizardError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Clears the session and all its data.
    pub async fn reset(&self, params: &SessionRef) -> Result<()> {
        let db_path = self.db_path.clone();
        let id = params.session.clone();

        task::spawn_blocking(move || {
            let mut db = SessionDb::new(&db_path)?;
            db.clear_session(&id)
        })
        .await
        .map_err(|e| WizardError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }
}
