//! Session CRUD operations and queries.

use jiff::Timestamp;
use log::warn;
use rusqlite::{params, types::Type, OptionalExtension};

use crate::error::{DatabaseResultExt, Result, WizardError};
use crate::models::{FormValue, WizardSession};

const SELECT_SESSION_SQL: &str =
    "SELECT id, form, current_route, submitted, created_at, updated_at FROM sessions WHERE id = ?1";
const INSERT_SESSION_SQL: &str = "INSERT INTO sessions (id, form, current_route, submitted, created_at, updated_at) VALUES (?1, '{}', ?2, 0, ?3, ?3)";
const UPDATE_FORM_SQL: &str = "UPDATE sessions SET form = ?1, updated_at = ?2 WHERE id = ?3";
const UPDATE_ROUTE_SQL: &str =
    "UPDATE sessions SET current_route = ?1, updated_at = ?2 WHERE id = ?3";
const MARK_SUBMITTED_SQL: &str = "UPDATE sessions SET submitted = 1, updated_at = ?1 WHERE id = ?2";
const DELETE_SESSION_SQL: &str = "DELETE FROM sessions WHERE id = ?1";

impl super::SessionDb {
    /// Helper function to construct a WizardSession from a database row.
    fn build_session_from_row(row: &rusqlite::Row) -> rusqlite::Result<WizardSession> {
        let id: String = row.get(0)?;

        // Malformed stored form data is treated as absence of data, never
        // surfaced to the user.
        let form_str: String = row.get(1)?;
        let form: FormValue = serde_json::from_str(&form_str).unwrap_or_else(|e| {
            warn!("Discarding malformed form data for session '{id}': {e}");
            FormValue::default()
        });

        let submitted: i64 = row.get(3)?;

        Ok(WizardSession {
            id,
            form,
            current_route: row.get(2)?,
            submitted: submitted != 0,
            created_at: row.get::<_, String>(4)?.parse::<Timestamp>().map_err(|e| {
                rusqlite::Error::FromSqlConversionFailure(4, Type::Text, Box::new(e))
            })?,
            updated_at: row.get::<_, String>(5)?.parse::<Timestamp>().map_err(|e| {
                rusqlite::Error::FromSqlConversionFailure(5, Type::Text, Box::new(e))
            })?,
        })
    }

    /// Loads a session by identifier, if it exists.
    pub fn load_session(&self, id: &str) -> Result<Option<WizardSession>> {
        self.connection
            .query_row(SELECT_SESSION_SQL, params![id], Self::build_session_from_row)
            .optional()
            .db_context("Failed to load session")
    }

    /// Loads a session, creating an empty one on first touch.
    pub fn open_session(&mut self, id: &str, first_route: &str) -> Result<WizardSession> {
        if let Some(session) = self.load_session(id)? {
            return Ok(session);
        }

        let now = Timestamp::now();
        self.connection
            .execute(
                INSERT_SESSION_SQL,
                params![id, first_route, now.to_string()],
            )
            .db_context("Failed to create session")?;

        Ok(WizardSession {
            id: id.to_string(),
            form: FormValue::default(),
            current_route: first_route.to_string(),
            submitted: false,
            created_at: now,
            updated_at: now,
        })
    }

    /// Persists the aggregate form value for a session. Last write wins.
    pub fn save_form(&mut self, id: &str, form: &FormValue) -> Result<()> {
        let form_json = serde_json::to_string(form)?;
        let updated = self
            .connection
            .execute(
                UPDATE_FORM_SQL,
                params![form_json, Timestamp::now().to_string(), id],
            )
            .db_context("Failed to save form data")?;

        if updated == 0 {
            return Err(WizardError::SessionNotFound { id: id.to_string() });
        }
        Ok(())
    }

    /// Persists the current route for a session.
    pub fn save_route(&mut self, id: &str, route: &str) -> Result<()> {
        let updated = self
            .connection
            .execute(
                UPDATE_ROUTE_SQL,
                params![route, Timestamp::now().to_string(), id],
            )
            .db_context("Failed to save current route")?;

        if updated == 0 {
            return Err(WizardError::SessionNotFound { id: id.to_string() });
        }
        Ok(())
    }

    /// Marks a session as submitted (terminal).
    pub fn mark_submitted(&mut self, id: &str) -> Result<()> {
        let updated = self
            .connection
            .execute(MARK_SUBMITTED_SQL, params![Timestamp::now().to_string(), id])
            .db_context("Failed to mark session submitted")?;

        if updated == 0 {
            return Err(WizardError::SessionNotFound { id: id.to_string() });
        }
        Ok(())
    }

    /// Deletes a session and all its data. Deleting an absent session is a
    /// no-op.
    pub fn clear_session(&mut self, id: &str) -> Result<()> {
        self.connection
            .execute(DELETE_SESSION_SQL, params![id])
            .db_context("Failed to clear session")?;
        Ok(())
    }
}
