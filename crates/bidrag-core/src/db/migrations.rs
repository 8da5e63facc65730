//! Database schema initialization and migrations.

use crate::error::{DatabaseResultExt, Result, WizardError};

impl super::SessionDb {
    /// Initializes the database schema using the embedded SQL file.
    pub(super) fn initialize_schema(&self) -> Result<()> {
        let schema_sql = include_str!("../../assets/schema.sql");
        self.connection
            .execute_batch(schema_sql)
            .db_context("Failed to initialize database schema")?;

        self.apply_migrations()?;

        Ok(())
    }

    /// Apply database migrations for existing databases
    fn apply_migrations(&self) -> Result<()> {
        // The submitted flag arrived after the first schema version.
        let has_submitted_column: bool = self
            .connection
            .query_row(
                "SELECT COUNT(*) FROM pragma_table_info('sessions') WHERE name = 'submitted'",
                [],
                |row| row.get(0),
            )
            .map(|count: i64| count > 0)
            .unwrap_or(false);

        if !has_submitted_column {
            self.connection
                .execute(
                    "ALTER TABLE sessions ADD COLUMN submitted INTEGER NOT NULL DEFAULT 0",
                    [],
                )
                .map_err(|e| {
                    WizardError::database_error(
                        "Failed to add submitted column to sessions table",
                        e,
                    )
                })?;
        }

        Ok(())
    }
}
