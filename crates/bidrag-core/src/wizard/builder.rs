//! Builder for creating and configuring Wizard instances.

use std::path::{Path, PathBuf};

use tokio::task;

use super::Wizard;
use crate::{
    db::SessionDb,
    error::{Result, WizardError},
};

/// Builder for creating and configuring Wizard instances.
#[derive(Debug, Clone)]
pub struct WizardBuilder {
    database_path: Option<PathBuf>,
}

impl WizardBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            database_path: None,
        }
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/bidrag/bidrag.db` or `~/.local/share/bidrag/bidrag.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Builds the configured wizard instance.
    ///
    /// # Errors
    ///
    /// Returns `WizardError::FileSystem` if the database path is invalid
    /// Returns `WizardError::Database` if database initialization fails
    pub async fn build(self) -> Result<Wizard> {
        let db_path = if let Some(path) = self.database_path {
            path
        } else {
            Self::default_database_path()?
        };

        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| WizardError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let db_path_clone = db_path.clone();
        task::spawn_blocking(move || {
            let _db = SessionDb::new(&db_path_clone)?;
            Ok::<(), WizardError>(())
        })
        .await
        .map_err(|e| WizardError::Configuration {
            message: format!("Task join error: {e}"),
        })??;

        Ok(Wizard::new(db_path))
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("bidrag")
            .place_data_file("bidrag.db")
            .map_err(|e| WizardError::XdgDirectory(e.to_string()))
    }
}

impl Default for WizardBuilder {
    fn default() -> Self {
        Self::new()
    }
}
