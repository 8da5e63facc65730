//! SQLite-backed session storage.
//!
//! This module is the injected session store of the wizard: the original
//! system kept the aggregate form value in a cookie-backed session; here it
//! lives in a small SQLite database so the engine is testable and usable
//! without an HTTP shell. It is the only persisted resource in the crate.

use std::path::Path;

use rusqlite::Connection;

use crate::error::{DatabaseResultExt, Result};

pub mod migrations;
pub mod session_queries;

/// Database connection and operations handler for sessions.
pub struct SessionDb {
    connection: Connection,
}

impl SessionDb {
    /// Creates a new database connection and initializes the schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open database connection")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }
}
