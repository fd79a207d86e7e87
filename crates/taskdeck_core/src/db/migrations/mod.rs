//! Schema setup for the state database.
//!
//! # Responsibility
//! - Bring a fresh or older database up to the current schema atomically.
//!
//! # Invariants
//! - The applied schema version is mirrored to `PRAGMA user_version`.
//! - Databases written by a newer binary are rejected, never reinterpreted.

use crate::db::{DbError, DbResult};
use rusqlite::Connection;

/// Current schema version; bump together with the setup SQL.
const SCHEMA_VERSION: u32 = 1;

const INIT_SQL: &str = include_str!("0001_init.sql");

/// Returns the schema version this binary writes.
pub fn latest_version() -> u32 {
    SCHEMA_VERSION
}

/// Ensures the connection's schema matches [`latest_version`].
///
/// A no-op when the database is already current; a single transaction
/// creates the schema otherwise.
pub fn apply_migrations(conn: &mut Connection) -> DbResult<()> {
    let db_version = current_user_version(conn)?;

    if db_version > SCHEMA_VERSION {
        return Err(DbError::UnsupportedSchemaVersion {
            db_version,
            latest_supported: SCHEMA_VERSION,
        });
    }

    if db_version == SCHEMA_VERSION {
        return Ok(());
    }

    let tx = conn.transaction()?;
    tx.execute_batch(INIT_SQL)?;
    tx.execute_batch(&format!("PRAGMA user_version = {SCHEMA_VERSION};"))?;
    tx.commit()?;

    Ok(())
}

fn current_user_version(conn: &Connection) -> DbResult<u32> {
    let version = conn.query_row("PRAGMA user_version;", [], |row| row.get::<_, u32>(0))?;
    Ok(version)
}
