use rusqlite::Connection;

use crate::Result;

// Schema version (increment when changing table definitions)
pub const SCHEMA_VERSION: i32 = 1;

// Only lookup keys are columns; the records themselves are JSON payloads
// decoded on read, so record fields can evolve without a migration.
// A version mismatch drops and recreates the tables.

pub fn init_schema(conn: &Connection) -> Result<()> {
    let current_version: i32 = conn.query_row("PRAGMA user_version", [], |row| row.get(0))?;

    if current_version != SCHEMA_VERSION {
        drop_all_tables(conn)?;
    }

    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS patients (
            name TEXT PRIMARY KEY,
            payload TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS sessions (
            seq INTEGER PRIMARY KEY AUTOINCREMENT,
            id TEXT NOT NULL UNIQUE,
            patient TEXT NOT NULL,
            session_key TEXT NOT NULL,
            payload TEXT NOT NULL,
            FOREIGN KEY (patient) REFERENCES patients(name)
        );

        CREATE INDEX IF NOT EXISTS idx_sessions_patient ON sessions(patient, seq);
        "#,
    )?;

    conn.execute(&format!("PRAGMA user_version = {}", SCHEMA_VERSION), [])?;

    Ok(())
}

fn drop_all_tables(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        DROP TABLE IF EXISTS sessions;
        DROP TABLE IF EXISTS patients;
        "#,
    )?;
    Ok(())
}
