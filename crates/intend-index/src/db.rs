use intend_types::{Patient, PatientName, SessionId, SessionRecord};
use rusqlite::Connection;
use std::path::Path;

use crate::records::IndexStats;
use crate::schema::{self, SCHEMA_VERSION};
use crate::{Error, Result, queries};

pub struct Database {
    conn: Connection,
}

impl Database {
    pub fn open(db_path: &Path) -> Result<Self> {
        if let Some(parent) = db_path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(db_path)?;
        let db = Self { conn };
        schema::init_schema(&db.conn)?;
        Ok(db)
    }

    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let db = Self { conn };
        schema::init_schema(&db.conn)?;
        Ok(db)
    }

    pub fn upsert_patient(&self, patient: &Patient) -> Result<()> {
        queries::patient::upsert(&self.conn, patient)
    }

    pub fn get_patient(&self, name: &PatientName) -> Result<Option<Patient>> {
        queries::patient::get(&self.conn, name)
    }

    pub fn list_patients(&self) -> Result<Vec<Patient>> {
        queries::patient::list(&self.conn)
    }

    /// Insert a new session and return its insertion sequence number.
    /// The patient must already exist.
    pub fn insert_session(&self, session: &SessionRecord) -> Result<i64> {
        if self.get_patient(&session.patient)?.is_none() {
            return Err(Error::Query(format!(
                "unknown patient: {}",
                session.patient
            )));
        }
        queries::session::insert(&self.conn, session)
    }

    pub fn get_session(&self, id: &SessionId) -> Result<Option<SessionRecord>> {
        queries::session::get(&self.conn, id)
    }

    pub fn list_sessions(&self, patient: &PatientName) -> Result<Vec<SessionRecord>> {
        queries::session::list_for_patient(&self.conn, patient)
    }

    pub fn list_all_sessions(&self) -> Result<Vec<SessionRecord>> {
        queries::session::list_all(&self.conn)
    }

    pub fn delete_session(&self, id: &SessionId) -> Result<bool> {
        queries::session::delete(&self.conn, id)
    }

    pub fn count_sessions(&self) -> Result<usize> {
        queries::session::count(&self.conn)
    }

    pub fn stats(&self) -> Result<IndexStats> {
        Ok(IndexStats {
            patients: queries::patient::count(&self.conn)?,
            sessions: queries::session::count(&self.conn)?,
            schema_version: SCHEMA_VERSION,
        })
    }

    pub fn vacuum(&self) -> Result<()> {
        self.conn.execute_batch("VACUUM")?;
        Ok(())
    }
}
