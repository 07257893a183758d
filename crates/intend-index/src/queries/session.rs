use intend_types::{PatientName, SessionId, SessionRecord};
use rusqlite::{Connection, OptionalExtension, params};

use crate::{Error, Result};

pub fn insert(conn: &Connection, session: &SessionRecord) -> Result<i64> {
    let payload = serde_json::to_string(session)?;
    let id = session.id.to_string();

    let inserted = conn.execute(
        r#"
        INSERT INTO sessions (id, patient, session_key, payload)
        VALUES (?1, ?2, ?3, ?4)
        ON CONFLICT(id) DO NOTHING
        "#,
        params![&id, session.patient.as_str(), &session.key, payload],
    )?;

    if inserted == 0 {
        return Err(Error::Query(format!("session {} already exists", id)));
    }

    Ok(conn.last_insert_rowid())
}

pub fn get(conn: &Connection, id: &SessionId) -> Result<Option<SessionRecord>> {
    let payload: Option<String> = conn
        .query_row(
            "SELECT payload FROM sessions WHERE id = ?1",
            [id.to_string()],
            |row| row.get(0),
        )
        .optional()?;

    match payload {
        Some(json) => Ok(Some(serde_json::from_str(&json)?)),
        None => Ok(None),
    }
}

/// Sessions of one patient in insertion order
pub fn list_for_patient(conn: &Connection, patient: &PatientName) -> Result<Vec<SessionRecord>> {
    let mut stmt = conn.prepare(
        r#"
        SELECT payload FROM sessions
        WHERE patient = ?1
        ORDER BY seq
        "#,
    )?;
    let payloads = stmt
        .query_map([patient.as_str()], |row| row.get::<_, String>(0))?
        .collect::<std::result::Result<Vec<_>, _>>()?;

    decode_all(&payloads)
}

/// Every session, grouped by patient name, insertion order within a patient
pub fn list_all(conn: &Connection) -> Result<Vec<SessionRecord>> {
    let mut stmt = conn.prepare("SELECT payload FROM sessions ORDER BY patient, seq")?;
    let payloads = stmt
        .query_map([], |row| row.get::<_, String>(0))?
        .collect::<std::result::Result<Vec<_>, _>>()?;

    decode_all(&payloads)
}

pub fn delete(conn: &Connection, id: &SessionId) -> Result<bool> {
    let removed = conn.execute("DELETE FROM sessions WHERE id = ?1", params![id.to_string()])?;
    Ok(removed > 0)
}

pub fn count(conn: &Connection) -> Result<usize> {
    let count: i64 = conn.query_row("SELECT COUNT(*) FROM sessions", [], |row| row.get(0))?;
    Ok(count as usize)
}

fn decode_all(payloads: &[String]) -> Result<Vec<SessionRecord>> {
    payloads
        .iter()
        .map(|json| serde_json::from_str(json).map_err(Into::into))
        .collect()
}
