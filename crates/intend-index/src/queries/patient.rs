use intend_types::{Patient, PatientName};
use rusqlite::{Connection, OptionalExtension, params};

use crate::Result;

pub fn upsert(conn: &Connection, patient: &Patient) -> Result<()> {
    let payload = serde_json::to_string(patient)?;
    conn.execute(
        r#"
        INSERT INTO patients (name, payload)
        VALUES (?1, ?2)
        ON CONFLICT(name) DO UPDATE SET payload = ?2
        "#,
        params![patient.name.as_str(), payload],
    )?;
    Ok(())
}

pub fn get(conn: &Connection, name: &PatientName) -> Result<Option<Patient>> {
    let payload: Option<String> = conn
        .query_row(
            "SELECT payload FROM patients WHERE name = ?1",
            [name.as_str()],
            |row| row.get(0),
        )
        .optional()?;

    match payload {
        Some(json) => Ok(Some(serde_json::from_str(&json)?)),
        None => Ok(None),
    }
}

pub fn list(conn: &Connection) -> Result<Vec<Patient>> {
    let mut stmt = conn.prepare("SELECT payload FROM patients ORDER BY name")?;
    let payloads = stmt
        .query_map([], |row| row.get::<_, String>(0))?
        .collect::<std::result::Result<Vec<_>, _>>()?;

    payloads
        .iter()
        .map(|json| serde_json::from_str(json).map_err(Into::into))
        .collect()
}

pub fn count(conn: &Connection) -> Result<usize> {
    let count: i64 = conn.query_row("SELECT COUNT(*) FROM patients", [], |row| row.get(0))?;
    Ok(count as usize)
}
