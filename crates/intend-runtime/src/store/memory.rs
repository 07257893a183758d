use super::SessionStore;
use crate::{Error, Result};
use intend_types::{Patient, PatientName, SessionId, SessionRecord};
use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

#[derive(Debug, Default)]
struct State {
    patients: BTreeMap<PatientName, Patient>,
    sessions: Vec<SessionRecord>,
}

/// Process-local store, used for tests and one-shot analysis runs
#[derive(Debug, Default)]
pub struct MemoryStore {
    state: RwLock<State>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, State>> {
        self.state
            .read()
            .map_err(|_| Error::InvalidOperation("session store lock poisoned".to_string()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, State>> {
        self.state
            .write()
            .map_err(|_| Error::InvalidOperation("session store lock poisoned".to_string()))
    }
}

impl SessionStore for MemoryStore {
    fn upsert_patient(&self, patient: &Patient) -> Result<()> {
        self.write()?
            .patients
            .insert(patient.name.clone(), patient.clone());
        Ok(())
    }

    fn get_patient(&self, name: &PatientName) -> Result<Option<Patient>> {
        Ok(self.read()?.patients.get(name).cloned())
    }

    fn list_patients(&self) -> Result<Vec<Patient>> {
        Ok(self.read()?.patients.values().cloned().collect())
    }

    fn insert_session(&self, session: &SessionRecord) -> Result<()> {
        let mut state = self.write()?;
        if !state.patients.contains_key(&session.patient) {
            return Err(Error::UnknownPatient(session.patient.to_string()));
        }
        if state.sessions.iter().any(|s| s.id == session.id) {
            return Err(Error::InvalidOperation(format!(
                "session {} already exists",
                session.id
            )));
        }
        state.sessions.push(session.clone());
        Ok(())
    }

    fn get_session(&self, id: &SessionId) -> Result<Option<SessionRecord>> {
        Ok(self.read()?.sessions.iter().find(|s| &s.id == id).cloned())
    }

    fn list_sessions(&self, patient: &PatientName) -> Result<Vec<SessionRecord>> {
        Ok(self
            .read()?
            .sessions
            .iter()
            .filter(|s| &s.patient == patient)
            .cloned()
            .collect())
    }

    fn list_all_sessions(&self) -> Result<Vec<SessionRecord>> {
        let state = self.read()?;
        let mut sessions = state.sessions.clone();
        // Match the SQLite store: grouped by patient, insertion order within
        sessions.sort_by(|a, b| a.patient.cmp(&b.patient));
        Ok(sessions)
    }

    fn delete_session(&self, id: &SessionId) -> Result<bool> {
        let mut state = self.write()?;
        let before = state.sessions.len();
        state.sessions.retain(|s| &s.id != id);
        Ok(state.sessions.len() != before)
    }

    fn count_sessions(&self) -> Result<usize> {
        Ok(self.read()?.sessions.len())
    }
}
