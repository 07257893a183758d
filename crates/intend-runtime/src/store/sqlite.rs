use super::SessionStore;
use crate::{Error, Result};
use intend_index::Database;
use intend_types::{Patient, PatientName, SessionId, SessionRecord};

impl SessionStore for Database {
    fn upsert_patient(&self, patient: &Patient) -> Result<()> {
        Ok(Database::upsert_patient(self, patient)?)
    }

    fn get_patient(&self, name: &PatientName) -> Result<Option<Patient>> {
        Ok(Database::get_patient(self, name)?)
    }

    fn list_patients(&self) -> Result<Vec<Patient>> {
        Ok(Database::list_patients(self)?)
    }

    fn insert_session(&self, session: &SessionRecord) -> Result<()> {
        if Database::get_patient(self, &session.patient)?.is_none() {
            return Err(Error::UnknownPatient(session.patient.to_string()));
        }
        Database::insert_session(self, session)?;
        Ok(())
    }

    fn get_session(&self, id: &SessionId) -> Result<Option<SessionRecord>> {
        Ok(Database::get_session(self, id)?)
    }

    fn list_sessions(&self, patient: &PatientName) -> Result<Vec<SessionRecord>> {
        Ok(Database::list_sessions(self, patient)?)
    }

    fn list_all_sessions(&self) -> Result<Vec<SessionRecord>> {
        Ok(Database::list_all_sessions(self)?)
    }

    fn delete_session(&self, id: &SessionId) -> Result<bool> {
        Ok(Database::delete_session(self, id)?)
    }

    fn count_sessions(&self) -> Result<usize> {
        Ok(Database::count_sessions(self)?)
    }
}
