// Session storage abstraction
// Services receive a `&dyn SessionStore`; nothing reaches for a global registry

mod memory;
mod sqlite;

pub use memory::MemoryStore;

use crate::Result;
use intend_types::{Patient, PatientName, SessionId, SessionRecord};

/// Key-value registry of patients and their sessions.
///
/// Implementations must return a patient's sessions in insertion order
/// and reject sessions whose patient is not registered with
/// `Error::UnknownPatient`.
pub trait SessionStore {
    fn upsert_patient(&self, patient: &Patient) -> Result<()>;
    fn get_patient(&self, name: &PatientName) -> Result<Option<Patient>>;
    /// All patients, alphabetical by name
    fn list_patients(&self) -> Result<Vec<Patient>>;

    fn insert_session(&self, session: &SessionRecord) -> Result<()>;
    fn get_session(&self, id: &SessionId) -> Result<Option<SessionRecord>>;
    fn list_sessions(&self, patient: &PatientName) -> Result<Vec<SessionRecord>>;
    fn list_all_sessions(&self) -> Result<Vec<SessionRecord>>;
    /// Returns false when no such session existed
    fn delete_session(&self, id: &SessionId) -> Result<bool>;
    fn count_sessions(&self) -> Result<usize>;
}
