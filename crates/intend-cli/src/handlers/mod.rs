pub mod analyze;
pub mod export;
pub mod init;
pub mod lexicon;
pub mod overview;
pub mod patient;
pub mod session;

use anyhow::{Context, Result};
use intend_types::PatientName;

pub(crate) fn patient_name(raw: &str) -> Result<PatientName> {
    PatientName::parse(raw).with_context(|| format!("invalid patient name '{}'", raw))
}
