use intend_runtime::{ImportOutcome, InitResult, Overview};
use intend_types::SentimentLabel;
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

/// One-line confirmation for commands that only change state
#[derive(Serialize)]
pub struct Notice {
    pub message: String,
}

impl Notice {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}", self.message)
    }
}

#[derive(Serialize)]
pub struct InitView {
    pub config_path: PathBuf,
    pub db_path: PathBuf,
    pub created_config: bool,
    pub schema_version: i32,
    pub patient_count: usize,
    pub session_count: usize,
}

impl From<InitResult> for InitView {
    fn from(result: InitResult) -> Self {
        Self {
            config_path: result.config_path,
            db_path: result.db_path,
            created_config: result.created_config,
            schema_version: result.schema_version,
            patient_count: result.patient_count,
            session_count: result.session_count,
        }
    }
}

impl fmt::Display for InitView {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.created_config {
            writeln!(f, "Created config:  {}", self.config_path.display())?;
        } else {
            writeln!(f, "Kept config:     {}", self.config_path.display())?;
        }
        writeln!(
            f,
            "Database:        {} (schema v{})",
            self.db_path.display(),
            self.schema_version
        )?;
        writeln!(f, "Patients:        {}", self.patient_count)?;
        writeln!(f, "Sessions stored: {}", self.session_count)
    }
}

#[derive(Serialize)]
pub struct ImportView<'a> {
    pub patient: &'a str,
    pub imported: Vec<&'a str>,
    pub skipped: usize,
}

impl<'a> ImportView<'a> {
    pub fn new(patient: &'a str, outcome: &'a ImportOutcome) -> Self {
        Self {
            patient,
            imported: outcome.imported.iter().map(|s| s.key.as_str()).collect(),
            skipped: outcome.skipped.len(),
        }
    }
}

impl fmt::Display for ImportView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(
            f,
            "Imported {} session(s) for {} ({} skipped)",
            self.imported.len(),
            self.patient,
            self.skipped
        )?;
        for key in &self.imported {
            writeln!(f, "  {}", key)?;
        }
        Ok(())
    }
}

#[derive(Serialize)]
pub struct ExportView {
    pub path: PathBuf,
    pub rows: usize,
}

impl fmt::Display for ExportView {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Exported {} session(s) to {}", self.rows, self.path.display())
    }
}

#[derive(Serialize)]
#[serde(transparent)]
pub struct OverviewView {
    overview: Overview,
}

impl OverviewView {
    pub fn new(overview: Overview) -> Self {
        Self { overview }
    }
}

impl fmt::Display for OverviewView {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let o = &self.overview;
        writeln!(f, "Patients: {}", o.patients)?;
        writeln!(f, "Sessions: {}", o.sessions)?;
        for label in SentimentLabel::all() {
            writeln!(f, "  {:<8} {:>4}", label.as_str(), o.count(label))?;
        }
        Ok(())
    }
}
