use super::dashboard::{DashboardService, SessionReport};
use crate::Result;
use serde::Serialize;
use std::io::Write;
use std::path::Path;

/// One CSV row per stored session
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportRow {
    pub patient: String,
    pub session_key: String,
    pub session_id: String,
    pub total_words: usize,
    pub sentiment_score: f64,
    pub sentiment_label: String,
    /// Symptom categories joined with `;`
    pub detected_symptoms: String,
    pub dominant_emotion: String,
}

impl From<&SessionReport> for ExportRow {
    fn from(report: &SessionReport) -> Self {
        Self {
            patient: report.patient.to_string(),
            session_key: report.key.clone(),
            session_id: report.id.to_string(),
            total_words: report.analysis.total_words,
            sentiment_score: report.analysis.sentiment.score,
            sentiment_label: report.analysis.sentiment.label.to_string(),
            detected_symptoms: report.analysis.symptom_names().join(";"),
            dominant_emotion: report.dominant_emotion.clone().unwrap_or_default(),
        }
    }
}

impl DashboardService<'_> {
    pub fn export_rows(&self) -> Result<Vec<ExportRow>> {
        Ok(self.all_reports()?.iter().map(ExportRow::from).collect())
    }

    /// Write all sessions as CSV; returns the number of rows written
    pub fn export_csv<W: Write>(&self, writer: W) -> Result<usize> {
        let rows = self.export_rows()?;
        let mut csv = csv::Writer::from_writer(writer);
        for row in &rows {
            csv.serialize(row)?;
        }
        csv.flush()?;
        Ok(rows.len())
    }

    pub fn export_csv_file(&self, path: &Path) -> Result<usize> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        let file = std::fs::File::create(path)?;
        self.export_csv(std::io::BufWriter::new(file))
    }
}
