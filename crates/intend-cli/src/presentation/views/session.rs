use super::analysis::write_analysis;
use crate::presentation::style;
use intend_runtime::{SessionListing, SessionReport};
use intend_types::PatientName;
use serde::Serialize;
use std::fmt;

#[derive(Serialize)]
pub struct SessionListView<'a> {
    patient: &'a PatientName,
    sessions: &'a [SessionListing],
}

impl<'a> SessionListView<'a> {
    pub fn new(patient: &'a PatientName, sessions: &'a [SessionListing]) -> Self {
        Self { patient, sessions }
    }
}

impl fmt::Display for SessionListView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.sessions.is_empty() {
            return writeln!(f, "No sessions recorded for {}.", self.patient);
        }

        writeln!(
            f,
            "{}",
            style::heading(&format!(
                "{:<10} {:<12} {:>6} {:>6}  {:<9} {:<10} {}",
                "ID", "KEY", "WORDS", "SCORE", "LABEL", "EMOTION", "TOP SYMPTOM"
            ))
        )?;
        for session in self.sessions {
            writeln!(
                f,
                "{:<10} {:<12} {:>6} {:>6}  {:<9} {:<10} {}",
                session.id.short(),
                session.key,
                session.total_words,
                style::score(session.sentiment_score),
                session.sentiment_label.as_str(),
                session.dominant_emotion.as_deref().unwrap_or("-"),
                session.top_symptom.as_deref().unwrap_or("-"),
            )?;
        }
        Ok(())
    }
}

#[derive(Serialize)]
#[serde(transparent)]
pub struct SessionReportView<'a> {
    report: &'a SessionReport,
}

impl<'a> SessionReportView<'a> {
    pub fn new(report: &'a SessionReport) -> Self {
        Self { report }
    }
}

impl fmt::Display for SessionReportView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let report = self.report;
        writeln!(
            f,
            "{} {} / {}",
            style::heading("Session"),
            report.patient,
            report.key
        )?;
        writeln!(f, "{}", style::dim(&report.id.to_string()))?;

        if let Some(secs) = report.duration_secs {
            writeln!(f, "Duration:  {}m {:02}s", secs / 60, secs % 60)?;
        }
        if !report.emotions.is_empty() {
            let shares: Vec<String> = report
                .emotions
                .iter()
                .map(|(name, share)| format!("{} {:.0}%", name, share * 100.0))
                .collect();
            writeln!(
                f,
                "Emotion:   {} [{}]",
                report.dominant_emotion.as_deref().unwrap_or("-"),
                shares.join(", ")
            )?;
        }
        if let Some(intensity) = &report.voice.intensity {
            writeln!(f, "Intensity: {}", intensity)?;
        }
        if let Some(rate) = &report.voice.speech_rate {
            writeln!(f, "Speech:    {}", rate)?;
        }
        for (kind, link) in [
            ("Video", &report.media.video),
            ("Audio", &report.media.audio),
            ("Text", &report.media.transcript),
        ] {
            if let Some(link) = link {
                writeln!(f, "{:<10} {}", format!("{}:", kind), link)?;
            }
        }

        writeln!(f)?;
        write_analysis(f, &report.analysis)
    }
}
