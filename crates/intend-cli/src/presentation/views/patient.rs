use crate::presentation::style;
use intend_runtime::PatientSummary;
use intend_types::{Demographics, Patient};
use serde::Serialize;
use std::fmt;

#[derive(Serialize)]
#[serde(transparent)]
pub struct PatientListView<'a> {
    patients: &'a [Patient],
}

impl<'a> PatientListView<'a> {
    pub fn new(patients: &'a [Patient]) -> Self {
        Self { patients }
    }
}

impl fmt::Display for PatientListView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.patients.is_empty() {
            return writeln!(f, "No patients registered.");
        }
        for patient in self.patients {
            let details = describe(&patient.demographics);
            if details.is_empty() {
                writeln!(f, "{}", patient.name)?;
            } else {
                writeln!(f, "{:<20} {}", patient.name, style::dim(&details))?;
            }
        }
        Ok(())
    }
}

fn describe(demographics: &Demographics) -> String {
    let mut parts = Vec::new();
    if let Some(age) = demographics.age {
        parts.push(format!("{} y", age));
    }
    if let Some(gender) = &demographics.gender {
        parts.push(gender.clone());
    }
    if let Some(occupation) = &demographics.occupation {
        parts.push(occupation.clone());
    }
    if let Some(started_on) = demographics.started_on {
        parts.push(format!("since {}", started_on));
    }
    parts.join(", ")
}

#[derive(Serialize)]
#[serde(transparent)]
pub struct PatientSummaryView<'a> {
    summary: &'a PatientSummary,
}

impl<'a> PatientSummaryView<'a> {
    pub fn new(summary: &'a PatientSummary) -> Self {
        Self { summary }
    }
}

impl fmt::Display for PatientSummaryView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let summary = self.summary;
        writeln!(f, "{}", style::heading(summary.patient.name.as_str()))?;

        let details = describe(&summary.patient.demographics);
        if !details.is_empty() {
            writeln!(f, "{}", details)?;
        }
        writeln!(f, "Sessions: {}", summary.session_count)?;

        if let Some(key) = &summary.latest_key {
            let emotion = summary
                .latest_dominant_emotion
                .as_deref()
                .unwrap_or("-");
            let sentiment = summary
                .latest_sentiment
                .map(style::label)
                .unwrap_or_else(|| "-".to_string());
            writeln!(f, "Latest:   {} (emotion {}, sentiment {})", key, emotion, sentiment)?;
        }

        if !summary.trend.is_empty() {
            writeln!(f)?;
            writeln!(f, "{}", style::heading("Sentiment trend"))?;
            for point in &summary.trend {
                writeln!(
                    f,
                    "  {:<12} {:>6}  {}",
                    point.key,
                    style::score(point.score),
                    style::label(point.label)
                )?;
            }
        }
        Ok(())
    }
}
