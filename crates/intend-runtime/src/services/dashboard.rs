use crate::store::SessionStore;
use crate::{Error, Result};
use intend_engine::{Analyzer, TrendPoint, order_newest_first, sentiment_trend};
use intend_types::{
    AnalysisResult, EmotionDistribution, MediaLinks, Patient, PatientName, SentimentLabel,
    SessionId, SessionRecord, VoiceNotes,
};
use serde::Serialize;
use std::collections::HashSet;

/// Everything the clinician sees for one session
#[derive(Debug, Clone, Serialize)]
pub struct SessionReport {
    pub id: SessionId,
    pub patient: PatientName,
    pub key: String,
    pub duration_secs: Option<u32>,
    pub dominant_emotion: Option<String>,
    pub emotions: EmotionDistribution,
    pub voice: VoiceNotes,
    pub media: MediaLinks,
    pub analysis: AnalysisResult,
}

/// One line of a patient's session list
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionListing {
    pub id: SessionId,
    pub key: String,
    pub dominant_emotion: Option<String>,
    pub total_words: usize,
    pub sentiment_score: f64,
    pub sentiment_label: SentimentLabel,
    pub top_symptom: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PatientSummary {
    pub patient: Patient,
    pub session_count: usize,
    pub latest_key: Option<String>,
    pub latest_dominant_emotion: Option<String>,
    pub latest_sentiment: Option<SentimentLabel>,
    /// Newest first
    pub sessions: Vec<SessionListing>,
    /// Oldest first
    pub trend: Vec<TrendPoint>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Overview {
    pub patients: usize,
    pub sessions: usize,
    pub positive: usize,
    pub neutral: usize,
    pub negative: usize,
}

impl Overview {
    pub fn count(&self, label: SentimentLabel) -> usize {
        match label {
            SentimentLabel::Positive => self.positive,
            SentimentLabel::Neutral => self.neutral,
            SentimentLabel::Negative => self.negative,
        }
    }
}

/// Ingestion -> store -> analyzer -> report, over an injected store
pub struct DashboardService<'a> {
    store: &'a dyn SessionStore,
    analyzer: &'a Analyzer,
}

impl<'a> DashboardService<'a> {
    pub fn new(store: &'a dyn SessionStore, analyzer: &'a Analyzer) -> Self {
        Self { store, analyzer }
    }

    pub fn analyzer(&self) -> &Analyzer {
        self.analyzer
    }

    pub fn add_patient(&self, patient: &Patient) -> Result<()> {
        self.store.upsert_patient(patient)
    }

    pub fn patient(&self, name: &PatientName) -> Result<Option<Patient>> {
        self.store.get_patient(name)
    }

    pub fn patients(&self) -> Result<Vec<Patient>> {
        self.store.list_patients()
    }

    pub fn record_session(&self, session: &SessionRecord) -> Result<SessionReport> {
        self.store.insert_session(session)?;
        Ok(self.report_for(session))
    }

    /// Keys already recorded for `patient`
    pub(crate) fn session_keys(&self, patient: &PatientName) -> Result<HashSet<String>> {
        Ok(self
            .store
            .list_sessions(patient)?
            .into_iter()
            .map(|session| session.key)
            .collect())
    }

    pub fn session_report(&self, id: &SessionId) -> Result<SessionReport> {
        let session = self
            .store
            .get_session(id)?
            .ok_or_else(|| Error::NotFound(format!("session {}", id)))?;
        Ok(self.report_for(&session))
    }

    pub fn remove_session(&self, id: &SessionId) -> Result<()> {
        if !self.store.delete_session(id)? {
            return Err(Error::NotFound(format!("session {}", id)));
        }
        Ok(())
    }

    /// A patient's sessions, newest first (insertion order when keys
    /// are not all dates)
    pub fn list_sessions(&self, patient: &PatientName) -> Result<Vec<SessionListing>> {
        self.require_patient(patient)?;
        let sessions = self.store.list_sessions(patient)?;
        Ok(self.listings(&sessions))
    }

    pub fn patient_summary(&self, name: &PatientName) -> Result<PatientSummary> {
        let patient = self.require_patient(name)?;
        let sessions = self.store.list_sessions(name)?;
        let listings = self.listings(&sessions);
        let trend = sentiment_trend(self.analyzer, &sessions);

        let latest = listings.first();
        Ok(PatientSummary {
            patient,
            session_count: sessions.len(),
            latest_key: latest.map(|l| l.key.clone()),
            latest_dominant_emotion: latest.and_then(|l| l.dominant_emotion.clone()),
            latest_sentiment: latest.map(|l| l.sentiment_label),
            sessions: listings,
            trend,
        })
    }

    pub fn overview(&self) -> Result<Overview> {
        let patients = self.store.list_patients()?.len();
        let sessions = self.store.list_all_sessions()?;

        let texts: Vec<String> = sessions.iter().map(|s| s.transcript.text()).collect();
        let mut overview = Overview {
            patients,
            sessions: sessions.len(),
            ..Default::default()
        };
        for result in self.analyzer.analyze_batch(&texts) {
            match result.sentiment.label {
                SentimentLabel::Positive => overview.positive += 1,
                SentimentLabel::Neutral => overview.neutral += 1,
                SentimentLabel::Negative => overview.negative += 1,
            }
        }
        Ok(overview)
    }

    /// Every stored session with its analysis, grouped by patient
    pub fn all_reports(&self) -> Result<Vec<SessionReport>> {
        let sessions = self.store.list_all_sessions()?;
        let texts: Vec<String> = sessions.iter().map(|s| s.transcript.text()).collect();
        let results = self.analyzer.analyze_batch(&texts);

        Ok(sessions
            .into_iter()
            .zip(results)
            .map(|(session, analysis)| build_report(session, analysis))
            .collect())
    }

    fn require_patient(&self, name: &PatientName) -> Result<Patient> {
        self.store
            .get_patient(name)?
            .ok_or_else(|| Error::UnknownPatient(name.to_string()))
    }

    fn report_for(&self, session: &SessionRecord) -> SessionReport {
        let analysis = self.analyzer.analyze_transcript(&session.transcript);
        build_report(session.clone(), analysis)
    }

    fn listings(&self, sessions: &[SessionRecord]) -> Vec<SessionListing> {
        let ordered = order_newest_first(sessions);
        let texts: Vec<String> = ordered.iter().map(|s| s.transcript.text()).collect();

        self.analyzer
            .analyze_batch(&texts)
            .into_iter()
            .zip(ordered)
            .map(|(analysis, session)| SessionListing {
                id: session.id,
                key: session.key.clone(),
                dominant_emotion: session.dominant_emotion().map(str::to_string),
                total_words: analysis.total_words,
                sentiment_score: analysis.sentiment.score,
                sentiment_label: analysis.sentiment.label,
                top_symptom: analysis
                    .detected_symptoms
                    .first()
                    .map(|c| c.category.clone()),
            })
            .collect()
    }
}

fn build_report(session: SessionRecord, analysis: AnalysisResult) -> SessionReport {
    let dominant_emotion = session.dominant_emotion().map(str::to_string);
    SessionReport {
        id: session.id,
        patient: session.patient,
        key: session.key,
        duration_secs: session.duration_secs,
        dominant_emotion,
        emotions: session.emotions,
        voice: session.voice,
        media: session.media,
        analysis,
    }
}
