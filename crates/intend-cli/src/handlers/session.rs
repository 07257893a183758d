use super::patient_name;
use crate::presentation::Renderer;
use crate::presentation::views::{ImportView, Notice, SessionListView, SessionReportView};
use anyhow::{Context, Result};
use intend_runtime::{ImportOptions, Workspace};
use intend_types::{
    EmotionDistribution, MediaLinks, SessionId, SessionRecord, Transcript, VoiceNotes,
};
use std::path::{Path, PathBuf};

pub struct NewSession {
    pub patient: String,
    pub key: String,
    pub transcript: PathBuf,
    pub duration_secs: Option<u32>,
    pub emotions: Vec<String>,
    pub intensity: Option<String>,
    pub speech_rate: Option<String>,
    pub video: Option<String>,
    pub audio: Option<String>,
}

pub fn add(workspace: &Workspace, new: NewSession, renderer: &Renderer) -> Result<()> {
    let patient = patient_name(&new.patient)?;
    let text = std::fs::read_to_string(&new.transcript)
        .with_context(|| format!("failed to read {}", new.transcript.display()))?;

    let shares = new
        .emotions
        .iter()
        .map(|raw| EmotionDistribution::parse_pair(raw))
        .collect::<Result<Vec<_>, _>>()?;

    let mut session = SessionRecord::new(patient, new.key.trim(), Transcript::from_text(text));
    session.duration_secs = new.duration_secs;
    session.emotions = EmotionDistribution::new(shares)?;
    session.voice = VoiceNotes {
        intensity: new.intensity,
        speech_rate: new.speech_rate,
    };
    session.media = MediaLinks {
        video: new.video,
        audio: new.audio,
        transcript: Some(new.transcript.display().to_string()),
    };

    if session.date().is_none() {
        renderer.warn(format!(
            "session key '{}' is not a YYYY-MM-DD date; listings keep insertion order",
            session.key
        ));
    }

    let report = workspace.dashboard().record_session(&session)?;
    renderer.render(&SessionReportView::new(&report))
}

pub fn list(workspace: &Workspace, patient: &str, renderer: &Renderer) -> Result<()> {
    let patient = patient_name(patient)?;
    let sessions = workspace.dashboard().list_sessions(&patient)?;
    renderer.render(&SessionListView::new(&patient, &sessions))
}

pub fn show(workspace: &Workspace, id: &str, renderer: &Renderer) -> Result<()> {
    let id = resolve_id(workspace, id)?;
    let report = workspace.dashboard().session_report(&id)?;
    renderer.render(&SessionReportView::new(&report))
}

pub fn remove(workspace: &Workspace, id: &str, renderer: &Renderer) -> Result<()> {
    let id = resolve_id(workspace, id)?;
    workspace.dashboard().remove_session(&id)?;
    renderer.render(&Notice::new(format!("Removed session {}", id)))
}

pub fn import(
    workspace: &Workspace,
    patient: &str,
    dir: &Path,
    recursive: bool,
    renderer: &Renderer,
) -> Result<()> {
    let patient = patient_name(patient)?;
    let outcome = workspace
        .dashboard()
        .import_directory(&patient, dir, ImportOptions { recursive })?;

    for skipped in &outcome.skipped {
        renderer.warn(format!(
            "skipped {}: {}",
            skipped.path.display(),
            skipped.reason
        ));
    }
    renderer.render(&ImportView::new(patient.as_str(), &outcome))
}

/// Accept a full UUID or the 8-character prefix shown by `session list`
fn resolve_id(workspace: &Workspace, raw: &str) -> Result<SessionId> {
    if let Ok(id) = SessionId::parse(raw) {
        return Ok(id);
    }

    let prefix = raw.trim().to_lowercase();
    if prefix.is_empty() {
        anyhow::bail!("session id must not be empty");
    }

    let matches: Vec<SessionId> = workspace
        .store()
        .list_all_sessions()?
        .into_iter()
        .map(|s| s.id)
        .filter(|id| id.as_uuid().simple().to_string().starts_with(&prefix))
        .collect();

    match matches.as_slice() {
        [id] => Ok(*id),
        [] => anyhow::bail!("no session matches '{}'", raw),
        _ => anyhow::bail!("'{}' matches {} sessions; use more characters", raw, matches.len()),
    }
}
