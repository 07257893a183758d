use crate::{EmotionDistribution, PatientName, Result, Transcript};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Date format used for session keys
pub const SESSION_DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(Uuid);

impl SessionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn parse(raw: &str) -> Result<Self> {
        Ok(Self(Uuid::parse_str(raw.trim())?))
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    /// First 8 hex digits, for compact listings
    pub fn short(&self) -> String {
        self.0.simple().to_string()[..8].to_string()
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for SessionId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoiceNotes {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intensity: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speech_rate: Option<String>,
}

impl VoiceNotes {
    pub fn is_empty(&self) -> bool {
        self.intensity.is_none() && self.speech_rate.is_none()
    }
}

/// Links to the raw recordings kept outside this system
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaLinks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transcript: Option<String>,
}

impl MediaLinks {
    pub fn is_empty(&self) -> bool {
        self.video.is_none() && self.audio.is_none() && self.transcript.is_none()
    }
}

/// One recorded interaction between a patient and the device
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionRecord {
    pub id: SessionId,
    pub patient: PatientName,
    /// Usually an ISO date (`2025-10-17`), but free-form keys are accepted
    pub key: String,
    pub transcript: Transcript,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_secs: Option<u32>,
    #[serde(default, skip_serializing_if = "EmotionDistribution::is_empty")]
    pub emotions: EmotionDistribution,
    #[serde(default, skip_serializing_if = "VoiceNotes::is_empty")]
    pub voice: VoiceNotes,
    #[serde(default, skip_serializing_if = "MediaLinks::is_empty")]
    pub media: MediaLinks,
}

impl SessionRecord {
    pub fn new(patient: PatientName, key: impl Into<String>, transcript: Transcript) -> Self {
        Self {
            id: SessionId::new(),
            patient,
            key: key.into(),
            transcript,
            duration_secs: None,
            emotions: EmotionDistribution::default(),
            voice: VoiceNotes::default(),
            media: MediaLinks::default(),
        }
    }

    /// The session key read as a calendar date, if it is one
    pub fn date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.key.trim(), SESSION_DATE_FORMAT).ok()
    }

    pub fn dominant_emotion(&self) -> Option<&str> {
        self.emotions.dominant().map(|(name, _)| name)
    }
}
