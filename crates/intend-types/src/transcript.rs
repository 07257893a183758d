use serde::{Deserialize, Serialize};

/// One captured stretch of speech, optionally anchored to an offset
/// (seconds from session start).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset_secs: Option<f64>,
    pub text: String,
}

impl Segment {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            offset_secs: None,
            text: text.into(),
        }
    }

    pub fn at(offset_secs: f64, text: impl Into<String>) -> Self {
        Self {
            offset_secs: Some(offset_secs),
            text: text.into(),
        }
    }
}

/// Ordered transcript of a session.
///
/// Segments are fixed at construction; analysis works on the
/// concatenation returned by [`Transcript::text`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Transcript {
    segments: Vec<Segment>,
}

impl Transcript {
    pub fn new(segments: Vec<Segment>) -> Self {
        Self { segments }
    }

    /// Single-segment transcript from a text blob
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            segments: vec![Segment::new(text)],
        }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn is_empty(&self) -> bool {
        self.segments.iter().all(|s| s.text.trim().is_empty())
    }

    /// Concatenate all segments, separated by a single space
    pub fn text(&self) -> String {
        self.segments
            .iter()
            .map(|s| s.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl From<&str> for Transcript {
    fn from(text: &str) -> Self {
        Self::from_text(text)
    }
}

impl From<String> for Transcript {
    fn from(text: String) -> Self {
        Self::from_text(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_joins_segments_with_space() {
        let transcript = Transcript::new(vec![
            Segment::at(0.0, "saya capek"),
            Segment::at(4.5, "susah"),
            Segment::new("tidur"),
        ]);

        assert_eq!(transcript.text(), "saya capek susah tidur");
        assert_eq!(transcript.segments().len(), 3);
    }

    #[test]
    fn test_blank_segments_count_as_empty() {
        let transcript = Transcript::new(vec![Segment::new("  "), Segment::new("\n")]);
        assert!(transcript.is_empty());
        assert!(Transcript::default().is_empty());
        assert!(!Transcript::from("halo").is_empty());
    }

    #[test]
    fn test_serializes_as_segment_array() {
        let transcript = Transcript::new(vec![Segment::new("halo")]);
        let json = serde_json::to_string(&transcript).unwrap();
        assert_eq!(json, r#"[{"text":"halo"}]"#);
    }
}
