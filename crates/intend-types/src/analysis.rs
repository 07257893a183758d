use crate::lexicon::LexiconStamp;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Scores above this are labelled Positive
pub const POSITIVE_THRESHOLD: f64 = 0.1;

/// Scores below this are labelled Negative
pub const NEGATIVE_THRESHOLD: f64 = -0.1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SentimentLabel {
    Positive,
    Neutral,
    Negative,
}

impl SentimentLabel {
    pub fn from_score(score: f64) -> Self {
        if score > POSITIVE_THRESHOLD {
            SentimentLabel::Positive
        } else if score < NEGATIVE_THRESHOLD {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "Positive",
            SentimentLabel::Neutral => "Neutral",
            SentimentLabel::Negative => "Negative",
        }
    }

    pub fn all() -> [Self; 3] {
        [
            SentimentLabel::Positive,
            SentimentLabel::Neutral,
            SentimentLabel::Negative,
        ]
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SentimentLabel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "positive" => Ok(SentimentLabel::Positive),
            "neutral" => Ok(SentimentLabel::Neutral),
            "negative" => Ok(SentimentLabel::Negative),
            _ => Err(format!("Unknown sentiment label: {}", s)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sentiment {
    /// (positive - negative) / max(total_words, 1), within [-1, 1]
    pub score: f64,
    pub label: SentimentLabel,
    pub positive: usize,
    pub negative: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordCount {
    pub word: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub category: String,
    pub count: usize,
}

/// Outcome of analyzing one transcript against one lexicon
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub total_words: usize,
    pub distinct_words: usize,
    /// Every distinct token in first-occurrence order
    pub frequencies: Vec<WordCount>,
    /// Highest counts first, ties in first-occurrence order
    pub top_words: Vec<WordCount>,
    /// One entry per lexicon category, zero counts included
    pub category_counts: BTreeMap<String, usize>,
    /// Non-polarity categories with count > 0, by count desc then name
    pub detected_symptoms: Vec<CategoryCount>,
    pub sentiment: Sentiment,
    pub lexicon: LexiconStamp,
}

impl AnalysisResult {
    pub fn category_count(&self, category: &str) -> usize {
        self.category_counts.get(category).copied().unwrap_or(0)
    }

    pub fn is_detected(&self, category: &str) -> bool {
        self.detected_symptoms
            .iter()
            .any(|c| c.category == category)
    }

    pub fn top_word(&self) -> Option<&WordCount> {
        self.top_words.first()
    }

    pub fn symptom_names(&self) -> Vec<&str> {
        self.detected_symptoms
            .iter()
            .map(|c| c.category.as_str())
            .collect()
    }
}
