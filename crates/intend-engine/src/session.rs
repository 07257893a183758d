use crate::analyzer::Analyzer;
use intend_types::{SentimentLabel, SessionRecord};
use serde::{Deserialize, Serialize};

/// Sessions newest first by date key.
///
/// Only applies when every key parses as `YYYY-MM-DD`; a single free-form
/// key keeps the original (insertion) order for the whole list.
pub fn order_newest_first(sessions: &[SessionRecord]) -> Vec<&SessionRecord> {
    let dates: Option<Vec<_>> = sessions.iter().map(|s| s.date()).collect();

    let mut ordered: Vec<&SessionRecord> = sessions.iter().collect();
    if let Some(dates) = dates {
        let mut keyed: Vec<_> = dates.into_iter().zip(ordered).collect();
        keyed.sort_by(|a, b| b.0.cmp(&a.0));
        ordered = keyed.into_iter().map(|(_, s)| s).collect();
    }
    ordered
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub key: String,
    pub score: f64,
    pub label: SentimentLabel,
    pub total_words: usize,
}

/// Sentiment per session, oldest first
pub fn sentiment_trend(analyzer: &Analyzer, sessions: &[SessionRecord]) -> Vec<TrendPoint> {
    let mut ordered = order_newest_first(sessions);
    ordered.reverse();

    let texts: Vec<String> = ordered.iter().map(|s| s.transcript.text()).collect();
    analyzer
        .analyze_batch(&texts)
        .into_iter()
        .zip(ordered)
        .map(|(result, session)| TrendPoint {
            key: session.key.clone(),
            score: result.sentiment.score,
            label: result.sentiment.label,
            total_words: result.total_words,
        })
        .collect()
}
