use crate::presentation::style;
use intend_types::AnalysisResult;
use serde::Serialize;
use std::fmt;

#[derive(Serialize)]
#[serde(transparent)]
pub struct AnalysisView<'a> {
    result: &'a AnalysisResult,
}

impl<'a> AnalysisView<'a> {
    pub fn new(result: &'a AnalysisResult) -> Self {
        Self { result }
    }
}

/// Body shared by `analyze` and `session show`
pub(crate) fn write_analysis(f: &mut fmt::Formatter, result: &AnalysisResult) -> fmt::Result {
    let sentiment = &result.sentiment;
    writeln!(
        f,
        "Words:     {} ({} distinct)",
        result.total_words, result.distinct_words
    )?;
    writeln!(
        f,
        "Sentiment: {} {} (positive {}, negative {})",
        style::score(sentiment.score),
        style::label(sentiment.label),
        sentiment.positive,
        sentiment.negative
    )?;

    if result.detected_symptoms.is_empty() {
        writeln!(f, "Symptoms:  none detected")?;
    } else {
        let symptoms: Vec<String> = result
            .detected_symptoms
            .iter()
            .map(|c| format!("{} ({})", c.category, c.count))
            .collect();
        writeln!(f, "Symptoms:  {}", symptoms.join(", "))?;
    }

    if !result.top_words.is_empty() {
        writeln!(f)?;
        writeln!(f, "{}", style::heading("Top words"))?;
        for (rank, word) in result.top_words.iter().enumerate() {
            writeln!(f, "  {:>2}. {:<20} {}", rank + 1, word.word, word.count)?;
        }
    }

    writeln!(f)?;
    writeln!(f, "{}", style::heading("Categories"))?;
    for (category, count) in &result.category_counts {
        writeln!(f, "  {:<20} {}", category, count)?;
    }

    writeln!(
        f,
        "{}",
        style::dim(&format!(
            "\nlexicon {} ({})",
            result.lexicon.version,
            short_fingerprint(&result.lexicon.fingerprint)
        ))
    )
}

pub(crate) fn short_fingerprint(fingerprint: &str) -> &str {
    fingerprint.get(..12).unwrap_or(fingerprint)
}

impl fmt::Display for AnalysisView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write_analysis(f, self.result)
    }
}
