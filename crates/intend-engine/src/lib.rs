// Engine module - Pure transcript analysis (tokenize, match, aggregate)
// No I/O and no shared mutable state: every call is a function of (text, lexicon)

pub mod aggregate;
pub mod analyzer;
pub mod matcher;
pub mod session;
pub mod tokenizer;

pub use analyzer::{Analyzer, AnalyzerOptions, DEFAULT_TOP_N};
pub use matcher::LexiconMatcher;
pub use session::{TrendPoint, order_newest_first, sentiment_trend};
pub use tokenizer::{normalize_token, tokenize};

use intend_types::{AnalysisResult, Lexicon, SentimentLabel};

// Façade API - Stable public interface for runtime and CLI layers

/// Analyze one transcript text with default options
pub fn analyze(text: &str, lexicon: &Lexicon) -> AnalysisResult {
    Analyzer::new(lexicon).analyze(text)
}

/// Sentiment score alone, in [-1, 1]
pub fn sentiment_score(text: &str, lexicon: &Lexicon) -> f64 {
    analyze(text, lexicon).sentiment.score
}

/// Sentiment label alone
pub fn sentiment_category(text: &str, lexicon: &Lexicon) -> SentimentLabel {
    analyze(text, lexicon).sentiment.label
}
