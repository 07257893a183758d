use crate::aggregate;
use crate::matcher::LexiconMatcher;
use crate::tokenizer::tokenize;
use intend_types::{AnalysisResult, Lexicon, Transcript};
use rayon::prelude::*;

/// Length of the top-word list unless configured otherwise
pub const DEFAULT_TOP_N: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalyzerOptions {
    pub top_n: usize,
}

impl Default for AnalyzerOptions {
    fn default() -> Self {
        Self {
            top_n: DEFAULT_TOP_N,
        }
    }
}

/// Compiled lexicon plus options. Cheap to share by reference; holds no
/// per-call state.
#[derive(Debug, Clone)]
pub struct Analyzer {
    matcher: LexiconMatcher,
    options: AnalyzerOptions,
}

impl Analyzer {
    pub fn new(lexicon: &Lexicon) -> Self {
        Self::with_options(lexicon, AnalyzerOptions::default())
    }

    pub fn with_options(lexicon: &Lexicon, options: AnalyzerOptions) -> Self {
        Self {
            matcher: LexiconMatcher::compile(lexicon),
            options,
        }
    }

    pub fn options(&self) -> AnalyzerOptions {
        self.options
    }

    pub fn analyze(&self, text: &str) -> AnalysisResult {
        let tokens = tokenize(text);
        let total_words = tokens.len();

        let frequencies = aggregate::word_frequencies(&tokens);
        let top_words = aggregate::top_words(&frequencies, self.options.top_n);
        let category_counts = self.matcher.count(&tokens);
        let sentiment = aggregate::sentiment(&category_counts, total_words);
        let detected_symptoms = aggregate::detected_symptoms(&category_counts);

        AnalysisResult {
            total_words,
            distinct_words: frequencies.len(),
            frequencies,
            top_words,
            category_counts,
            detected_symptoms,
            sentiment,
            lexicon: self.matcher.stamp().clone(),
        }
    }

    pub fn analyze_transcript(&self, transcript: &Transcript) -> AnalysisResult {
        self.analyze(&transcript.text())
    }

    /// Analyze independent texts in parallel. Output order matches input.
    pub fn analyze_batch<S>(&self, texts: &[S]) -> Vec<AnalysisResult>
    where
        S: AsRef<str> + Sync,
    {
        texts
            .par_iter()
            .map(|text| self.analyze(text.as_ref()))
            .collect()
    }
}
