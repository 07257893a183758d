// Token rules live in intend-types so lexicon entries and transcripts are
// normalized identically.
pub use intend_types::text::{normalize_token, tokenize};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Analyzer;
    use intend_types::Lexicon;

    #[test]
    fn test_symbol_wrapped_words_match_lexicon() {
        let lexicon = Lexicon::new("t", [("fatigue", vec!["capek", "lelah"])]);
        let result = Analyzer::new(&lexicon).analyze("capek~ <lelah>");

        assert_eq!(tokenize("capek~ <lelah>"), vec!["capek", "lelah"]);
        assert_eq!(result.category_count("fatigue"), 2);
    }
}
