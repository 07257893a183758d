use intend_types::{Lexicon, LexiconStamp};
use std::collections::{BTreeMap, HashMap};

/// A lexicon compiled for matching.
///
/// Single-word entries go into a token lookup table; multi-word entries
/// are kept as phrases and searched in the space-joined token stream,
/// since a phrase like "susah tidur" spans several tokens.
///
/// Immutable after compilation, so one matcher can serve any number of
/// threads.
#[derive(Debug, Clone)]
pub struct LexiconMatcher {
    categories: Vec<String>,
    words: HashMap<String, Vec<usize>>,
    phrases: Vec<(String, usize)>,
    stamp: LexiconStamp,
}

impl LexiconMatcher {
    pub fn compile(lexicon: &Lexicon) -> Self {
        let mut categories = Vec::with_capacity(lexicon.len());
        let mut words: HashMap<String, Vec<usize>> = HashMap::new();
        let mut phrases = Vec::new();

        for (idx, (name, entries)) in lexicon.categories().iter().enumerate() {
            categories.push(name.clone());

            // Lexicon entries are already token-normalized: one token is a
            // word entry, several are a phrase.
            for entry in entries {
                if entry.contains(' ') {
                    phrases.push((entry.clone(), idx));
                } else {
                    words.entry(entry.clone()).or_default().push(idx);
                }
            }
        }

        Self {
            categories,
            words,
            phrases,
            stamp: lexicon.stamp(),
        }
    }

    pub fn stamp(&self) -> &LexiconStamp {
        &self.stamp
    }

    pub fn category_names(&self) -> &[String] {
        &self.categories
    }

    /// Count matches per category. Every lexicon category is present in
    /// the result, including those with zero matches.
    pub fn count(&self, tokens: &[String]) -> BTreeMap<String, usize> {
        let mut counts = vec![0usize; self.categories.len()];

        for token in tokens {
            if let Some(indices) = self.words.get(token) {
                for &idx in indices {
                    counts[idx] += 1;
                }
            }
        }

        if !self.phrases.is_empty() && !tokens.is_empty() {
            let joined = tokens.join(" ");
            for (phrase, idx) in &self.phrases {
                counts[*idx] += joined.matches(phrase.as_str()).count();
            }
        }

        self.categories.iter().cloned().zip(counts).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenizer::tokenize;

    fn tokens(text: &str) -> Vec<String> {
        tokenize(text)
    }

    #[test]
    fn test_word_entries_match_exact_tokens() {
        let lexicon = Lexicon::new("t", [("fatigue", vec!["lelah", "capek"])]);
        let matcher = LexiconMatcher::compile(&lexicon);

        let counts = matcher.count(&tokens("lelah lelah capek hampa kelelahan"));
        assert_eq!(counts["fatigue"], 3);
    }

    #[test]
    fn test_phrase_entries_span_tokens() {
        let lexicon = Lexicon::new("t", [("insomnia", vec!["susah tidur"])]);
        let matcher = LexiconMatcher::compile(&lexicon);

        let counts = matcher.count(&tokens("saya susah tidur semalam"));
        assert_eq!(counts["insomnia"], 1);

        let counts = matcher.count(&tokens("Susah,  tidur! lalu susah tidur lagi"));
        assert_eq!(counts["insomnia"], 2);
    }

    #[test]
    fn test_zero_count_categories_are_reported() {
        let lexicon = Lexicon::new(
            "t",
            [("loneliness", vec!["sendirian"]), ("negative", vec![])],
        );
        let matcher = LexiconMatcher::compile(&lexicon);

        let counts = matcher.count(&tokens("saya senang"));
        assert_eq!(counts.len(), 2);
        assert_eq!(counts["loneliness"], 0);
        assert_eq!(counts["negative"], 0);
    }

    #[test]
    fn test_token_counts_in_every_category_listing_it() {
        let lexicon = Lexicon::new(
            "t",
            [("negative", vec!["beban"]), ("worthlessness", vec!["beban", "beban!"])],
        );
        let matcher = LexiconMatcher::compile(&lexicon);

        let counts = matcher.count(&tokens("beban"));
        assert_eq!(counts["negative"], 1);
        assert_eq!(counts["worthlessness"], 1);
    }

    #[test]
    fn test_empty_tokens_match_nothing() {
        let matcher = LexiconMatcher::compile(&Lexicon::default());
        let counts = matcher.count(&[]);
        assert!(counts.values().all(|&c| c == 0));
    }
}
