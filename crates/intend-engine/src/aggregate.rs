use intend_types::{
    CategoryCount, NEGATIVE, POSITIVE, Sentiment, SentimentLabel, WordCount,
    is_polarity_category,
};
use std::collections::{BTreeMap, HashMap};

/// Count each distinct token, preserving first-occurrence order.
pub fn word_frequencies(tokens: &[String]) -> Vec<WordCount> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut frequencies: Vec<WordCount> = Vec::new();

    for token in tokens {
        match index.get(token.as_str()) {
            Some(&pos) => frequencies[pos].count += 1,
            None => {
                index.insert(token.as_str(), frequencies.len());
                frequencies.push(WordCount {
                    word: token.clone(),
                    count: 1,
                });
            }
        }
    }

    frequencies
}

/// Highest counts first. `frequencies` must be in first-occurrence order;
/// the stable sort keeps that order among equal counts.
pub fn top_words(frequencies: &[WordCount], n: usize) -> Vec<WordCount> {
    let mut sorted = frequencies.to_vec();
    sorted.sort_by(|a, b| b.count.cmp(&a.count));
    sorted.truncate(n);
    sorted
}

pub fn sentiment(category_counts: &BTreeMap<String, usize>, total_words: usize) -> Sentiment {
    let positive = category_counts.get(POSITIVE).copied().unwrap_or(0);
    let negative = category_counts.get(NEGATIVE).copied().unwrap_or(0);

    // Phrase matches can overlap with word matches, so clamp explicitly.
    let raw = (positive as f64 - negative as f64) / total_words.max(1) as f64;
    let score = raw.clamp(-1.0, 1.0);

    Sentiment {
        score,
        label: SentimentLabel::from_score(score),
        positive,
        negative,
    }
}

/// Symptom categories with at least one match, by count desc then name.
pub fn detected_symptoms(category_counts: &BTreeMap<String, usize>) -> Vec<CategoryCount> {
    let mut detected: Vec<CategoryCount> = category_counts
        .iter()
        .filter(|(name, count)| **count > 0 && !is_polarity_category(name))
        .map(|(name, count)| CategoryCount {
            category: name.clone(),
            count: *count,
        })
        .collect();

    detected.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.category.cmp(&b.category)));
    detected
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    fn counts(pairs: &[(&str, usize)]) -> BTreeMap<String, usize> {
        pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    #[test]
    fn test_frequencies_keep_first_seen_order() {
        let freq = word_frequencies(&strings(&["b", "a", "b", "c", "a", "b"]));
        let words: Vec<_> = freq.iter().map(|w| (w.word.as_str(), w.count)).collect();
        assert_eq!(words, vec![("b", 3), ("a", 2), ("c", 1)]);
    }

    #[test]
    fn test_top_words_ties_by_first_occurrence() {
        let freq = word_frequencies(&strings(&["hampa", "beban", "capek", "beban", "hampa"]));
        let top = top_words(&freq, 2);
        let words: Vec<_> = top.iter().map(|w| w.word.as_str()).collect();
        assert_eq!(words, vec!["hampa", "beban"]);
    }

    #[test]
    fn test_top_words_zero_n() {
        let freq = word_frequencies(&strings(&["a"]));
        assert!(top_words(&freq, 0).is_empty());
    }

    #[test]
    fn test_sentiment_empty_is_neutral_zero() {
        let s = sentiment(&BTreeMap::new(), 0);
        assert_eq!(s.score, 0.0);
        assert_eq!(s.label, SentimentLabel::Neutral);
    }

    #[test]
    fn test_sentiment_is_clamped() {
        let s = sentiment(&counts(&[("negative", 5)]), 2);
        assert_eq!(s.score, -1.0);
        assert_eq!(s.label, SentimentLabel::Negative);
    }

    #[test]
    fn test_detected_symptoms_sorted_and_exclude_polarity() {
        let detected = detected_symptoms(&counts(&[
            ("anhedonia", 2),
            ("fatigue", 5),
            ("insomnia", 2),
            ("loneliness", 0),
            ("negative", 9),
            ("positive", 1),
        ]));
        let names: Vec<_> = detected.iter().map(|c| c.category.as_str()).collect();
        assert_eq!(names, vec!["fatigue", "anhedonia", "insomnia"]);
    }
}
