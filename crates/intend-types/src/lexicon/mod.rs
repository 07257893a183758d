mod builtin;

use crate::text::tokenize;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::{BTreeMap, BTreeSet};

pub use builtin::{BUILTIN_LEXICON_VERSION, builtin_lexicon};

/// Polarity category feeding the positive side of the sentiment score
pub const POSITIVE: &str = "positive";

/// Polarity category feeding the negative side of the sentiment score
pub const NEGATIVE: &str = "negative";

/// Returns true for the two polarity categories, which are scored but
/// never reported as symptoms.
pub fn is_polarity_category(name: &str) -> bool {
    name == POSITIVE || name == NEGATIVE
}

/// Versioned rule table: category name -> trigger words/phrases.
///
/// Names are lower-cased with whitespace collapsed. Entries go through the
/// transcript tokenizer and are rejoined with single spaces, so `"Capek!"`
/// is stored as `capek`. Entries with no tokens left are dropped and a
/// category may end up empty; such a category is simply never detected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "LexiconDef", into = "LexiconDef")]
pub struct Lexicon {
    version: String,
    categories: BTreeMap<String, BTreeSet<String>>,
}

/// On-disk shape of a lexicon (TOML or JSON)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct LexiconDef {
    #[serde(default)]
    version: String,
    #[serde(default)]
    categories: BTreeMap<String, Vec<String>>,
}

impl From<LexiconDef> for Lexicon {
    fn from(def: LexiconDef) -> Self {
        Lexicon::new(def.version, def.categories)
    }
}

impl From<Lexicon> for LexiconDef {
    fn from(lexicon: Lexicon) -> Self {
        LexiconDef {
            version: lexicon.version,
            categories: lexicon
                .categories
                .into_iter()
                .map(|(name, entries)| (name, entries.into_iter().collect()))
                .collect(),
        }
    }
}

impl Lexicon {
    pub fn new<C, E, S>(version: impl Into<String>, categories: C) -> Self
    where
        C: IntoIterator<Item = (S, E)>,
        E: IntoIterator,
        E::Item: AsRef<str>,
        S: AsRef<str>,
    {
        let mut normalized: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();

        for (name, entries) in categories {
            let name = normalize_name(name.as_ref());
            if name.is_empty() {
                continue;
            }
            let set = normalized.entry(name).or_default();
            for entry in entries {
                let tokens = tokenize(entry.as_ref());
                if !tokens.is_empty() {
                    set.insert(tokens.join(" "));
                }
            }
        }

        Self {
            version: version.into(),
            categories: normalized,
        }
    }

    pub fn empty() -> Self {
        Self::new("", Vec::<(String, Vec<String>)>::new())
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// Category names in alphabetical order
    pub fn category_names(&self) -> impl Iterator<Item = &str> {
        self.categories.keys().map(String::as_str)
    }

    pub fn categories(&self) -> &BTreeMap<String, BTreeSet<String>> {
        &self.categories
    }

    pub fn entries(&self, category: &str) -> Option<&BTreeSet<String>> {
        self.categories.get(category)
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Categories declared without any usable entry
    pub fn empty_categories(&self) -> Vec<&str> {
        self.categories
            .iter()
            .filter(|(_, entries)| entries.is_empty())
            .map(|(name, _)| name.as_str())
            .collect()
    }

    /// SHA256 over the normalized rule content (version excluded), so two
    /// lexicons with the same rules share a fingerprint.
    pub fn fingerprint(&self) -> String {
        let mut hasher = Sha256::new();
        for (name, entries) in &self.categories {
            hasher.update(name.as_bytes());
            hasher.update(b"\0");
            for entry in entries {
                hasher.update(entry.as_bytes());
                hasher.update(b"\x1f");
            }
            hasher.update(b"\n");
        }
        format!("{:x}", hasher.finalize())
    }

    pub fn stamp(&self) -> LexiconStamp {
        LexiconStamp {
            version: self.version.clone(),
            fingerprint: self.fingerprint(),
        }
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        builtin_lexicon()
    }
}

/// Identifies the rule data an analysis was produced with
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LexiconStamp {
    pub version: String,
    pub fingerprint: String,
}

fn normalize_name(raw: &str) -> String {
    raw.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entries_are_normalized() {
        let lexicon = Lexicon::new(
            "t1",
            [("Insomnia ", vec!["  Susah   Tidur", "BEGADANG", "", "   "])],
        );

        let entries = lexicon.entries("insomnia").unwrap();
        assert_eq!(entries.len(), 2);
        assert!(entries.contains("susah tidur"));
        assert!(entries.contains("begadang"));
    }

    #[test]
    fn test_empty_category_is_kept_but_reported() {
        let lexicon = Lexicon::new("t1", [("negative", Vec::<&str>::new()), ("fatigue", vec!["lelah"])]);

        assert_eq!(lexicon.len(), 2);
        assert_eq!(lexicon.empty_categories(), vec!["negative"]);
    }

    #[test]
    fn test_entries_use_token_rules() {
        let lexicon = Lexicon::new(
            "t1",
            [("fatigue", vec!["Capek!", "~lelah~", "\"nggak  bertenaga.\""]), ("negative", vec!["!!!", "..."])],
        );

        let fatigue: Vec<&str> = lexicon
            .entries("fatigue")
            .unwrap()
            .iter()
            .map(String::as_str)
            .collect();
        assert_eq!(fatigue, vec!["capek", "lelah", "nggak bertenaga"]);
        assert_eq!(lexicon.empty_categories(), vec!["negative"]);
    }

    #[test]
    fn test_fingerprint_matches_for_equivalent_entries() {
        let plain = Lexicon::new("a", [("fatigue", vec!["capek"])]);
        let decorated = Lexicon::new("a", [("fatigue", vec!["Capek!"])]);

        assert_eq!(plain, decorated);
        assert_eq!(plain.fingerprint(), decorated.fingerprint());
    }

    #[test]
    fn test_fingerprint_ignores_version_and_entry_order() {
        let a = Lexicon::new("a", [("fatigue", vec!["lelah", "capek"])]);
        let b = Lexicon::new("b", [("fatigue", vec!["capek", "Lelah"])]);
        let c = Lexicon::new("a", [("fatigue", vec!["capek"])]);

        assert_eq!(a.fingerprint(), b.fingerprint());
        assert_ne!(a.fingerprint(), c.fingerprint());
        assert_eq!(a.fingerprint().len(), 64);
    }

    #[test]
    fn test_deserialize_normalizes() {
        let json = r#"{"version":"x","categories":{"Positive":["Senang","senang"]}}"#;
        let lexicon: Lexicon = serde_json::from_str(json).unwrap();

        assert_eq!(lexicon.version(), "x");
        assert_eq!(lexicon.entries("positive").unwrap().len(), 1);
    }

    #[test]
    fn test_polarity_categories() {
        assert!(is_polarity_category(POSITIVE));
        assert!(is_polarity_category(NEGATIVE));
        assert!(!is_polarity_category("fatigue"));
    }
}
