use super::analysis::short_fingerprint;
use crate::presentation::style;
use intend_types::Lexicon;
use serde::Serialize;
use std::fmt;

#[derive(Serialize)]
#[serde(transparent)]
pub struct LexiconView<'a> {
    lexicon: &'a Lexicon,
}

impl<'a> LexiconView<'a> {
    pub fn new(lexicon: &'a Lexicon) -> Self {
        Self { lexicon }
    }
}

impl fmt::Display for LexiconView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let fingerprint = self.lexicon.fingerprint();
        writeln!(
            f,
            "{} {} ({} categories, {})",
            style::heading("Lexicon"),
            self.lexicon.version(),
            self.lexicon.len(),
            short_fingerprint(&fingerprint)
        )?;

        for (category, entries) in self.lexicon.categories() {
            let entries: Vec<&str> = entries.iter().map(String::as_str).collect();
            writeln!(f, "  {:<14} {}", category, entries.join(", "))?;
        }
        Ok(())
    }
}
