use regex::Regex;
use std::sync::LazyLock;

// Punctuation and symbols at either edge of a token. Symbols cover the ASCII
// marks outside \p{P} (~ < > = + $ ^ | `) and emoji; the variation selector
// and zero-width joiner ride along with emoji sequences.
static EDGE_MARKS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[\p{P}\p{S}\x{FE0F}\x{200D}]+|[\p{P}\p{S}\x{FE0F}\x{200D}]+$").unwrap()
});

/// Strip leading/trailing punctuation and symbols, then lower-case.
/// Returns None when nothing is left.
pub fn normalize_token(raw: &str) -> Option<String> {
    let stripped = EDGE_MARKS.replace_all(raw, "");
    if stripped.is_empty() {
        return None;
    }
    Some(stripped.to_lowercase())
}

/// Split on whitespace and normalize each piece, dropping empties.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace().filter_map(normalize_token).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_and_blank_input() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   \n\t  ").is_empty());
    }

    #[test]
    fn test_punctuation_only_tokens_dropped() {
        assert!(tokenize("... !!! -- ? ^^ ~~ ==").is_empty());
        assert_eq!(tokenize("halo , dunia"), vec!["halo", "dunia"]);
    }

    #[test]
    fn test_strips_edges_keeps_interior() {
        assert_eq!(
            tokenize("\"Capek!\" (lelah), nggak apa-apa..."),
            vec!["capek", "lelah", "nggak", "apa-apa"]
        );
    }

    #[test]
    fn test_strips_ascii_symbols() {
        assert_eq!(
            tokenize("capek~ <lelah> =sedih= $hampa ^^ |bosen|"),
            vec!["capek", "lelah", "sedih", "hampa", "bosen"]
        );
    }

    #[test]
    fn test_strips_edge_emoji() {
        assert_eq!(tokenize("sedih😢 ❤️senang 🙏"), vec!["sedih", "senang"]);
        assert_eq!(tokenize("ok👍🏽"), vec!["ok"]);
    }

    #[test]
    fn test_lowercases_unicode() {
        assert_eq!(tokenize("SENANG Ärger"), vec!["senang", "ärger"]);
    }

    #[test]
    fn test_multiplicity_preserved() {
        assert_eq!(tokenize("lelah Lelah LELAH"), vec!["lelah"; 3]);
    }

    #[test]
    fn test_normalize_token() {
        assert_eq!(normalize_token("«Hampa»"), Some("hampa".to_string()));
        assert_eq!(normalize_token("?!"), None);
        assert_eq!(normalize_token("+-+"), None);
    }
}
