use super::Lexicon;

pub const BUILTIN_LEXICON_VERSION: &str = "id-2025.10";

// Indonesian colloquial vocabulary heard in recorded sessions.
// Entries with a space are phrase entries.
const CATEGORIES: &[(&str, &[&str])] = &[
    (
        "positive",
        &[
            "senang",
            "bahagia",
            "gembira",
            "lega",
            "tenang",
            "semangat",
            "bersyukur",
            "membaik",
            "lebih baik",
            "nggak apa-apa",
        ],
    ),
    (
        "negative",
        &[
            "sedih",
            "hampa",
            "kosong",
            "beban",
            "bodoh",
            "kecewa",
            "takut",
            "cemas",
            "stres",
            "marah",
            "benci",
            "menangis",
            "nggak berguna",
            "putus asa",
        ],
    ),
    (
        "fatigue",
        &["lelah", "capek", "letih", "lemas", "mager", "nggak bertenaga"],
    ),
    (
        "insomnia",
        &[
            "insomnia",
            "begadang",
            "susah tidur",
            "nggak bisa tidur",
            "terbangun malam",
        ],
    ),
    (
        "loneliness",
        &["sendirian", "kesepian", "terasing", "nggak punya teman"],
    ),
    (
        "anhedonia",
        &["bosen", "bosan", "hampa", "biasa aja", "nggak minat", "nggak semangat"],
    ),
    (
        "hopelessness",
        &["percuma", "menyerah", "putus asa", "nggak ada harapan", "nggak ada gunanya"],
    ),
    (
        "worthlessness",
        &["gagal", "bodoh", "beban", "nggak berguna", "nggak berharga"],
    ),
];

/// The lexicon shipped with the engine
pub fn builtin_lexicon() -> Lexicon {
    Lexicon::new(
        BUILTIN_LEXICON_VERSION,
        CATEGORIES
            .iter()
            .map(|(name, entries)| (*name, entries.iter().copied())),
    )
}
