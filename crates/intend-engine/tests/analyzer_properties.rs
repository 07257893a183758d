use intend_engine::{Analyzer, AnalyzerOptions, analyze, sentiment_category, sentiment_score, tokenize};
use intend_types::{Lexicon, SentimentLabel};

const SAMPLES: &[&str] = &[
    "",
    "   ",
    "...",
    "saya senang hari ini",
    "sedih sedih sedih",
    "lelah hampa beban capek sendirian nggak berguna kosong",
    "Nggak apa-apa, udah lebih baik. Tugas selesai!",
    "senang senang senang senang sedih",
    "susah tidur, susah tidur, susah tidur",
    "こんにちは 世界 😢 🙂",
];

#[test]
fn test_score_is_bounded_for_all_samples() {
    let lexicon = Lexicon::default();
    for text in SAMPLES {
        let score = sentiment_score(text, &lexicon);
        assert!((-1.0..=1.0).contains(&score), "score {} out of range for {:?}", score, text);
    }
}

#[test]
fn test_score_bounded_when_phrases_overlap_words() {
    let lexicon = Lexicon::new(
        "overlap",
        [("negative", vec!["putus", "putus asa", "asa"])],
    );
    let result = analyze("putus asa", &lexicon);

    assert_eq!(result.sentiment.negative, 3);
    assert_eq!(result.sentiment.score, -1.0);
}

#[test]
fn test_empty_text_is_neutral() {
    let lexicon = Lexicon::default();
    assert_eq!(sentiment_score("", &lexicon), 0.0);
    assert_eq!(sentiment_category("", &lexicon), SentimentLabel::Neutral);
}

#[test]
fn test_frequencies_sum_to_token_count() {
    let lexicon = Lexicon::default();
    for text in SAMPLES {
        let result = analyze(text, &lexicon);
        let sum: usize = result.frequencies.iter().map(|w| w.count).sum();
        assert_eq!(sum, tokenize(text).len());
        assert_eq!(sum, result.total_words);
    }
}

#[test]
fn test_analysis_is_deterministic() {
    let lexicon = Lexicon::default();
    let analyzer = Analyzer::new(&lexicon);
    for text in SAMPLES {
        let first = analyzer.analyze(text);
        let second = Analyzer::new(&lexicon).analyze(text);
        assert_eq!(first, second);
        assert_eq!(
            first.sentiment.score.to_bits(),
            second.sentiment.score.to_bits()
        );
    }
}

#[test]
fn test_top_ten_of_fifteen_descending() {
    // word_i appears (16 - i) times, so frequencies strictly decrease
    let mut words = Vec::new();
    for i in 1..=15 {
        for _ in 0..(16 - i) {
            words.push(format!("w{}", i));
        }
    }
    // Interleave so frequency and first occurrence are not trivially aligned
    words.reverse();
    let text = words.join(" ");

    let analyzer = Analyzer::with_options(&Lexicon::empty(), AnalyzerOptions { top_n: 10 });
    let result = analyzer.analyze(&text);

    let top: Vec<_> = result.top_words.iter().map(|w| w.word.clone()).collect();
    let expected: Vec<_> = (1..=10).map(|i| format!("w{}", i)).collect();
    assert_eq!(top, expected);

    let counts: Vec<_> = result.top_words.iter().map(|w| w.count).collect();
    assert!(counts.windows(2).all(|pair| pair[0] > pair[1]));
}

#[test]
fn test_every_category_reported_even_when_zero() {
    let lexicon = Lexicon::default();
    let result = analyze("halo", &lexicon);

    let names: Vec<_> = result.category_counts.keys().map(String::as_str).collect();
    let expected: Vec<_> = lexicon.category_names().collect();
    assert_eq!(names, expected);
    assert!(result.category_counts.values().all(|&c| c == 0));
}

#[test]
fn test_empty_categories_are_never_detected() {
    let lexicon = Lexicon::new("t", [("fatigue", Vec::<&str>::new()), ("insomnia", vec!["  "])]);
    let result = analyze("lelah capek susah tidur", &lexicon);

    assert!(result.detected_symptoms.is_empty());
    assert_eq!(result.category_count("fatigue"), 0);
}

#[test]
fn test_analyzer_is_shareable_across_threads() {
    let analyzer = Analyzer::new(&Lexicon::default());
    let expected = analyzer.analyze("capek lelah");

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| analyzer.analyze("capek lelah")))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}
