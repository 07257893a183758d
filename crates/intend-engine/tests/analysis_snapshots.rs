use intend_engine::{Analyzer, AnalyzerOptions};
use intend_types::{CategoryCount, Lexicon, SentimentLabel, WordCount};
use serde::Serialize;

// Keyword stream from a recorded session with strong fatigue signals
const HEAVY_SESSION: &str = "lelah hampa beban capek sendirian nggak berguna kosong capek lelah \
     hampa beban nggak minat bodoh lelah capek beban hampa";

#[derive(Serialize)]
struct Digest<'a> {
    total_words: usize,
    top_words: &'a [WordCount],
    detected_symptoms: &'a [CategoryCount],
}

#[test]
fn test_heavy_session_digest() {
    let analyzer = Analyzer::with_options(&Lexicon::default(), AnalyzerOptions { top_n: 5 });
    let result = analyzer.analyze(HEAVY_SESSION);

    assert_eq!(result.sentiment.label, SentimentLabel::Negative);
    assert_eq!(result.sentiment.positive, 0);
    assert_eq!(result.sentiment.negative, 9);

    let digest = Digest {
        total_words: result.total_words,
        top_words: &result.top_words,
        detected_symptoms: &result.detected_symptoms,
    };

    insta::assert_json_snapshot!(digest, @r###"
    {
      "total_words": 19,
      "top_words": [
        {
          "word": "lelah",
          "count": 3
        },
        {
          "word": "hampa",
          "count": 3
        },
        {
          "word": "beban",
          "count": 3
        },
        {
          "word": "capek",
          "count": 3
        },
        {
          "word": "nggak",
          "count": 2
        }
      ],
      "detected_symptoms": [
        {
          "category": "fatigue",
          "count": 6
        },
        {
          "category": "worthlessness",
          "count": 5
        },
        {
          "category": "anhedonia",
          "count": 4
        },
        {
          "category": "loneliness",
          "count": 1
        }
      ]
    }
    "###);
}

#[test]
fn test_mild_session_counts() {
    let result = Analyzer::new(&Lexicon::default())
        .analyze("nggak apa-apa udah lebih baik tugas selesai");

    insta::assert_json_snapshot!(result.category_counts, @r###"
    {
      "anhedonia": 0,
      "fatigue": 0,
      "hopelessness": 0,
      "insomnia": 0,
      "loneliness": 0,
      "negative": 0,
      "positive": 2,
      "worthlessness": 0
    }
    "###);
    assert_eq!(result.sentiment.label, SentimentLabel::Positive);
}
