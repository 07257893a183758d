use intend_types::SentimentLabel;
use is_terminal::IsTerminal;
use owo_colors::OwoColorize;
use std::sync::OnceLock;

fn colors_enabled() -> bool {
    static ENABLED: OnceLock<bool> = OnceLock::new();
    *ENABLED.get_or_init(|| {
        std::env::var_os("NO_COLOR").is_none() && std::io::stdout().is_terminal()
    })
}

pub fn heading(text: &str) -> String {
    if colors_enabled() {
        text.bold().to_string()
    } else {
        text.to_string()
    }
}

pub fn dim(text: &str) -> String {
    if colors_enabled() {
        text.dimmed().to_string()
    } else {
        text.to_string()
    }
}

pub fn label(label: SentimentLabel) -> String {
    let text = label.as_str();
    if !colors_enabled() {
        return text.to_string();
    }
    match label {
        SentimentLabel::Positive => text.green().to_string(),
        SentimentLabel::Neutral => text.yellow().to_string(),
        SentimentLabel::Negative => text.red().to_string(),
    }
}

pub fn score(score: f64) -> String {
    format!("{:+.2}", score)
}
