use std::sync::LazyLock;

use regex::Regex;

static TIMESTAMPED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\[\d{2}:\d{2}:\d{2}\])\s*(.+)$").expect("transcript pattern is valid")
});

/// One rendered transcript line; `timestamp` keeps its brackets, e.g. `[00:01:05]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptLine {
    pub timestamp: Option<String>,
    pub text: String,
}

/// Split a transcript into non-blank lines, separating leading timestamps.
#[must_use]
pub fn parse_transcript(transcript: &str) -> Vec<TranscriptLine> {
    transcript
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| match TIMESTAMPED.captures(line) {
            Some(caps) => TranscriptLine {
                timestamp: Some(caps[1].to_string()),
                text: caps[2].to_string(),
            },
            None => TranscriptLine {
                timestamp: None,
                text: line.to_string(),
            },
        })
        .collect()
}
