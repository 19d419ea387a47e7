//! Word-count transforms: tokenize, count, format.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use regex::Regex;

/// Word boundary: any run of characters outside `[a-zA-Z']`. Apostrophes stay
/// inside words so contractions count as one word.
fn word_boundary() -> &'static Regex {
    static BOUNDARY: OnceLock<Regex> = OnceLock::new();
    BOUNDARY.get_or_init(|| Regex::new(r"[^a-zA-Z']+").unwrap())
}

/// Tokenize one line of text into words, dropping empty tokens.
pub fn extract_words(line: &str) -> Vec<String> {
    word_boundary()
        .split(line)
        .filter(|word| !word.is_empty())
        .map(str::to_string)
        .collect()
}

/// Count word occurrences across the input lines.
///
/// Returns a `BTreeMap` so iteration (and therefore output) order is
/// deterministic. Empty lines are tallied and logged, mirroring what a full
/// pipeline would surface as a counter in the monitoring UI.
pub fn count_words<'a, I>(lines: I) -> BTreeMap<String, u64>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut counts: BTreeMap<String, u64> = BTreeMap::new();
    let mut empty_lines = 0u64;

    for line in lines {
        if line.trim().is_empty() {
            empty_lines += 1;
        }
        for word in extract_words(line) {
            *counts.entry(word).or_insert(0) += 1;
        }
    }

    tracing::debug!(empty_lines, distinct_words = counts.len(), "tokenized input");
    counts
}

/// Format each word/count pair as a printable `"{word}: {count}"` line.
pub fn format_counts(counts: &BTreeMap<String, u64>) -> Vec<String> {
    counts
        .iter()
        .map(|(word, count)| format!("{word}: {count}"))
        .collect()
}

/// The composed transform: lines of text in, formatted word counts out.
pub fn count_lines<'a, I>(lines: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    format_counts(&count_words(lines))
}
