//! Local key-term extraction for the evidence stage.
//!
//! High-frequency non-stopword tokens from the question and its correct
//! explanation. This runs locally; only the resulting terms are handed to
//! the external collaborator.

use std::sync::LazyLock;

use regex::Regex;

/// Words carrying no checkable content, including the explanation markers.
const STOP_WORDS: [&str; 33] = [
    "why", "do", "does", "the", "a", "an", "is", "are", "we", "our", "when", "what", "how", "this",
    "that", "it", "its", "they", "their", "because", "correct", "wrong", "actually", "really",
    "just", "only", "make", "makes", "help", "helps", "cause", "causes", "called",
];

/// Candidate terms: lowercase words of at least 4 letters.
static WORD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b[a-z]{4,}\b").unwrap());

/// How many terms the evidence stage hands to the collaborator.
pub const MAX_KEY_TERMS: usize = 5;

/// Extract up to [`MAX_KEY_TERMS`] key terms, most frequent first.
/// Ties keep first-occurrence order.
pub fn extract_key_terms(question: &str, explanation: &str) -> Vec<String> {
    let text = format!("{question} {explanation}").to_lowercase();

    let mut counts: Vec<(String, usize)> = Vec::new();
    for m in WORD_RE.find_iter(&text) {
        let word = m.as_str();
        if STOP_WORDS.contains(&word) {
            continue;
        }
        match counts.iter_mut().find(|(w, _)| w == word) {
            Some((_, n)) => *n += 1,
            None => counts.push((word.to_string(), 1)),
        }
    }

    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
        .into_iter()
        .take(MAX_KEY_TERMS)
        .map(|(w, _)| w)
        .collect()
}
