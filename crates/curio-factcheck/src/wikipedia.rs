//! Wikipedia-backed `EvidenceProvider`.
//!
//! For each key term: opensearch for candidate articles, fetch the summary
//! of the best hit, and compare content words (5+ letters) between the
//! article extract and the correct explanation. Three or more shared words
//! count the term as supported; the supported ratio grades the report.

use std::sync::LazyLock;
use std::time::Duration;

use curio_core::errors::EvidenceError;
use curio_core::models::{Confidence, EvidenceReport, EvidenceSource};
use curio_core::traits::EvidenceProvider;
use regex::Regex;
use serde_json::Value;
use tracing::debug;

/// Content words considered in the overlap comparison.
static CONTENT_WORD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b[a-z]{5,}\b").unwrap());

/// Terms checked per question.
const TERMS_CHECKED: usize = 3;
/// Shared content words needed for a term to count as supported.
const MIN_OVERLAP: usize = 3;
/// Supported ratio thresholds for high and medium confidence.
const HIGH_RATIO: f64 = 0.7;
const MEDIUM_RATIO: f64 = 0.4;

const DEFAULT_BASE_URL: &str = "https://en.wikipedia.org";

/// Evidence provider querying the public Wikipedia APIs.
pub struct WikipediaEvidence {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl WikipediaEvidence {
    pub fn new() -> Result<Self, EvidenceError> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Point the provider at a different host (tests, mirrors).
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, EvidenceError> {
        let client = reqwest::blocking::Client::builder()
            .user_agent("curio-factcheck (educational)")
            .timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| EvidenceError::Unavailable {
                reason: e.to_string(),
            })?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Titles of up to 3 articles matching `query`.
    fn search(&self, query: &str) -> Result<Vec<String>, EvidenceError> {
        let url = format!("{}/w/api.php", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[
                ("action", "opensearch"),
                ("search", query),
                ("limit", "3"),
                ("format", "json"),
            ])
            .send()
            .map_err(|e| EvidenceError::RequestFailed {
                reason: e.to_string(),
            })?;
        let body: Value = response.json().map_err(|e| EvidenceError::MalformedResponse {
            reason: e.to_string(),
        })?;

        // Opensearch replies [query, [titles], [descriptions], [urls]].
        let titles = body
            .get(1)
            .and_then(Value::as_array)
            .ok_or_else(|| EvidenceError::MalformedResponse {
                reason: "opensearch reply missing title list".to_string(),
            })?;
        Ok(titles
            .iter()
            .filter_map(Value::as_str)
            .map(String::from)
            .collect())
    }

    /// Summary extract and canonical URL for an article title.
    fn summary(&self, title: &str) -> Result<Option<(String, String, String)>, EvidenceError> {
        let encoded = urlencoding::encode(&title.replace(' ', "_")).into_owned();
        let url = format!("{}/api/rest_v1/page/summary/{encoded}", self.base_url);
        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|e| EvidenceError::RequestFailed {
                reason: e.to_string(),
            })?;
        if !response.status().is_success() {
            return Ok(None);
        }
        let body: Value = response.json().map_err(|e| EvidenceError::MalformedResponse {
            reason: e.to_string(),
        })?;

        let extract = body.get("extract").and_then(Value::as_str).unwrap_or("");
        if extract.is_empty() {
            return Ok(None);
        }
        let page_title = body
            .get("title")
            .and_then(Value::as_str)
            .unwrap_or(title)
            .to_string();
        let page_url = body
            .pointer("/content_urls/desktop/page")
            .and_then(Value::as_str)
            .unwrap_or("")
            .to_string();
        Ok(Some((page_title, extract.to_string(), page_url)))
    }
}

impl EvidenceProvider for WikipediaEvidence {
    fn evidence_for(
        &self,
        terms: &[String],
        _question: &str,
        explanation: &str,
    ) -> Result<EvidenceReport, EvidenceError> {
        let mut sources = Vec::new();
        let mut notes = Vec::new();
        let mut matches = 0usize;
        let mut total_checks = 0usize;
        let mut transport_errors = 0usize;

        for term in terms.iter().take(TERMS_CHECKED) {
            let articles = match self.search(term) {
                Ok(a) => a,
                Err(e) => {
                    debug!(term = %term, error = %e, "wikipedia search failed");
                    transport_errors += 1;
                    continue;
                }
            };
            let Some(first) = articles.first() else {
                continue;
            };
            let summary = match self.summary(first) {
                Ok(Some(s)) => s,
                Ok(None) => continue,
                Err(e) => {
                    debug!(term = %term, error = %e, "wikipedia summary failed");
                    transport_errors += 1;
                    continue;
                }
            };

            total_checks += 1;
            let (article, extract, url) = summary;
            let overlap = overlap_words(explanation, &extract);
            if overlap.len() >= MIN_OVERLAP {
                matches += 1;
                sources.push(EvidenceSource {
                    term: term.clone(),
                    article,
                    url,
                    overlap_words: overlap.into_iter().take(5).collect(),
                });
            }
        }

        // Nothing reachable at all: let the caller skip the stage.
        if total_checks == 0 && transport_errors > 0 {
            return Err(EvidenceError::Unavailable {
                reason: format!("{transport_errors} request(s) failed"),
            });
        }

        let (verified, confidence) = grade(matches, total_checks);
        if total_checks == 0 {
            notes.push("No Wikipedia articles found for key terms".to_string());
        } else if !verified {
            notes.push("Limited Wikipedia coverage found".to_string());
        }

        Ok(EvidenceReport {
            verified,
            confidence,
            key_terms: terms.to_vec(),
            sources,
            notes,
        })
    }
}

/// Content words shared between the explanation and an article extract.
fn overlap_words(explanation: &str, extract: &str) -> Vec<String> {
    let explanation = explanation.to_lowercase();
    let extract = extract.to_lowercase();
    let extract_words: std::collections::HashSet<&str> = CONTENT_WORD_RE
        .find_iter(&extract)
        .map(|m| m.as_str())
        .collect();

    let mut shared = Vec::new();
    for m in CONTENT_WORD_RE.find_iter(&explanation) {
        let word = m.as_str();
        if extract_words.contains(word) && !shared.iter().any(|s| s == word) {
            shared.push(word.to_string());
        }
    }
    shared
}

/// Grade the supported ratio into a verdict.
fn grade(matches: usize, total_checks: usize) -> (bool, Confidence) {
    if total_checks == 0 {
        return (false, Confidence::Low);
    }
    let ratio = matches as f64 / total_checks as f64;
    if ratio >= HIGH_RATIO {
        (true, Confidence::High)
    } else if ratio >= MEDIUM_RATIO {
        (true, Confidence::Medium)
    } else {
        (false, Confidence::Low)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlap_ignores_short_and_unshared_words() {
        let shared = overlap_words(
            "Correct! Tidal locking matched the rotation to the orbital period.",
            "Tidal locking is the situation where an orbital period matches the rotation rate.",
        );
        assert!(shared.contains(&"tidal".to_string()));
        assert!(shared.contains(&"locking".to_string()));
        assert!(shared.contains(&"orbital".to_string()));
        assert!(!shared.contains(&"the".to_string()));
    }

    #[test]
    fn overlap_deduplicates_repeats() {
        let shared = overlap_words("orbit orbital orbital orbital", "orbital mechanics");
        assert_eq!(shared, ["orbital"]);
    }

    #[test]
    fn grading_thresholds() {
        assert_eq!(grade(3, 3), (true, Confidence::High));
        assert_eq!(grade(2, 3), (true, Confidence::Medium));
        assert_eq!(grade(1, 3), (false, Confidence::Low));
        assert_eq!(grade(0, 2), (false, Confidence::Low));
    }

    #[test]
    fn no_checks_is_low_and_unverified() {
        assert_eq!(grade(0, 0), (false, Confidence::Low));
    }
}
