//! Question and category document records.
//!
//! `Question` is the typed form produced by the ingestion workflow. The
//! validation side deliberately works on raw `serde_json::Value` records so
//! that malformed questions are graded with issues instead of failing to
//! deserialize.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Question difficulty tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Lowercase label as written in documents and ledger entries.
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    /// Parse a lowercase label.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "easy" => Some(Difficulty::Easy),
            "medium" => Some(Difficulty::Medium),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }
}

/// A complete bilingual multiple-choice question.
///
/// Invariant: `choices_en`, `choices_zh`, `explanations_en`, and
/// `explanations_zh` all have exactly 4 entries, and `correct_answer`
/// indexes one of them. The explanation at `correct_answer` is the
/// affirmative one; all others are negative.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub question_en: String,
    pub question_zh: String,
    pub choices_en: Vec<String>,
    pub choices_zh: Vec<String>,
    pub correct_answer: usize,
    pub explanations_en: Vec<String>,
    pub explanations_zh: Vec<String>,
    pub difficulty: Difficulty,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified_at: Option<DateTime<Utc>>,
}

impl Question {
    /// The explanation paired with the correct choice, if present.
    pub fn correct_explanation(&self) -> Option<&str> {
        self.explanations_en
            .get(self.correct_answer)
            .map(String::as_str)
    }
}

/// One per-category document: a bilingual category header plus its questions.
///
/// Questions are kept raw here. Uniqueness of IDs is not enforced on disk;
/// the allocator is the only thing preventing collisions.
#[derive(Debug, Clone)]
pub struct CategoryDocument {
    pub category_en: String,
    pub category_zh: String,
    pub questions: Vec<Value>,
}

impl CategoryDocument {
    /// The `id` field of each question that has one.
    pub fn question_ids(&self) -> impl Iterator<Item = &str> {
        self.questions
            .iter()
            .filter_map(|q| q.get("id").and_then(Value::as_str))
    }
}
