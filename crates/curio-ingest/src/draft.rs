//! Question draft files.
//!
//! Drafts are authored in YAML with fact-checked English content; Chinese
//! fields are optional and filled by the translator during completion.

use std::fs;
use std::path::Path;

use curio_core::errors::IngestError;
use curio_core::question::Difficulty;
use serde::Deserialize;

/// One authored question awaiting completion.
#[derive(Debug, Clone, Deserialize)]
pub struct QuestionDraft {
    pub question_en: String,
    pub correct_answer: usize,
    pub choices_en: Vec<String>,
    /// Fact-checked upstream. May be omitted only when the builder has a
    /// generation collaborator to fill them.
    #[serde(default)]
    pub explanations_en: Vec<String>,
    #[serde(default = "QuestionDraft::default_difficulty")]
    pub difficulty: Difficulty,
    #[serde(default)]
    pub question_zh: Option<String>,
    #[serde(default)]
    pub choices_zh: Option<Vec<String>>,
    #[serde(default)]
    pub explanations_zh: Option<Vec<String>>,
}

impl QuestionDraft {
    fn default_difficulty() -> Difficulty {
        Difficulty::Medium
    }
}

/// A draft file: one category, one or more drafts.
#[derive(Debug, Clone, Deserialize)]
pub struct DraftFile {
    pub category: String,
    pub questions: Vec<QuestionDraft>,
}

impl DraftFile {
    pub fn from_yaml(text: &str) -> Result<Self, IngestError> {
        serde_yaml::from_str(text).map_err(|e| IngestError::MalformedDraft {
            path: "<inline>".to_string(),
            reason: e.to_string(),
        })
    }

    pub fn load(path: &Path) -> Result<Self, IngestError> {
        let text = fs::read_to_string(path).map_err(|e| IngestError::Io {
            path: path.display().to_string(),
            source: e,
        })?;
        serde_yaml::from_str(&text).map_err(|e| IngestError::MalformedDraft {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    }
}
