//! Question completion.
//!
//! Validates draft shape, fills missing English explanations through the
//! generation collaborator and missing Chinese fields through the
//! translator, then stamps timestamps. Translator failures degrade to
//! recognizable placeholder text instead of corrupting the record; an
//! overlong translation gets one constrained retry before failing hard.

use chrono::Utc;
use curio_core::config::LengthLimits;
use curio_core::constants::CHOICE_COUNT;
use curio_core::errors::{IngestError, TranslationError};
use curio_core::question::Question;
use curio_core::traits::{Generator, Translator};
use tracing::warn;

use crate::draft::QuestionDraft;

/// Builds complete questions from drafts.
pub struct QuestionBuilder<'a> {
    translator: Option<&'a dyn Translator>,
    generator: Option<&'a dyn Generator>,
    limits: LengthLimits,
}

impl<'a> QuestionBuilder<'a> {
    /// A builder with no collaborators: drafts must carry explanations,
    /// and missing Chinese fields become placeholders for a later
    /// translation pass.
    pub fn new() -> Self {
        Self {
            translator: None,
            generator: None,
            limits: LengthLimits::default(),
        }
    }

    pub fn with_translator(mut self, translator: &'a dyn Translator) -> Self {
        self.translator = Some(translator);
        self
    }

    pub fn with_generator(mut self, generator: &'a dyn Generator) -> Self {
        self.generator = Some(generator);
        self
    }

    pub fn with_limits(mut self, limits: LengthLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Complete a draft under the given allocated ID.
    pub fn complete(
        &self,
        draft: &QuestionDraft,
        category: &str,
        id: &str,
    ) -> Result<Question, IngestError> {
        self.validate_shape(draft)?;

        let explanations_en = if draft.explanations_en.is_empty() {
            // A generation failure here is a hard error, not a placeholder:
            // accepting a question without explanations would be corrupt.
            let generator = self.generator.ok_or_else(|| IngestError::InvalidDraft {
                question: draft.question_en.clone(),
                reason: format!(
                    "{CHOICE_COUNT} fact-checked English explanations required (none given, no generator configured)"
                ),
            })?;
            generator
                .generate_explanations(
                    &draft.question_en,
                    &draft.choices_en,
                    draft.correct_answer,
                    draft.difficulty,
                    category,
                )?
                .to_vec()
        } else {
            draft.explanations_en.clone()
        };

        let question_zh = match &draft.question_zh {
            Some(zh) => zh.clone(),
            None => self.translate(&draft.question_en, self.limits.question_zh_max)?,
        };
        let choices_zh = match &draft.choices_zh {
            Some(zh) => zh.clone(),
            None => draft
                .choices_en
                .iter()
                .map(|c| self.translate(c, self.limits.choice_zh_max))
                .collect::<Result<_, _>>()?,
        };
        let explanations_zh = match &draft.explanations_zh {
            Some(zh) => zh.clone(),
            None => explanations_en
                .iter()
                .map(|e| self.translate_unbounded(e))
                .collect(),
        };

        let now = Utc::now();
        Ok(Question {
            id: id.to_string(),
            question_en: draft.question_en.clone(),
            question_zh,
            choices_en: draft.choices_en.clone(),
            choices_zh,
            correct_answer: draft.correct_answer,
            explanations_en,
            explanations_zh,
            difficulty: draft.difficulty,
            created_at: Some(now),
            last_modified_at: Some(now),
        })
    }

    fn validate_shape(&self, draft: &QuestionDraft) -> Result<(), IngestError> {
        let invalid = |reason: String| IngestError::InvalidDraft {
            question: draft.question_en.clone(),
            reason,
        };
        if draft.choices_en.len() != CHOICE_COUNT {
            return Err(invalid(format!(
                "must have exactly {CHOICE_COUNT} choices (got {})",
                draft.choices_en.len()
            )));
        }
        if draft.correct_answer >= CHOICE_COUNT {
            return Err(invalid(format!(
                "correct_answer must be 0-{} (got {})",
                CHOICE_COUNT - 1,
                draft.correct_answer
            )));
        }
        if !draft.explanations_en.is_empty() && draft.explanations_en.len() != CHOICE_COUNT {
            return Err(invalid(format!(
                "{CHOICE_COUNT} explanations expected (got {})",
                draft.explanations_en.len()
            )));
        }
        Ok(())
    }

    /// Translate with a budget: one unconstrained attempt, one constrained
    /// retry, then a hard error. Budgets apply only to real translations;
    /// placeholders are sentinels for a later pass.
    fn translate(&self, text: &str, max_chars: usize) -> Result<String, IngestError> {
        let Some(translator) = self.translator else {
            return Ok(pending_placeholder(text));
        };
        let first = match translator.translate(text, None) {
            Ok(t) => t,
            Err(e) => return Ok(failed_placeholder(text, &e)),
        };
        if first.chars().count() <= max_chars {
            return Ok(first);
        }

        warn!(chars = first.chars().count(), max_chars, "translation over budget, retrying");
        let retried = match translator.translate(text, Some(max_chars)) {
            Ok(t) => t,
            Err(e) => return Ok(failed_placeholder(text, &e)),
        };
        if retried.chars().count() <= max_chars {
            return Ok(retried);
        }
        Err(TranslationError::TooLong {
            max_chars,
            text: retried,
        }
        .into())
    }

    /// Explanations carry no hard per-field budget.
    fn translate_unbounded(&self, text: &str) -> String {
        let Some(translator) = self.translator else {
            return pending_placeholder(text);
        };
        match translator.translate(text, None) {
            Ok(t) => t,
            Err(e) => failed_placeholder(text, &e),
        }
    }
}

impl Default for QuestionBuilder<'_> {
    fn default() -> Self {
        Self::new()
    }
}

fn head(text: &str) -> String {
    text.chars().take(30).collect()
}

fn pending_placeholder(text: &str) -> String {
    format!("[Translation pending: {}...]", head(text))
}

fn failed_placeholder(text: &str, error: &TranslationError) -> String {
    warn!(error = %error, "translation failed, using placeholder");
    format!("[Translation failed: {}...]", head(text))
}
