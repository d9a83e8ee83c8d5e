use crate::errors::TranslationError;
use crate::question::Difficulty;

/// Text translation capability, backed by an external language-model
/// service. May fail; the caller decides between a recoverable placeholder
/// and a hard validation failure.
pub trait Translator: Send + Sync {
    /// Translate `text` to Simplified Chinese, optionally constrained to
    /// at most `max_chars` characters.
    fn translate(&self, text: &str, max_chars: Option<usize>)
        -> Result<String, TranslationError>;
}

/// Explanation generation capability.
pub trait Generator: Send + Sync {
    /// Produce one explanation per choice: affirmative for `correct`,
    /// negative for the rest.
    fn generate_explanations(
        &self,
        question: &str,
        choices: &[String],
        correct: usize,
        difficulty: Difficulty,
        category: &str,
    ) -> Result<[String; 4], TranslationError>;
}
