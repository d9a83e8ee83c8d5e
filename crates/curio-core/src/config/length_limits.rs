//! Per-field character budgets for mobile display.
//!
//! Two generations of the limit table exist in the corpus history: the
//! original strict Chinese budgets and a relaxed revision adopted for
//! translation clarity. Neither is hard-coded at use sites; checkers and
//! the question builder take the table as injected configuration.

use serde::{Deserialize, Serialize};

/// Character-count budgets. Counts are `char`s, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LengthLimits {
    pub question_en_max: usize,
    pub question_zh_max: usize,
    pub choice_en_max: usize,
    pub choice_zh_max: usize,
    /// Soft budget on the summed length of all four English explanations.
    /// Advisory only.
    pub explanation_total_soft_max: usize,
}

impl LengthLimits {
    /// Original limit table.
    pub fn strict() -> Self {
        Self {
            question_en_max: 45,
            question_zh_max: 25,
            choice_en_max: 35,
            choice_zh_max: 15,
            explanation_total_soft_max: 500,
        }
    }

    /// Relaxed Chinese budgets from the contextual-translation revision.
    pub fn relaxed() -> Self {
        Self {
            question_zh_max: 35,
            choice_zh_max: 25,
            ..Self::strict()
        }
    }
}

impl Default for LengthLimits {
    fn default() -> Self {
        Self::strict()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relaxed_only_widens_chinese_budgets() {
        let strict = LengthLimits::strict();
        let relaxed = LengthLimits::relaxed();
        assert_eq!(strict.question_en_max, relaxed.question_en_max);
        assert_eq!(strict.choice_en_max, relaxed.choice_en_max);
        assert!(relaxed.question_zh_max > strict.question_zh_max);
        assert!(relaxed.choice_zh_max > strict.choice_zh_max);
    }
}
