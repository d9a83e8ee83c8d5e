/// Curio toolkit version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Number of choices (and explanations) per question.
pub const CHOICE_COUNT: usize = 4;

/// Zero-padding width of the numeric suffix in question IDs (`anim_001`).
pub const ID_PAD_WIDTH: usize = 3;

/// Required prefix of the explanation attached to the correct choice.
pub const CORRECT_MARKER: &str = "Correct!";

/// Required prefix of every wrong-choice explanation.
pub const WRONG_MARKER: &str = "Wrong.";

/// Minimum trimmed character count for a non-degenerate explanation.
pub const MIN_EXPLANATION_CHARS: usize = 20;

/// Warning count above which a passing question drops to medium confidence.
pub const HIGH_CONFIDENCE_MAX_WARNINGS: usize = 2;

/// Fields every question record must carry.
pub const REQUIRED_QUESTION_FIELDS: [&str; 9] = [
    "id",
    "question_en",
    "question_zh",
    "choices_en",
    "choices_zh",
    "correct_answer",
    "explanations_en",
    "explanations_zh",
    "difficulty",
];
