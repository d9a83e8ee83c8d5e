//! Integration tests for the validation checks and engine.

use curio_core::config::LengthLimits;
use curio_core::models::{Confidence, Severity};
use curio_core::question::CategoryDocument;
use curio_validation::checks::{consistency, convention, length, red_flags, schema};
use curio_validation::ValidationEngine;
use serde_json::{json, Value};

// ─── Helpers ─────────────────────────────────────────────────────────────────

/// A question that passes every check with zero issues.
fn valid_question() -> Value {
    json!({
        "id": "anim_001",
        "question_en": "Why do cats purr?",
        "question_zh": "猫为什么会发出呼噜声？",
        "choices_en": ["To scare dogs", "To communicate and heal", "Only when angry", "By accident"],
        "choices_zh": ["吓唬狗", "交流与自愈", "只在生气时", "纯属偶然"],
        "correct_answer": 1,
        "explanations_en": [
            "Wrong. Purring is not a threat display aimed at other species.",
            "Correct! Cats purr to communicate contentment, and the vibrations may aid healing.",
            "Wrong. Cats purr in many situations, including when relaxed or nursing.",
            "Wrong. Purring is produced deliberately by the laryngeal muscles."
        ],
        "explanations_zh": [
            "错。呼噜声不是用来威胁其他动物的。",
            "对！猫用呼噜声表达满足，振动还可能帮助恢复。",
            "错。猫在放松或哺乳时也会发出呼噜声。",
            "错。呼噜声是喉部肌肉主动产生的。"
        ],
        "difficulty": "medium"
    })
}

fn doc_with(questions: Vec<Value>) -> CategoryDocument {
    CategoryDocument {
        category_en: "Animal Behavior".to_string(),
        category_zh: "动物行为".to_string(),
        questions,
    }
}

fn severities(issues: &[curio_core::models::ValidationIssue], severity: Severity) -> usize {
    issues.iter().filter(|i| i.severity == severity).count()
}

// ─── Schema Check ────────────────────────────────────────────────────────────

#[test]
fn valid_question_has_zero_critical_issues() {
    let issues = schema::check(&valid_question());
    assert!(issues.is_empty());
}

#[test]
fn each_missing_field_yields_exactly_one_critical() {
    for field in [
        "id",
        "question_en",
        "question_zh",
        "choices_en",
        "choices_zh",
        "correct_answer",
        "explanations_en",
        "explanations_zh",
        "difficulty",
    ] {
        let mut q = valid_question();
        q.as_object_mut().unwrap().remove(field);
        let issues = schema::check(&q);
        let missing: Vec<_> = issues
            .iter()
            .filter(|i| i.message.contains("Missing required field"))
            .collect();
        assert_eq!(missing.len(), 1, "field {field}");
        assert_eq!(missing[0].severity, Severity::Critical);
    }
}

#[test]
fn wrong_choice_count_is_critical() {
    let mut q = valid_question();
    q["choices_en"] = json!(["only", "three", "choices"]);
    let issues = schema::check(&q);
    assert_eq!(severities(&issues, Severity::Critical), 1);
    assert!(issues[0].message.contains("exactly 4"));
}

#[test]
fn out_of_range_answer_index_is_critical() {
    for bad in [json!(4), json!(-1), json!("1"), json!(1.5)] {
        let mut q = valid_question();
        q["correct_answer"] = bad;
        let issues = schema::check(&q);
        assert_eq!(severities(&issues, Severity::Critical), 1);
    }
}

#[test]
fn empty_record_does_not_fault_any_check() {
    let q = json!({});
    schema::check(&q);
    length::check(&q, &LengthLimits::strict());
    convention::check(&q);
    consistency::check(&q);
    red_flags::check(&q, "Animal Behavior", &Default::default(), &Default::default());
}

// ─── Length Check ────────────────────────────────────────────────────────────

#[test]
fn overlong_english_question_is_a_warning() {
    let mut q = valid_question();
    q["question_en"] = json!("Why do cats purr even when nothing around them seems to change?");
    let issues = length::check(&q, &LengthLimits::strict());
    assert_eq!(severities(&issues, Severity::Warning), 1);
    assert!(issues[0].message.contains("question_en too long"));
}

#[test]
fn chinese_budgets_count_chars_not_bytes() {
    let mut q = valid_question();
    // 10 CJK chars: 30 UTF-8 bytes, well under the 25-char budget.
    q["question_zh"] = json!("猫猫猫猫猫猫猫猫猫猫");
    let issues = length::check(&q, &LengthLimits::strict());
    assert!(issues.is_empty());
}

#[test]
fn relaxed_limits_accept_what_strict_flags() {
    let mut q = valid_question();
    // 20 chars: over the strict 15-char choice budget, inside the relaxed 25.
    q["choices_zh"][0] = json!("这是一个很长很长很长很长的选项文字内容");
    assert_eq!(
        severities(&length::check(&q, &LengthLimits::strict()), Severity::Warning),
        1
    );
    assert!(length::check(&q, &LengthLimits::relaxed()).is_empty());
}

#[test]
fn explanation_total_overrun_is_info_only() {
    let mut q = valid_question();
    let long = format!("Wrong. {}", "x".repeat(200));
    q["explanations_en"] = json!([long, long, long, "Correct! This one is within budget limits."]);
    let issues = length::check(&q, &LengthLimits::strict());
    assert_eq!(severities(&issues, Severity::Info), 1);
    assert_eq!(severities(&issues, Severity::Warning), 0);
}

// ─── Convention Check ────────────────────────────────────────────────────────

#[test]
fn missing_correct_marker_is_one_warning() {
    let mut q = valid_question();
    q["explanations_en"][1] =
        json!("Cats purr to communicate contentment, and the vibrations may aid healing.");
    let issues = convention::check(&q);
    assert_eq!(severities(&issues, Severity::Warning), 1);
    assert!(issues[0].message.contains("Correct!"));
}

#[test]
fn each_unmarked_wrong_explanation_warns() {
    let mut q = valid_question();
    q["explanations_en"][0] = json!("Purring is not a threat display aimed at other species.");
    q["explanations_en"][2] = json!("Cats purr in many situations, including when relaxed.");
    let issues = convention::check(&q);
    assert_eq!(severities(&issues, Severity::Warning), 2);
}

#[test]
fn degenerate_explanation_is_critical() {
    let mut q = valid_question();
    q["explanations_en"][3] = json!("Wrong.");
    let issues = convention::check(&q);
    assert_eq!(severities(&issues, Severity::Critical), 1);
    // "Wrong." satisfies the marker, so no warning alongside the critical.
    assert_eq!(severities(&issues, Severity::Warning), 0);
}

#[test]
fn convention_check_skips_wrong_shaped_records() {
    let mut q = valid_question();
    q["explanations_en"] = json!(["Wrong. Only two entries here.", "Correct! Still short."]);
    assert!(convention::check(&q).is_empty());
}

// ─── Consistency Check ───────────────────────────────────────────────────────

#[test]
fn contradictory_correct_choice_warns() {
    let mut q = valid_question();
    q["correct_answer"] = json!(0);
    q["choices_en"][0] = json!("It doesn't affect healing");
    q["explanations_en"][0] =
        json!("Correct! The purring vibration does support tissue recovery in cats.");
    let issues = consistency::check(&q);
    assert_eq!(severities(&issues, Severity::Warning), 1);
    assert!(issues[0].message.contains("contradiction"));
}

#[test]
fn contradiction_scan_ignores_wrong_choices() {
    let mut q = valid_question();
    // Negation in a wrong choice: same tokens, no signal.
    q["choices_en"][0] = json!("It doesn't affect healing");
    q["explanations_en"][0] = json!("Wrong. The vibration does support tissue recovery.");
    assert!(consistency::check(&q).is_empty());
}

// ─── Red-Flag Scan ───────────────────────────────────────────────────────────

#[test]
fn overgeneralization_token_is_info() {
    let mut q = valid_question();
    q["explanations_en"][1] = json!("Correct! Cats always purr when they feel contentment.");
    let issues = red_flags::check(
        &q,
        "Animal Behavior",
        &Default::default(),
        &Default::default(),
    );
    assert_eq!(severities(&issues, Severity::Info), 1);
    assert!(issues[0].message.contains("always"));
}

#[test]
fn misconception_phrase_warns_with_corrective_note() {
    let mut q = valid_question();
    q["explanations_en"][2] =
        json!("Wrong. The dark side of the Moon is not permanently unlit at night.");
    let issues = red_flags::check(
        &q,
        "Astronomy & Space",
        &Default::default(),
        &Default::default(),
    );
    let warnings: Vec<_> = issues
        .iter()
        .filter(|i| i.severity == Severity::Warning)
        .collect();
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].suggestion.as_deref().unwrap().contains("far side"));
}

#[test]
fn misconception_scan_is_category_scoped() {
    let mut q = valid_question();
    q["explanations_en"][2] =
        json!("Wrong. The dark side of the Moon is not permanently unlit at night.");
    let issues = red_flags::check(
        &q,
        "Animal Behavior",
        &Default::default(),
        &Default::default(),
    );
    assert_eq!(severities(&issues, Severity::Warning), 0);
}

// ─── Engine ──────────────────────────────────────────────────────────────────

#[test]
fn engine_collects_issues_across_all_checks() {
    let mut q = valid_question();
    q.as_object_mut().unwrap().remove("difficulty"); // schema critical
    q["explanations_en"][0] = json!("Purring is not a threat display aimed at other species."); // marker warning
    let result = ValidationEngine::new().validate_question(&q, "Animal Behavior");
    assert!(result.count(Severity::Critical) >= 1);
    assert!(result.count(Severity::Warning) >= 1);
    assert_eq!(result.confidence, Confidence::Low);
    assert!(!result.passed);
}

#[test]
fn engine_passes_clean_question_at_high_confidence() {
    let result = ValidationEngine::new().validate_question(&valid_question(), "Animal Behavior");
    assert!(result.issues.is_empty());
    assert_eq!(result.confidence, Confidence::High);
    assert!(result.passed);
}

#[test]
fn document_rollup_counts_confidence_tiers() {
    let mut broken = valid_question();
    broken["id"] = json!("anim_002");
    broken["explanations_en"][3] = json!("Wrong.");

    let mut warned = valid_question();
    warned["id"] = json!("anim_003");
    warned["explanations_en"][0] = json!("Purring is not a threat display aimed at others.");
    warned["explanations_en"][2] = json!("Cats purr in many situations, even when relaxed.");
    warned["explanations_en"][3] = json!("Purring is produced deliberately by the larynx.");

    let report =
        ValidationEngine::new().validate_document(&doc_with(vec![valid_question(), broken, warned]));

    assert_eq!(report.total(), 3);
    assert_eq!(report.high_confidence, 1);
    assert_eq!(report.medium_confidence, 1);
    assert_eq!(report.low_confidence, 1);
    assert!(!report.passed());
}

#[test]
fn document_with_no_criticals_passes() {
    let report = ValidationEngine::new().validate_document(&doc_with(vec![valid_question()]));
    assert!(report.passed());
    assert_eq!(report.critical_issues, 0);
}
