//! Ledger model and reconciler tests.

use curio_core::config::CategoryTable;
use curio_core::errors::LedgerError;
use curio_core::question::Difficulty;
use curio_ledger::{Ledger, QuestionSummary, Reconciler};
use test_fixtures::load_fixture_text;

// ─── Helpers ─────────────────────────────────────────────────────────────────

fn golden_ledger() -> Ledger {
    Ledger::parse(&load_fixture_text("golden/ledger/master_list.md")).unwrap()
}

fn summary(text: &str, difficulty: Difficulty) -> QuestionSummary {
    QuestionSummary {
        text: text.to_string(),
        difficulty,
    }
}

// ─── Parse / Serialize ───────────────────────────────────────────────────────

#[test]
fn golden_document_round_trips_byte_identically() {
    let text = load_fixture_text("golden/ledger/master_list.md");
    let ledger = Ledger::parse(&text).unwrap();
    assert_eq!(ledger.to_text(), text);
}

#[test]
fn parse_recognizes_sections_and_entries() {
    let ledger = golden_ledger();
    assert_eq!(ledger.sections.len(), 3);
    assert_eq!(ledger.total_entries(), 22);
    assert_eq!(ledger.max_sequence(), 22);

    let animals = ledger.section("Animal Behavior").unwrap();
    assert_eq!(animals.entries().count(), 20);
    let first = animals.entries().next().unwrap();
    assert_eq!(first.seq, 1);
    assert_eq!(first.difficulty, Difficulty::Medium);
}

#[test]
fn prose_lines_survive_in_place() {
    let ledger = golden_ledger();
    let summary_section = ledger.section("Summary").unwrap();
    assert_eq!(summary_section.entries().count(), 0);
    assert!(summary_section.lines.iter().any(|l| matches!(
        l,
        curio_ledger::Line::Text(t) if t.contains("Difficulty mix")
    )));
}

#[test]
fn numbered_line_with_foreign_schema_is_rejected() {
    let text = "# Title\n\n## Animal Behavior\n\n1. Some question | Animals | done | animals.json | anim_001\n";
    match Ledger::parse(text) {
        Err(LedgerError::MalformedEntry { line, .. }) => assert_eq!(line, 5),
        other => panic!("expected MalformedEntry, got {other:?}"),
    }
}

#[test]
fn heading_with_count_suffix_still_matches() {
    let text = "## Animal Behavior (20)\n\n1. Why do cats purr? [medium]\n";
    let ledger = Ledger::parse(text).unwrap();
    assert!(ledger.section("Animal Behavior").is_some());
}

// ─── Insertion ───────────────────────────────────────────────────────────────

#[test]
fn insert_continues_the_global_sequence() {
    let mut ledger = golden_ledger();
    let table = CategoryTable::default();
    let reconciler = Reconciler::new(&table);

    // The Animal Behavior section tops out at seq 20, but Astronomy holds
    // 21-22: new entries must continue from the document-wide maximum.
    let assigned = reconciler
        .add_questions(
            &mut ledger,
            "Animals",
            &[
                summary("Why do elephants flap their ears?", Difficulty::Easy),
                summary("Why do geckos stick to walls?", Difficulty::Medium),
            ],
        )
        .unwrap();

    assert_eq!(assigned, vec![23, 24]);
    assert_eq!(ledger.max_sequence(), 24);

    let animals = ledger.section("Animal Behavior").unwrap();
    let last: Vec<_> = animals.entries().rev().take(2).collect();
    assert_eq!(last[0].text, "Why do geckos stick to walls?");
    assert_eq!(last[1].text, "Why do elephants flap their ears?");
}

#[test]
fn insert_lands_before_the_next_section() {
    let mut ledger = golden_ledger();
    let table = CategoryTable::default();
    Reconciler::new(&table)
        .add_questions(
            &mut ledger,
            "Animals",
            &[summary("Why do camels chew sideways?", Difficulty::Easy)],
        )
        .unwrap();

    let text = ledger.to_text();
    let inserted = text.find("23. Why do camels chew sideways?").unwrap();
    let astronomy = text.find("## Astronomy & Space").unwrap();
    assert!(inserted < astronomy);
}

#[test]
fn missing_section_fails_without_mutation() {
    let mut ledger = golden_ledger();
    let before = ledger.to_text();
    let table = CategoryTable::default();

    // Physics is a known category but has no section in this ledger.
    let err = Reconciler::new(&table)
        .add_questions(
            &mut ledger,
            "Physics",
            &[summary("Why is ice slippery?", Difficulty::Hard)],
        )
        .unwrap_err();

    assert!(matches!(err, LedgerError::SectionNotFound { .. }));
    assert_eq!(ledger.to_text(), before);
}

#[test]
fn unknown_category_fails_without_mutation() {
    let mut ledger = golden_ledger();
    let before = ledger.to_text();
    let table = CategoryTable::default();

    let err = Reconciler::new(&table)
        .add_questions(
            &mut ledger,
            "Geology",
            &[summary("Why do volcanoes erupt?", Difficulty::Medium)],
        )
        .unwrap_err();

    assert!(matches!(err, LedgerError::UnknownCategory { .. }));
    assert_eq!(ledger.to_text(), before);
}

#[test]
fn insert_into_empty_section_starts_after_heading() {
    let text = "## Plant Science\n\nNo entries yet.\n";
    let mut ledger = Ledger::parse(text).unwrap();
    ledger
        .insert_entries(
            "Plant Science",
            vec![("Why are leaves green?".to_string(), Difficulty::Easy)],
        )
        .unwrap();

    let out = ledger.to_text();
    let entry = out.find("1. Why are leaves green? [easy]").unwrap();
    let prose = out.find("No entries yet.").unwrap();
    assert!(entry < prose);
}

// ─── Totals ──────────────────────────────────────────────────────────────────

#[test]
fn update_totals_is_idempotent() {
    let mut ledger = golden_ledger();
    ledger.update_totals();
    let once = ledger.to_text();
    ledger.update_totals();
    let twice = ledger.to_text();
    assert_eq!(once, twice);
}

#[test]
fn totals_track_insertions() {
    let mut ledger = golden_ledger();
    let table = CategoryTable::default();
    let reconciler = Reconciler::new(&table);

    let before = reconciler.update_totals(&mut ledger);
    assert_eq!(before, 22);

    reconciler
        .add_questions(
            &mut ledger,
            "Animals",
            &[
                summary("Why do elephants flap their ears?", Difficulty::Easy),
                summary("Why do geckos stick to walls?", Difficulty::Medium),
            ],
        )
        .unwrap();

    let after = reconciler.update_totals(&mut ledger);
    assert_eq!(after, before + 2);

    let text = ledger.to_text();
    assert!(text.contains("# Master Question List - All 24 Questions"));
    assert!(text.contains("**Total Questions**: 24"));
}

// ─── Property Tests ──────────────────────────────────────────────────────────

mod properties {
    use super::*;
    use proptest::prelude::*;

    fn difficulty_strategy() -> impl Strategy<Value = Difficulty> {
        prop_oneof![
            Just(Difficulty::Easy),
            Just(Difficulty::Medium),
            Just(Difficulty::Hard),
        ]
    }

    proptest! {
        /// Inserting n entries always grows the total and the global
        /// maximum sequence by exactly n.
        #[test]
        fn insertion_grows_sequence_by_count(
            texts in proptest::collection::vec("[A-Za-z][A-Za-z ]{0,40}[a-z?]", 1..8),
            difficulties in proptest::collection::vec(difficulty_strategy(), 8)
        ) {
            let mut ledger = golden_ledger();
            let before_total = ledger.total_entries();
            let before_max = ledger.max_sequence();

            let entries: Vec<(String, Difficulty)> = texts
                .iter()
                .zip(difficulties.iter())
                .map(|(t, d)| (t.clone(), *d))
                .collect();
            let n = entries.len();
            ledger.insert_entries("Animal Behavior", entries).unwrap();

            prop_assert_eq!(ledger.total_entries(), before_total + n);
            prop_assert_eq!(ledger.max_sequence(), before_max + n);

            // The mutated document still parses to the same structure.
            let reparsed = Ledger::parse(&ledger.to_text()).unwrap();
            prop_assert_eq!(reparsed.total_entries(), before_total + n);
        }
    }
}
