//! curio - corpus maintenance CLI.
//!
//! Subcommands: validate one or every category file (optionally with the
//! Wikipedia evidence stage), watch the corpus directory and revalidate on
//! change, inspect ID allocation, ingest a draft file, and recompute the
//! master-list totals.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use curio_core::config::LengthLimits;
use curio_core::models::{PipelineReport, Severity};
use curio_corpus::{CorpusStore, IdAllocator};
use curio_factcheck::{SourceTable, WikipediaEvidence};
use curio_ingest::{DraftFile, IngestOptions, IngestWorkflow};
use curio_ledger::{Ledger, Reconciler};
use curio_pipeline::{PipelineDriver, PipelineMode};
use curio_validation::ValidationEngine;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Command-line arguments for curio.
#[derive(Parser, Debug)]
#[command(name = "curio")]
#[command(about = "Bilingual trivia corpus validation and reconciliation")]
#[command(version)]
struct Args {
    /// Directory holding the per-category JSON documents
    #[arg(long, default_value = "data/questions", env = "CURIO_DATA_DIR", global = true)]
    data_dir: PathBuf,

    /// Master list document
    #[arg(
        long,
        default_value = "ALL_QUESTIONS_MASTER_LIST.md",
        env = "CURIO_MASTER_LIST",
        global = true
    )]
    master_list: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Validate one category file, or every file with --all
    Validate {
        /// Category filename (e.g. animals.json); resolved in the data dir
        file: Option<String>,
        /// Validate every JSON document in the data dir
        #[arg(long)]
        all: bool,
        /// Run the Wikipedia evidence stage
        #[arg(long)]
        evidence: bool,
        /// Keep running all stages after critical structural findings
        #[arg(long)]
        lenient: bool,
        /// Use the relaxed Chinese character budgets
        #[arg(long)]
        relaxed_limits: bool,
    },
    /// Watch the data dir and revalidate files as they change
    Watch {
        /// Poll interval in seconds
        #[arg(long, default_value = "2")]
        interval: u64,
    },
    /// Show the next free IDs for a category
    NextId {
        category: String,
        #[arg(long, default_value = "1")]
        count: usize,
    },
    /// Ingest a YAML draft file into the corpus
    Ingest {
        draft: PathBuf,
        /// Preview without writing
        #[arg(long)]
        dry_run: bool,
        /// Skip the post-write validation pipeline (not recommended)
        #[arg(long)]
        skip_validation: bool,
    },
    /// Create an empty document for a category from the table
    NewCategory { category: String },
    /// Recompute the master-list totals
    UpdateTotals,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "curio=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();
    let store = CorpusStore::new(&args.data_dir);

    match args.command {
        Command::Validate {
            file,
            all,
            evidence,
            lenient,
            relaxed_limits,
        } => validate(&args.data_dir, &store, file, all, evidence, lenient, relaxed_limits),
        Command::Watch { interval } => watch(&args.data_dir, interval),
        Command::NextId { category, count } => next_id(&store, &category, count),
        Command::Ingest {
            draft,
            dry_run,
            skip_validation,
        } => ingest(&store, &args.master_list, &draft, dry_run, skip_validation),
        Command::NewCategory { category } => {
            let path = store.create_category(&category)?;
            println!("created {}", path.display());
            Ok(())
        }
        Command::UpdateTotals => update_totals(&args.master_list),
    }
}

fn engine(relaxed: bool) -> ValidationEngine {
    let limits = if relaxed {
        LengthLimits::relaxed()
    } else {
        LengthLimits::strict()
    };
    ValidationEngine::new().with_limits(limits)
}

#[allow(clippy::too_many_arguments)]
fn validate(
    data_dir: &Path,
    store: &CorpusStore,
    file: Option<String>,
    all: bool,
    evidence: bool,
    lenient: bool,
    relaxed_limits: bool,
) -> Result<()> {
    let paths: Vec<PathBuf> = if all {
        store
            .list_documents()
            .with_context(|| format!("listing documents in {}", data_dir.display()))?
    } else {
        let name = file.context("pass a category filename or --all")?;
        let path = data_dir.join(&name);
        vec![if path.exists() { path } else { PathBuf::from(name) }]
    };
    anyhow::ensure!(!paths.is_empty(), "no JSON documents in {}", data_dir.display());

    let mode = if lenient {
        PipelineMode::Lenient
    } else {
        PipelineMode::Strict
    };
    let driver = PipelineDriver::new(engine(relaxed_limits))
        .with_mode(mode)
        .with_pacing(Duration::from_millis(500));

    let wikipedia;
    let driver = if evidence {
        wikipedia = WikipediaEvidence::new()?;
        driver.with_evidence(&wikipedia)
    } else {
        driver
    };

    let reports: Vec<PipelineReport> = paths.iter().map(|p| driver.run_file(p)).collect();
    for report in &reports {
        print_report(report);
    }
    if evidence {
        let sources = SourceTable::default();
        for report in &reports {
            if let Some(h) = &report.heuristics {
                let preferred = sources.for_category(&h.category);
                if !preferred.is_empty() {
                    println!("verify {} against: {}", h.category, preferred.join(", "));
                }
            }
        }
    }
    print_summary(&reports);

    if reports.iter().any(|r| !r.passed()) {
        std::process::exit(1);
    }
    Ok(())
}

fn print_report(report: &PipelineReport) {
    let verdict = if report.passed() { "PASS" } else { "FAIL" };
    println!("\n=== {} [{verdict}] ===", report.file);
    println!(
        "structure: {} ({} questions)",
        if report.structure.passed { "ok" } else { "failed" },
        report.structure.question_count
    );
    for issue in &report.structure.issues {
        println!("  [{}] {}", issue.severity, issue.message);
    }

    if let Some(heuristics) = &report.heuristics {
        println!(
            "confidence: {} high / {} medium / {} low",
            heuristics.high_confidence, heuristics.medium_confidence, heuristics.low_confidence
        );
        println!(
            "issues: {} critical, {} warnings",
            heuristics.critical_issues, heuristics.warnings
        );
        for result in &heuristics.results {
            for issue in &result.issues {
                if issue.severity >= Severity::Warning {
                    println!("  {} [{}] {}", issue.question_id, issue.severity, issue.message);
                    if let Some(s) = &issue.suggestion {
                        println!("      -> {s}");
                    }
                }
            }
        }
    }

    for (q_id, ev) in &report.evidence {
        println!(
            "evidence {}: {:?} ({} sources)",
            q_id,
            ev.confidence,
            ev.sources.len()
        );
    }
}

fn print_summary(reports: &[PipelineReport]) {
    let passed = reports.iter().filter(|r| r.passed()).count();
    let criticals: usize = reports.iter().map(|r| r.critical_issues()).sum();
    let warnings: usize = reports.iter().map(|r| r.warnings()).sum();
    println!("\n=== SUMMARY ===");
    println!("files: {} passed / {} total", passed, reports.len());
    println!("critical issues: {criticals}");
    println!("warnings: {warnings}");
}

/// Poll file modification times and revalidate whatever changed.
fn watch(data_dir: &Path, interval: u64) -> Result<()> {
    info!(dir = %data_dir.display(), interval, "watch mode started");
    let driver = PipelineDriver::new(ValidationEngine::new()).with_mode(PipelineMode::Lenient);
    let mut mtimes: HashMap<PathBuf, SystemTime> = HashMap::new();
    let mut initial_scan = true;

    loop {
        let entries = std::fs::read_dir(data_dir)
            .with_context(|| format!("reading {}", data_dir.display()))?;
        for entry in entries.filter_map(|e| e.ok()) {
            let path = entry.path();
            if !path.extension().is_some_and(|ext| ext == "json") {
                continue;
            }
            let Ok(modified) = entry.metadata().and_then(|m| m.modified()) else {
                continue;
            };
            let changed = mtimes.insert(path.clone(), modified) != Some(modified);
            if changed && !initial_scan {
                info!(file = %path.display(), "change detected");
                print_report(&driver.run_file(&path));
            }
        }
        initial_scan = false;
        std::thread::sleep(Duration::from_secs(interval));
    }
}

fn next_id(store: &CorpusStore, category: &str, count: usize) -> Result<()> {
    let allocator = IdAllocator::new(store);
    let info = allocator.category_info(category)?;
    println!("category: {}", info.name);
    println!("prefix:   {}", info.prefix);
    println!("file:     {} (exists: {})", info.filename, info.exists);
    println!("questions: {}", info.question_count);
    let ids = allocator.next_n_ids(category, count.max(1))?;
    println!("next ids: {}", ids.join(", "));
    Ok(())
}

fn ingest(
    store: &CorpusStore,
    master_list: &Path,
    draft_path: &Path,
    dry_run: bool,
    skip_validation: bool,
) -> Result<()> {
    let draft = DraftFile::load(draft_path)?;
    println!(
        "ingesting {} question(s) into {}",
        draft.questions.len(),
        draft.category
    );

    // Chinese fields not present in the draft become placeholders for a
    // later translation pass; wire a Translator here to fill them inline.
    let workflow = IngestWorkflow::new(store).with_ledger(master_list);
    let outcome = workflow.run(
        &draft,
        IngestOptions {
            dry_run,
            skip_validation,
        },
    )?;

    for (id, q) in outcome.ids.iter().zip(&outcome.questions) {
        println!("  {id}: {}", q.question_en);
    }
    if dry_run {
        println!("dry run: nothing written");
        return Ok(());
    }
    if let Some(report) = &outcome.report {
        print_report(report);
    }
    match (&outcome.ledger_warning, outcome.ledger_total) {
        (Some(warning), _) => println!("master list NOT updated: {warning}"),
        (None, Some(total)) => println!("master list updated, total questions: {total}"),
        _ => {}
    }
    Ok(())
}

fn update_totals(master_list: &Path) -> Result<()> {
    let mut ledger = Ledger::load(master_list)?;
    let table = curio_core::config::CategoryTable::default();
    let total = Reconciler::new(&table).update_totals(&mut ledger);
    ledger.save(master_list)?;
    println!("total questions: {total}");
    Ok(())
}
