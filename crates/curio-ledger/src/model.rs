//! Ledger document model and parser/serializer.

use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use curio_core::errors::LedgerError;
use curio_core::question::Difficulty;
use regex::Regex;

/// The one entry-line pattern shared by scan, insert, format, and recount.
static ENTRY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d+)\.\s+(.+)\s+\[(easy|medium|hard)\]$").unwrap()
});

/// Recognizes a line that wants to be an entry (numbered) so malformed
/// entries are rejected instead of silently preserved as prose.
static NUMBERED_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+\.\s").unwrap());

/// Title and total lines managed by `update_totals`.
static TITLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^# Master Question List - All \d+ Questions$").unwrap());
static TOTAL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\*\*Total Questions\*\*: \d+$").unwrap());

/// One accepted question in the ledger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerEntry {
    /// Global sequence number, strictly increasing across the document.
    pub seq: usize,
    pub text: String,
    pub difficulty: Difficulty,
}

impl LedgerEntry {
    /// The canonical on-disk form.
    pub fn to_line(&self) -> String {
        format!("{}. {} [{}]", self.seq, self.text, self.difficulty.label())
    }
}

/// A line inside a section: an entry, or prose preserved verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    Entry(LedgerEntry),
    Text(String),
}

/// One `## <heading>` section and everything under it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerSection {
    pub heading: String,
    pub lines: Vec<Line>,
}

impl LedgerSection {
    pub fn entries(&self) -> impl DoubleEndedIterator<Item = &LedgerEntry> {
        self.lines.iter().filter_map(|l| match l {
            Line::Entry(e) => Some(e),
            Line::Text(_) => None,
        })
    }

    /// Whether this section is the one registered under `display_name`.
    /// Headings may carry a parenthesized count suffix.
    pub fn matches(&self, display_name: &str) -> bool {
        self.heading == display_name
            || self
                .heading
                .strip_prefix(display_name)
                .is_some_and(|rest| rest.trim_start().starts_with('('))
    }

    /// Index right after the last entry; for an entry-less section, after
    /// any leading blank lines. New entries go here, before trailing prose.
    fn insertion_index(&self) -> usize {
        let last_entry = self
            .lines
            .iter()
            .rposition(|l| matches!(l, Line::Entry(_)));
        match last_entry {
            Some(i) => i + 1,
            None => self
                .lines
                .iter()
                .position(|l| !matches!(l, Line::Text(t) if t.is_empty()))
                .unwrap_or(self.lines.len()),
        }
    }
}

/// The whole master-list document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ledger {
    /// Lines before the first section heading (title, totals, prose).
    pub preamble: Vec<String>,
    pub sections: Vec<LedgerSection>,
}

impl Ledger {
    /// Parse a document. Prose lines are kept verbatim; a numbered line
    /// inside a section that does not match the entry schema is rejected.
    pub fn parse(text: &str) -> Result<Self, LedgerError> {
        let mut preamble = Vec::new();
        let mut sections: Vec<LedgerSection> = Vec::new();

        for (idx, raw) in text.lines().enumerate() {
            if let Some(heading) = raw.strip_prefix("## ") {
                sections.push(LedgerSection {
                    heading: heading.trim().to_string(),
                    lines: Vec::new(),
                });
                continue;
            }

            match sections.last_mut() {
                None => preamble.push(raw.to_string()),
                Some(section) => {
                    if let Some(caps) = ENTRY_RE.captures(raw) {
                        // The regex only admits ASCII digits here.
                        let seq = caps[1].parse::<usize>().map_err(|_| {
                            LedgerError::MalformedEntry {
                                line: idx + 1,
                                text: raw.to_string(),
                            }
                        })?;
                        let difficulty = Difficulty::parse(&caps[3]).ok_or_else(|| {
                            LedgerError::MalformedEntry {
                                line: idx + 1,
                                text: raw.to_string(),
                            }
                        })?;
                        section.lines.push(Line::Entry(LedgerEntry {
                            seq,
                            text: caps[2].to_string(),
                            difficulty,
                        }));
                    } else if NUMBERED_RE.is_match(raw) {
                        return Err(LedgerError::MalformedEntry {
                            line: idx + 1,
                            text: raw.to_string(),
                        });
                    } else {
                        section.lines.push(Line::Text(raw.to_string()));
                    }
                }
            }
        }

        Ok(Self { preamble, sections })
    }

    /// Serialize back to the on-disk text form, with a trailing newline.
    pub fn to_text(&self) -> String {
        let mut out = Vec::new();
        out.extend(self.preamble.iter().cloned());
        for section in &self.sections {
            out.push(format!("## {}", section.heading));
            for line in &section.lines {
                match line {
                    Line::Entry(e) => out.push(e.to_line()),
                    Line::Text(t) => out.push(t.clone()),
                }
            }
        }
        let mut text = out.join("\n");
        text.push('\n');
        text
    }

    /// Read and parse a ledger file.
    pub fn load(path: &Path) -> Result<Self, LedgerError> {
        let text = fs::read_to_string(path).map_err(|e| LedgerError::Io {
            path: path.display().to_string(),
            source: e,
        })?;
        Self::parse(&text)
    }

    /// Serialize and write through a temp file renamed into place.
    pub fn save(&self, path: &Path) -> Result<(), LedgerError> {
        let tmp = path.with_extension("md.tmp");
        let io_err = |e| LedgerError::Io {
            path: path.display().to_string(),
            source: e,
        };
        fs::write(&tmp, self.to_text()).map_err(io_err)?;
        fs::rename(&tmp, path).map_err(io_err)
    }

    pub fn total_entries(&self) -> usize {
        self.sections.iter().map(|s| s.entries().count()).sum()
    }

    /// Highest sequence number anywhere in the document.
    pub fn max_sequence(&self) -> usize {
        self.sections
            .iter()
            .flat_map(|s| s.entries().map(|e| e.seq))
            .max()
            .unwrap_or(0)
    }

    pub fn section(&self, display_name: &str) -> Option<&LedgerSection> {
        self.sections.iter().find(|s| s.matches(display_name))
    }

    /// Append entries at the end of a section's entry run, numbering them
    /// from the global maximum. Fails without mutating when the section is
    /// absent.
    pub fn insert_entries(
        &mut self,
        display_name: &str,
        entries: Vec<(String, Difficulty)>,
    ) -> Result<Vec<usize>, LedgerError> {
        let mut seq = self.max_sequence();
        let section = self
            .sections
            .iter_mut()
            .find(|s| s.matches(display_name))
            .ok_or_else(|| LedgerError::SectionNotFound {
                section: display_name.to_string(),
            })?;

        let mut at = section.insertion_index();
        let mut assigned = Vec::with_capacity(entries.len());
        for (text, difficulty) in entries {
            seq += 1;
            section.lines.insert(
                at,
                Line::Entry(LedgerEntry {
                    seq,
                    text,
                    difficulty,
                }),
            );
            at += 1;
            assigned.push(seq);
        }
        Ok(assigned)
    }

    /// Recompute the declared totals from the entries actually present and
    /// rewrite the managed title/total lines. Returns the recount.
    /// Running this twice with no intervening insert changes nothing.
    pub fn update_totals(&mut self) -> usize {
        let total = self.total_entries();
        for line in &mut self.preamble {
            if TITLE_RE.is_match(line) {
                *line = format!("# Master Question List - All {total} Questions");
            } else if TOTAL_RE.is_match(line) {
                *line = format!("**Total Questions**: {total}");
            }
        }
        total
    }
}
