//! Category-aware reconciliation on top of the ledger model.

use curio_core::config::CategoryTable;
use curio_core::errors::LedgerError;
use curio_core::question::Difficulty;
use tracing::info;

use crate::model::Ledger;

/// What the reconciler needs to know about an accepted question.
#[derive(Debug, Clone)]
pub struct QuestionSummary {
    pub text: String,
    pub difficulty: Difficulty,
}

/// Inserts accepted questions into the right ledger section and keeps the
/// aggregate totals honest.
///
/// Categories resolve through the same [`CategoryTable`] the identifier
/// allocator uses; the section heading is the category's display name.
/// This reconciler does not auto-create sections: an absent section is an
/// error the ingestion caller reports as a warning, since ledger drift is
/// recoverable by hand and must never block accepted content.
pub struct Reconciler<'a> {
    table: &'a CategoryTable,
}

impl<'a> Reconciler<'a> {
    pub fn new(table: &'a CategoryTable) -> Self {
        Self { table }
    }

    /// Insert one entry per summary, in order, at the end of the
    /// category's section. Returns the assigned global sequence numbers.
    /// The ledger is untouched on failure.
    pub fn add_questions(
        &self,
        ledger: &mut Ledger,
        category: &str,
        summaries: &[QuestionSummary],
    ) -> Result<Vec<usize>, LedgerError> {
        let spec = self
            .table
            .get(category)
            .ok_or_else(|| LedgerError::UnknownCategory {
                name: category.to_string(),
            })?;

        let entries = summaries
            .iter()
            .map(|s| (s.text.clone(), s.difficulty))
            .collect();
        let assigned = ledger.insert_entries(&spec.display_name, entries)?;

        info!(
            category = %category,
            section = %spec.display_name,
            added = assigned.len(),
            "ledger entries inserted"
        );
        Ok(assigned)
    }

    /// Recompute and rewrite the document totals. Idempotent.
    pub fn update_totals(&self, ledger: &mut Ledger) -> usize {
        let total = ledger.update_totals();
        info!(total, "ledger totals updated");
        total
    }
}
