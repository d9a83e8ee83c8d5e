pub mod evidence;
pub mod issue;
pub mod pipeline_report;
pub mod validation_result;

pub use evidence::{EvidenceReport, EvidenceSource};
pub use issue::{IssueTag, Severity, ValidationIssue};
pub use pipeline_report::{PipelineReport, StructureOutcome};
pub use validation_result::{Confidence, FileReport, ValidationResult};
