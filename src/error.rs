use thiserror::Error;

use crate::audit::AuditReport;

/// The main error type for photoseq operations.
///
/// Per-line listing problems are never errors — the pipeline skips them
/// (see [`crate::listing::parser`]). This type covers the fallible outer
/// surfaces: file reading, JSON output, and strict-mode auditing.
#[derive(Debug, Error)]
pub enum PhotoseqError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize records to JSON: {source}")]
    RecordsJson {
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to serialize audit report to JSON: {source}")]
    ReportJson {
        #[source]
        source: serde_json::Error,
    },

    #[error("Audit rejected {rejected_count} line(s)")]
    AuditFailed {
        rejected_count: usize,
        report: AuditReport,
    },
}
