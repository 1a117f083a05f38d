//! Listing audit: report the lines the rename pipeline would skip.
//!
//! [`crate::listing::parse`] is deliberately best-effort — malformed lines
//! vanish without a trace, and a caller wanting strictness would otherwise
//! have to diff input line counts against output record counts. This
//! module runs the same line classifier over a listing without renaming
//! anything and reports every rejection with its line number and reason.
//!
//! Blank lines carry no record and no diagnostic, matching how the
//! pipeline treats whole-input emptiness.

mod report;

pub use report::{AuditIssue, AuditReport, IssueCode};

use crate::listing::parser::{classify_line, LineRejection};

/// Scan a listing and report every line the rename pipeline would reject.
///
/// Uses the same classification as [`crate::listing::parse`], so a clean
/// report guarantees `parse` accepts every non-blank line.
pub fn audit_listing(data: &str) -> AuditReport {
    let mut report = AuditReport::new();

    if data.trim().is_empty() {
        return report;
    }

    for (line_index, line) in data.split('\n').enumerate() {
        let line_num = line_index + 1;

        match classify_line(line) {
            Ok(Some(_)) => {
                report.total_lines += 1;
                report.accepted += 1;
            }
            Ok(None) => {} // blank line
            Err(rejection) => {
                report.total_lines += 1;
                report.add(issue_for(line_num, rejection));
            }
        }
    }

    report
}

fn issue_for(line_num: usize, rejection: LineRejection) -> AuditIssue {
    match rejection {
        LineRejection::WrongFieldCount { found } => AuditIssue::new(
            line_num,
            IssueCode::WrongFieldCount,
            format!("expected 3 comma-space fields, found {}", found),
        ),
        LineRejection::EmptyField { field } => AuditIssue::new(
            line_num,
            IssueCode::EmptyField,
            format!("{} is empty after trimming", field),
        ),
        LineRejection::UnparsableTimestamp { raw } => AuditIssue::new(
            line_num,
            IssueCode::UnparsableTimestamp,
            format!("'{}' matches no accepted timestamp layout", raw),
        ),
    }
}
