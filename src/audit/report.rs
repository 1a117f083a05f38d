//! Audit report types for structured rejection reporting.
//!
//! These types carry the per-line diagnostics the rename pipeline
//! deliberately withholds. They can be displayed to users, serialized to
//! JSON, or processed programmatically.

use std::fmt;

use serde::Serialize;

/// The result of auditing a photo listing.
#[derive(Clone, Debug, Default, Serialize)]
pub struct AuditReport {
    /// Number of non-blank lines examined.
    pub total_lines: usize,

    /// Number of lines that parsed into a record.
    pub accepted: usize,

    /// One entry per rejected line, in line order.
    pub issues: Vec<AuditIssue>,
}

impl AuditReport {
    /// Creates a new empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an issue to the report.
    pub fn add(&mut self, issue: AuditIssue) {
        self.issues.push(issue);
    }

    /// Returns the number of rejected lines.
    pub fn rejected_count(&self) -> usize {
        self.issues.len()
    }

    /// Returns true if every examined line parsed.
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }
}

impl fmt::Display for AuditReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.issues.is_empty() {
            return writeln!(
                f,
                "Audit passed: all {} line(s) parsed cleanly",
                self.total_lines
            );
        }

        writeln!(
            f,
            "Audit completed: {} of {} line(s) accepted, {} rejected:",
            self.accepted,
            self.total_lines,
            self.rejected_count()
        )?;
        writeln!(f)?;

        for issue in &self.issues {
            writeln!(f, "  {}", issue)?;
        }

        Ok(())
    }
}

/// A single rejected listing line.
#[derive(Clone, Debug, Serialize)]
pub struct AuditIssue {
    /// 1-based line number in the input.
    pub line: usize,

    /// A stable code for the rejection type.
    pub code: IssueCode,

    /// A human-readable description of the rejection.
    pub message: String,
}

impl AuditIssue {
    /// Creates a new issue.
    pub fn new(line: usize, code: IssueCode, message: impl Into<String>) -> Self {
        Self {
            line,
            code,
            message: message.into(),
        }
    }
}

impl fmt::Display for AuditIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[line {}] {:?}: {}", self.line, self.code, self.message)
    }
}

/// A stable code identifying why a line was rejected.
///
/// These codes can be used for filtering or programmatic handling of
/// audit results.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum IssueCode {
    /// The line did not split into exactly three comma-space fields.
    WrongFieldCount,
    /// A field was empty after trimming.
    EmptyField,
    /// The timestamp field matched no accepted layout.
    UnparsableTimestamp,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_report_displays_pass_line() {
        let report = AuditReport {
            total_lines: 3,
            accepted: 3,
            issues: vec![],
        };

        let rendered = report.to_string();
        assert!(rendered.contains("Audit passed"));
        assert!(rendered.contains("3 line(s)"));
    }

    #[test]
    fn issues_render_with_line_number_and_code() {
        let mut report = AuditReport {
            total_lines: 2,
            accepted: 1,
            issues: vec![],
        };
        report.add(AuditIssue::new(
            2,
            IssueCode::WrongFieldCount,
            "expected 3 comma-space fields, found 2",
        ));

        let rendered = report.to_string();
        assert!(rendered.contains("1 of 2 line(s) accepted"));
        assert!(rendered.contains("[line 2] WrongFieldCount: expected 3 comma-space fields"));
    }
}
