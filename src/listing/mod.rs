//! Photo listing pipeline: parse, group, and rename.
//!
//! This module is the core of photoseq. It turns a newline-separated photo
//! listing into a sequence of [`PhotoRecord`]s whose renamed filenames
//! follow the `<location><sequence><extension>` scheme, where the sequence
//! number reflects chronological order within the record's location group,
//! zero-padded to the width of that group's size.
//!
//! Data flows one direction through the submodules:
//!
//! ```text
//! raw text -> parser (validated records)
//!          -> grouping (location groups)
//!          -> naming (sequence names)
//!          -> records in original input order
//! ```
//!
//! Grouping and sorting exist only to *compute* names; the returned
//! sequence always preserves original input line order. Malformed lines
//! are silently skipped (see [`parser`] for the rejection policy) — the
//! [`crate::audit`] module reports them when a caller wants strictness.
//!
//! Everything here is in-memory and side-effect free: no files are read,
//! written, or renamed.

pub mod grouping;
pub mod model;
pub mod naming;
pub mod parser;

pub use grouping::{group_by_location, LocationGroup};
pub use model::PhotoRecord;
pub use parser::{classify_line, parse_line, LineRejection};

/// Parse a photo listing and assign renamed filenames to every record.
///
/// Returns the successfully parsed records **in original input line
/// order**, each with `renamed_filename` populated. Malformed lines are
/// skipped and do not count toward any group's size or pad width. A
/// trimmed-empty input yields an empty sequence.
pub fn parse(data: &str) -> Vec<PhotoRecord> {
    if data.trim().is_empty() {
        return Vec::new();
    }

    let mut records: Vec<PhotoRecord> = data.split('\n').filter_map(parser::parse_line).collect();

    let groups = grouping::group_by_location(&records);
    naming::assign_sequence_names(&mut records, &groups);

    records
}

/// Parse a photo listing and return the renamed filenames joined with
/// `'\n'`, no trailing newline.
///
/// The convenience form of [`parse`] for callers that only want the names.
pub fn list_reformatted_filenames(data: &str) -> String {
    parse(data)
        .into_iter()
        .filter_map(|record| record.renamed_filename)
        .collect::<Vec<_>>()
        .join("\n")
}
