//! Sequence-name assignment for location groups.
//!
//! Each group's records are ranked by capture timestamp and renamed to
//! `<location><sequence><extension>`. The sequence is 1-based, dense, and
//! zero-padded to the decimal width of the group size, so all names within
//! one group have equal-length numeric suffixes (`Krakow01` .. `Krakow10`
//! for a ten-photo group, `London1`/`London2` for a two-photo group).
//!
//! The location tag is an opaque prefix: it is concatenated as-is, even if
//! it happens to end in digits. Callers that need unambiguous parsing of
//! the output must account for that themselves.

use std::path::Path;

use super::grouping::LocationGroup;
use super::model::PhotoRecord;

/// Zero-pad width for a group: the number of decimal digits in its size.
///
/// Group size 9 pads to width 1, size 10 to width 2, size 100 to width 3.
pub fn pad_width(group_size: usize) -> usize {
    group_size.to_string().len()
}

/// The filename's extension including the leading dot, or `""` if the
/// filename has none.
///
/// Follows `Path::extension` semantics: `"archive.tar.gz"` yields `".gz"`,
/// and a leading-dot name like `".hidden"` has no extension.
pub fn file_extension(filename: &str) -> String {
    Path::new(filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| format!(".{ext}"))
        .unwrap_or_default()
}

/// Assign renamed filenames to every record, group by group.
///
/// Within a group, records are ranked by ascending timestamp; the sort is
/// stable, so records sharing an identical timestamp keep their original
/// input order. Each record's `renamed_filename` is written exactly once.
pub fn assign_sequence_names(records: &mut [PhotoRecord], groups: &[LocationGroup]) {
    for group in groups {
        let width = pad_width(group.len());

        let mut ranked = group.member_indices.clone();
        ranked.sort_by_key(|&index| records[index].timestamp);

        for (rank, &index) in ranked.iter().enumerate() {
            let extension = file_extension(&records[index].filename);
            records[index].renamed_filename = Some(format!(
                "{}{:0width$}{}",
                group.location,
                rank + 1,
                extension,
            ));
        }
    }
}
