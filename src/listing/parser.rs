//! Line-level parsing for the photo listing format.
//!
//! # Listing Format Reference
//!
//! One photo per line, three fields joined by the literal `", "`
//! (comma-space) delimiter:
//!
//! ```text
//! <filename>, <location>, <timestamp>
//! ```
//!
//! Filenames, locations, and timestamps never contain commas, but stray
//! whitespace around any field is tolerated: every field is trimmed after
//! splitting. Timestamps must match one of the accepted layouts
//! (`YYYY-MM-DD HH:MM:SS`, the ISO-8601 `T` variant, or the slash
//! variant).
//!
//! # Rejection Policy
//!
//! Parsing is best-effort: a malformed line is rejected, never fatal.
//! [`parse_line`] collapses rejections to `None` for the rename pipeline,
//! while [`classify_line`] surfaces the reason so the audit layer can
//! report it. Both share one decision procedure, so the audit report can
//! never disagree with what the pipeline accepted.

use chrono::NaiveDateTime;

use super::model::PhotoRecord;

/// Field separator for listing lines. A bare comma is not a separator.
const FIELD_DELIMITER: &str = ", ";

/// Timestamp layouts accepted by the parser, tried in order.
const TIMESTAMP_FORMATS: [&str; 3] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y/%m/%d %H:%M:%S",
];

/// Why a listing line was rejected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LineRejection {
    /// The line did not split into exactly three `", "`-delimited fields.
    WrongFieldCount { found: usize },
    /// A field was empty after trimming surrounding whitespace.
    EmptyField { field: &'static str },
    /// The third field did not match any accepted timestamp layout.
    UnparsableTimestamp { raw: String },
}

/// Parse one listing line into a record, or `None` if the line is
/// malformed or blank.
///
/// This is the rejection-silent entry point used by the rename pipeline.
pub fn parse_line(line: &str) -> Option<PhotoRecord> {
    classify_line(line).ok().flatten()
}

/// Parse one listing line, surfacing the rejection reason.
///
/// Returns `Ok(None)` for blank (trimmed-empty) lines, which carry no
/// record and no diagnostic.
pub fn classify_line(line: &str) -> Result<Option<PhotoRecord>, LineRejection> {
    if line.trim().is_empty() {
        return Ok(None);
    }

    let fields: Vec<&str> = line.split(FIELD_DELIMITER).collect();
    if fields.len() != 3 {
        return Err(LineRejection::WrongFieldCount {
            found: fields.len(),
        });
    }

    // The delimiter already eats the space after each comma; trimming again
    // tolerates extra stray whitespace around any field.
    let filename = fields[0].trim();
    let location = fields[1].trim();
    let timestamp_raw = fields[2].trim();

    for (name, value) in [
        ("filename", filename),
        ("location", location),
        ("timestamp", timestamp_raw),
    ] {
        if value.is_empty() {
            return Err(LineRejection::EmptyField { field: name });
        }
    }

    let timestamp =
        parse_timestamp(timestamp_raw).ok_or_else(|| LineRejection::UnparsableTimestamp {
            raw: timestamp_raw.to_string(),
        })?;

    Ok(Some(PhotoRecord::new(filename, location, timestamp)))
}

fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
}

/// Fuzz-only entrypoint for single-line listing parsing.
#[cfg(feature = "fuzzing")]
pub fn fuzz_parse_line(input: &str) {
    let _ = classify_line(input);
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn datetime(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .expect("valid date")
            .and_hms_opt(h, mi, s)
            .expect("valid time")
    }

    #[test]
    fn parses_well_formed_line() {
        let record = parse_line("photo.jpg, Krakow, 2013-09-05 14:08:15")
            .expect("line should produce a record");

        assert_eq!(record.filename, "photo.jpg");
        assert_eq!(record.location, "Krakow");
        assert_eq!(record.timestamp, datetime(2013, 9, 5, 14, 8, 15));
        assert_eq!(record.renamed_filename, None);
    }

    #[test]
    fn trims_stray_whitespace_around_fields() {
        let record =
            parse_line(" a.jpg , X , 2020-01-01 00:00:00 ").expect("line should produce a record");

        assert_eq!(record.filename, "a.jpg");
        assert_eq!(record.location, "X");
        assert_eq!(record.timestamp, datetime(2020, 1, 1, 0, 0, 0));
    }

    #[test]
    fn accepts_alternate_timestamp_layouts() {
        assert!(parse_line("a.jpg, X, 2020-01-01T00:00:00").is_some());
        assert!(parse_line("a.jpg, X, 2020/01/01 00:00:00").is_some());
    }

    #[test]
    fn blank_lines_carry_no_record_and_no_rejection() {
        assert_eq!(classify_line(""), Ok(None));
        assert_eq!(classify_line("   "), Ok(None));
    }

    #[test]
    fn rejects_wrong_field_count() {
        let err = classify_line("photo.jpg, Krakow").unwrap_err();
        assert_eq!(err, LineRejection::WrongFieldCount { found: 2 });

        let err = classify_line("a.jpg, X, 2020-01-01 00:00:00, extra").unwrap_err();
        assert_eq!(err, LineRejection::WrongFieldCount { found: 4 });
    }

    #[test]
    fn bare_comma_is_not_a_separator() {
        // "a.jpg,X,2020-01-01 00:00:00" has no ", " at all.
        let err = classify_line("a.jpg,X,2020-01-01 00:00:00").unwrap_err();
        assert_eq!(err, LineRejection::WrongFieldCount { found: 1 });
    }

    #[test]
    fn rejects_empty_fields_after_trimming() {
        let err = classify_line(" , Krakow, 2013-09-05 14:08:15").unwrap_err();
        assert_eq!(err, LineRejection::EmptyField { field: "filename" });

        let err = classify_line("photo.jpg,  , 2013-09-05 14:08:15").unwrap_err();
        assert_eq!(err, LineRejection::EmptyField { field: "location" });
    }

    #[test]
    fn rejects_unparsable_timestamps() {
        let err = classify_line("photo.jpg, Krakow, not-a-date").unwrap_err();
        assert_eq!(
            err,
            LineRejection::UnparsableTimestamp {
                raw: "not-a-date".to_string(),
            }
        );

        // Out-of-range calendar values are rejected, not clamped.
        assert!(parse_line("photo.jpg, Krakow, 2013-13-41 14:08:15").is_none());
    }

    #[test]
    fn parse_line_is_silent_about_rejections() {
        assert!(parse_line("just one field").is_none());
        assert!(parse_line("a.jpg, X, yesterday").is_none());
    }
}
