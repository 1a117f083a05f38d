//! Core record model for photo listings.
//!
//! This module defines the canonical representation of a single photo entry.
//! The parser constructs records from listing lines, and the namer fills in
//! the renamed filename exactly once.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A single photo entry parsed from a listing line.
///
/// A record only exists if its source line had exactly three non-empty
/// comma-space-delimited fields and a parsable capture timestamp. The
/// `renamed_filename` starts out `None` and is populated once by the
/// sequence namer; it is never recomputed afterwards.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PhotoRecord {
    /// Original filename including its extension (e.g. `myFriends.png`).
    pub filename: String,

    /// Location tag the photo belongs to. Used as a case-sensitive,
    /// exact-match grouping key and as the prefix of the renamed filename.
    pub location: String,

    /// Capture timestamp with second precision. Only used for ordering
    /// within a location group.
    pub timestamp: NaiveDateTime,

    /// The assigned `<location><sequence><extension>` name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub renamed_filename: Option<String>,
}

impl PhotoRecord {
    /// Creates a record with no assigned name yet.
    pub fn new(
        filename: impl Into<String>,
        location: impl Into<String>,
        timestamp: NaiveDateTime,
    ) -> Self {
        Self {
            filename: filename.into(),
            location: location.into(),
            timestamp,
            renamed_filename: None,
        }
    }
}
