//! Location grouping for parsed photo records.
//!
//! Groups hold member *indices* into the parsed record sequence rather than
//! owned records. The rename pipeline computes names per group but returns
//! records in original input order, and index-based membership makes that
//! merge trivial: nothing is ever moved or cloned out of the input
//! sequence.
//!
//! Distinct locations keep first-seen insertion order (an explicit list of
//! groups plus a lookup map, not incidental hash-iteration order), so
//! iteration is deterministic for callers and tests.

use std::collections::HashMap;

use super::model::PhotoRecord;

/// All records sharing one location tag, in input order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LocationGroup {
    /// The shared location tag.
    pub location: String,

    /// Indices into the parsed record sequence, in original input order.
    pub member_indices: Vec<usize>,
}

impl LocationGroup {
    /// Number of records in this group. Never zero: a group only exists
    /// because at least one record carries its location.
    pub fn len(&self) -> usize {
        self.member_indices.len()
    }

    /// Whether the group has no members. Kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.member_indices.is_empty()
    }
}

/// Partition records by location tag.
///
/// Grouping trusts that records are already validated; it performs no
/// checks of its own. The match is case-sensitive and exact.
pub fn group_by_location(records: &[PhotoRecord]) -> Vec<LocationGroup> {
    let mut groups: Vec<LocationGroup> = Vec::new();
    let mut slot_by_location: HashMap<&str, usize> = HashMap::new();

    for (index, record) in records.iter().enumerate() {
        match slot_by_location.get(record.location.as_str()) {
            Some(&slot) => groups[slot].member_indices.push(index),
            None => {
                slot_by_location.insert(record.location.as_str(), groups.len());
                groups.push(LocationGroup {
                    location: record.location.clone(),
                    member_indices: vec![index],
                });
            }
        }
    }

    groups
}
