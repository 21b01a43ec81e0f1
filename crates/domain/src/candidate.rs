//! Candidate — a named act tracked with two independent vote counters.

use serde::{Deserialize, Serialize};

/// A named act competing for best-band and best-album votes.
///
/// The wire representation uses camelCase counter names and keeps the field
/// order `name`, `bandVotes`, `albumVotes`, `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub name: String,
    pub band_votes: i64,
    pub album_votes: i64,
    pub id: u64,
}

impl Candidate {
    /// Create a candidate with both vote counters at zero.
    #[must_use]
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            band_votes: 0,
            album_votes: 0,
            id,
        }
    }
}

/// Replacement values for a candidate's two vote counters.
///
/// Counters are signed and unbounded; the store applies whatever the caller
/// supplies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VoteCounts {
    pub band_votes: i64,
    pub album_votes: i64,
}
