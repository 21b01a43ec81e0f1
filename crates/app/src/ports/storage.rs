//! Storage port — the repository trait the store adapter implements.

use std::future::Future;

use tally_domain::candidate::{Candidate, VoteCounts};
use tally_domain::error::TallyError;

/// Ordered store of candidates plus a monotonically increasing id counter.
///
/// `get_all` and `create` are infallible: listing the backing sequence and
/// appending to it have no error conditions, and creation performs no
/// validation. `update_votes_at` and `remove_at` address records by
/// **zero-based position in the sequence** — not by the `id` field — and
/// fail with [`TallyError::NotFound`] when the position is out of range.
pub trait CandidateRepository {
    /// Current sequence of candidates, in insertion order.
    fn get_all(&self) -> impl Future<Output = Vec<Candidate>> + Send;

    /// Append a candidate with the given name, zeroed counters, and the
    /// next id from the counter.
    fn create(&self, name: String) -> impl Future<Output = Candidate> + Send;

    /// Overwrite both vote counters of the record at `position` and return
    /// the updated record.
    fn update_votes_at(
        &self,
        position: usize,
        votes: VoteCounts,
    ) -> impl Future<Output = Result<Candidate, TallyError>> + Send;

    /// Remove the record at `position`; subsequent records shift left.
    fn remove_at(&self, position: usize) -> impl Future<Output = Result<(), TallyError>> + Send;
}
