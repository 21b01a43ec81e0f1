//! In-memory implementation of [`CandidateRepository`].

use std::future::Future;
use std::sync::{Mutex, MutexGuard};

use tally_app::ports::CandidateRepository;
use tally_domain::candidate::{Candidate, VoteCounts};
use tally_domain::error::{NotFoundError, TallyError};

/// Ordered in-memory candidate store.
///
/// Updates and deletes address records by position in the sequence, while
/// `id` is an independent counter that only moves forward — the two diverge
/// as soon as any record is deleted. Nothing is persisted; the store resets
/// on process restart.
pub struct MemoryCandidateRepository {
    inner: Mutex<Inner>,
}

struct Inner {
    candidates: Vec<Candidate>,
    next_id: u64,
}

impl MemoryCandidateRepository {
    /// Create an empty store with the id counter at zero.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                candidates: Vec::new(),
                next_id: 0,
            }),
        }
    }

    /// Create a store holding the two seed records, with the id counter
    /// already past them.
    #[must_use]
    pub fn seeded() -> Self {
        let candidates = vec![
            Candidate {
                name: "Dataray".to_string(),
                band_votes: 7,
                album_votes: 3,
                id: 0,
            },
            Candidate {
                name: "Bob and the Bobs".to_string(),
                band_votes: 8,
                album_votes: 0,
                id: 1,
            },
        ];
        Self {
            inner: Mutex::new(Inner {
                candidates,
                next_id: 2,
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().expect("candidate store poisoned")
    }
}

impl Default for MemoryCandidateRepository {
    fn default() -> Self {
        Self::new()
    }
}

// Each method mutates under the lock and releases it before returning its
// future; the guard is never held across an await point.
impl CandidateRepository for MemoryCandidateRepository {
    fn get_all(&self) -> impl Future<Output = Vec<Candidate>> + Send {
        let candidates = self.lock().candidates.clone();
        async move { candidates }
    }

    fn create(&self, name: String) -> impl Future<Output = Candidate> + Send {
        let mut inner = self.lock();
        let candidate = Candidate::new(inner.next_id, name);
        inner.next_id += 1;
        inner.candidates.push(candidate.clone());
        async move { candidate }
    }

    fn update_votes_at(
        &self,
        position: usize,
        votes: VoteCounts,
    ) -> impl Future<Output = Result<Candidate, TallyError>> + Send {
        let mut inner = self.lock();
        let result = match inner.candidates.get_mut(position) {
            Some(candidate) => {
                candidate.band_votes = votes.band_votes;
                candidate.album_votes = votes.album_votes;
                Ok(candidate.clone())
            }
            None => Err(NotFoundError {
                id: position.to_string(),
            }
            .into()),
        };
        async move { result }
    }

    fn remove_at(&self, position: usize) -> impl Future<Output = Result<(), TallyError>> + Send {
        let mut inner = self.lock();
        let result = if position < inner.candidates.len() {
            inner.candidates.remove(position);
            Ok(())
        } else {
            Err(NotFoundError {
                id: position.to_string(),
            }
            .into())
        };
        async move { result }
    }
}
