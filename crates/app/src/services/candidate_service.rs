//! Candidate service — use-cases for the candidate collection.

use tally_domain::candidate::{Candidate, VoteCounts};
use tally_domain::error::TallyError;

use crate::ports::CandidateRepository;

/// Application service for candidate CRUD operations.
pub struct CandidateService<R> {
    repo: R,
}

impl<R: CandidateRepository> CandidateService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// List all candidates in insertion order.
    pub async fn list_candidates(&self) -> Vec<Candidate> {
        self.repo.get_all().await
    }

    /// Create a candidate with zeroed vote counters and the next free id.
    ///
    /// Names are taken as-is: the empty string is legal and uniqueness is
    /// not enforced.
    #[tracing::instrument(skip(self, name), fields(candidate_name = %name))]
    pub async fn create_candidate(&self, name: String) -> Candidate {
        self.repo.create(name).await
    }

    /// Replace both vote counters of the candidate at `position`.
    ///
    /// # Errors
    ///
    /// Returns [`TallyError::NotFound`] when `position` is outside the
    /// sequence.
    #[tracing::instrument(skip(self))]
    pub async fn update_votes(
        &self,
        position: usize,
        votes: VoteCounts,
    ) -> Result<Candidate, TallyError> {
        self.repo.update_votes_at(position, votes).await
    }

    /// Remove the candidate at `position`, shifting later records left.
    ///
    /// # Errors
    ///
    /// Returns [`TallyError::NotFound`] when `position` is outside the
    /// sequence.
    #[tracing::instrument(skip(self))]
    pub async fn delete_candidate(&self, position: usize) -> Result<(), TallyError> {
        self.repo.remove_at(position).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::future::Future;
    use std::sync::Mutex;
    use tally_domain::error::NotFoundError;

    struct SeqCandidateRepo {
        inner: Mutex<Inner>,
    }

    struct Inner {
        candidates: Vec<Candidate>,
        next_id: u64,
    }

    impl Default for SeqCandidateRepo {
        fn default() -> Self {
            Self {
                inner: Mutex::new(Inner {
                    candidates: Vec::new(),
                    next_id: 0,
                }),
            }
        }
    }

    impl CandidateRepository for SeqCandidateRepo {
        fn get_all(&self) -> impl Future<Output = Vec<Candidate>> + Send {
            let candidates = self.inner.lock().unwrap().candidates.clone();
            async move { candidates }
        }

        fn create(&self, name: String) -> impl Future<Output = Candidate> + Send {
            let mut inner = self.inner.lock().unwrap();
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
            let mut inner = self.inner.lock().unwrap();
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
            let mut inner = self.inner.lock().unwrap();
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

    fn make_service() -> CandidateService<SeqCandidateRepo> {
        CandidateService::new(SeqCandidateRepo::default())
    }

    #[tokio::test]
    async fn should_create_candidate_with_zeroed_counters() {
        let svc = make_service();
        let created = svc.create_candidate("New Act".to_string()).await;
        assert_eq!(created.name, "New Act");
        assert_eq!(created.band_votes, 0);
        assert_eq!(created.album_votes, 0);
    }

    #[tokio::test]
    async fn should_assign_strictly_increasing_ids() {
        let svc = make_service();
        let first = svc.create_candidate("First".to_string()).await;
        let second = svc.create_candidate("Second".to_string()).await;
        let third = svc.create_candidate("Third".to_string()).await;
        assert!(second.id > first.id);
        assert!(third.id > second.id);
    }

    #[tokio::test]
    async fn should_accept_empty_name() {
        let svc = make_service();
        let created = svc.create_candidate(String::new()).await;
        assert_eq!(created.name, "");
    }

    #[tokio::test]
    async fn should_list_in_creation_order() {
        let svc = make_service();
        svc.create_candidate("First".to_string()).await;
        svc.create_candidate("Second".to_string()).await;

        let all = svc.list_candidates().await;
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].name, "First");
        assert_eq!(all[1].name, "Second");
    }

    #[tokio::test]
    async fn should_update_votes_without_touching_id_or_name() {
        let svc = make_service();
        let created = svc.create_candidate("Act".to_string()).await;

        let updated = svc
            .update_votes(
                0,
                VoteCounts {
                    band_votes: 5,
                    album_votes: 2,
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.band_votes, 5);
        assert_eq!(updated.album_votes, 2);
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.name, "Act");
    }

    #[tokio::test]
    async fn should_return_not_found_when_updating_out_of_range() {
        let svc = make_service();
        let result = svc
            .update_votes(
                999,
                VoteCounts {
                    band_votes: 1,
                    album_votes: 1,
                },
            )
            .await;
        assert!(matches!(result, Err(TallyError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_shift_later_positions_when_deleting() {
        let svc = make_service();
        svc.create_candidate("First".to_string()).await;
        svc.create_candidate("Second".to_string()).await;
        svc.create_candidate("Third".to_string()).await;

        svc.delete_candidate(1).await.unwrap();

        let all = svc.list_candidates().await;
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].name, "First");
        assert_eq!(all[1].name, "Third");
    }

    #[tokio::test]
    async fn should_return_not_found_when_deleting_out_of_range() {
        let svc = make_service();
        svc.create_candidate("Only".to_string()).await;

        let result = svc.delete_candidate(1).await;
        assert!(matches!(result, Err(TallyError::NotFound(_))));
        assert_eq!(svc.list_candidates().await.len(), 1);
    }
}
