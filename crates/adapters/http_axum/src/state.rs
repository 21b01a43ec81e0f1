//! Shared application state for axum handlers.

use std::sync::Arc;

use tally_app::ports::CandidateRepository;
use tally_app::services::candidate_service::CandidateService;

/// Application state shared across all axum handlers.
///
/// Generic over the repository type to avoid dynamic dispatch. `Clone` is
/// implemented manually so the repository itself does not need to be
/// `Clone` — only the `Arc` wrapper is cloned.
pub struct AppState<CR> {
    /// Candidate CRUD service.
    pub candidate_service: Arc<CandidateService<CR>>,
}

impl<CR> Clone for AppState<CR> {
    fn clone(&self) -> Self {
        Self {
            candidate_service: Arc::clone(&self.candidate_service),
        }
    }
}

impl<CR> AppState<CR>
where
    CR: CandidateRepository + Send + Sync + 'static,
{
    /// Create a new application state from the candidate service.
    pub fn new(candidate_service: CandidateService<CR>) -> Self {
        Self {
            candidate_service: Arc::new(candidate_service),
        }
    }
}
