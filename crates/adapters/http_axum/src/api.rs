//! JSON REST API handler modules.

pub mod candidates;

use axum::Router;
use axum::routing::{get, put};

use tally_app::ports::CandidateRepository;

use crate::state::AppState;

/// Build the candidate sub-router.
pub fn routes<CR>() -> Router<AppState<CR>>
where
    CR: CandidateRepository + Send + Sync + 'static,
{
    Router::new()
        .route(
            "/candidates",
            get(candidates::list::<CR>).post(candidates::create::<CR>),
        )
        .route(
            "/candidates/{id}",
            put(candidates::update::<CR>).delete(candidates::delete::<CR>),
        )
}
