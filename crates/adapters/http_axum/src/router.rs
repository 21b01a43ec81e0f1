//! Axum router assembly.

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use tally_app::ports::CandidateRepository;

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Candidate routes sit at the root next to the static diagnostic
/// endpoints. Every response — the 404 fallback and preflights included —
/// carries `Access-Control-Allow-Origin: *`, and a [`TraceLayer`] logs each
/// HTTP request/response at the `DEBUG` level using the `tracing`
/// ecosystem.
pub fn build<CR>(state: AppState<CR>) -> Router
where
    CR: CandidateRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .route("/unauthorized", get(unauthorized))
        .route("/not-found", get(not_found))
        .merge(crate::api::routes())
        .fallback(fallback)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}

async fn unauthorized() -> StatusCode {
    StatusCode::UNAUTHORIZED
}

async fn not_found() -> StatusCode {
    StatusCode::NOT_FOUND
}

async fn fallback() -> StatusCode {
    StatusCode::NOT_FOUND
}
