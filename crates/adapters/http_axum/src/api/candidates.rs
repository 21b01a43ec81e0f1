//! JSON REST handlers for candidates.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use tally_app::ports::CandidateRepository;
use tally_domain::candidate::{Candidate, VoteCounts};
use tally_domain::error::{NotFoundError, TallyError};

use crate::state::AppState;

/// Request body for creating a candidate.
///
/// A missing `name` is accepted and becomes the empty string.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CreateCandidateRequest {
    pub name: String,
}

/// Request body for replacing a candidate's vote counters.
///
/// Missing counters default to zero.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateVotesRequest {
    pub band_votes: i64,
    pub album_votes: i64,
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Candidate>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Ok(Json<Candidate>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the update endpoint.
pub enum UpdateResponse {
    Ok(Json<Candidate>),
    /// The position did not resolve; the body is the lookup message as a
    /// bare JSON string.
    NotFound(Json<String>),
}

impl IntoResponse for UpdateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
            Self::NotFound(json) => (StatusCode::BAD_REQUEST, json).into_response(),
        }
    }
}

/// Possible responses from the delete endpoint.
pub enum DeleteResponse {
    NoContent,
    /// The position did not resolve; the body is the literal string `"{}"`.
    NotFound(Json<&'static str>),
}

impl IntoResponse for DeleteResponse {
    fn into_response(self) -> Response {
        match self {
            Self::NoContent => StatusCode::NO_CONTENT.into_response(),
            Self::NotFound(json) => (StatusCode::NOT_FOUND, json).into_response(),
        }
    }
}

/// `GET /candidates`
pub async fn list<CR>(State(state): State<AppState<CR>>) -> ListResponse
where
    CR: CandidateRepository + Send + Sync + 'static,
{
    let candidates = state.candidate_service.list_candidates().await;
    ListResponse::Ok(Json(candidates))
}

/// `POST /candidates`
///
/// Answers 200 with the created record.
pub async fn create<CR>(
    State(state): State<AppState<CR>>,
    Json(req): Json<CreateCandidateRequest>,
) -> CreateResponse
where
    CR: CandidateRepository + Send + Sync + 'static,
{
    let candidate = state.candidate_service.create_candidate(req.name).await;
    CreateResponse::Ok(Json(candidate))
}

/// `PUT /candidates/{id}`
///
/// The path parameter is a zero-based position into the sequence, not a
/// match on the `id` field. Unparseable and out-of-range positions answer
/// 400 with the lookup message.
pub async fn update<CR>(
    State(state): State<AppState<CR>>,
    Path(id): Path<String>,
    Json(req): Json<UpdateVotesRequest>,
) -> UpdateResponse
where
    CR: CandidateRepository + Send + Sync + 'static,
{
    let Some(position) = parse_position(&id) else {
        return UpdateResponse::NotFound(Json(NotFoundError { id }.to_string()));
    };
    let votes = VoteCounts {
        band_votes: req.band_votes,
        album_votes: req.album_votes,
    };
    match state.candidate_service.update_votes(position, votes).await {
        Ok(candidate) => UpdateResponse::Ok(Json(candidate)),
        Err(TallyError::NotFound(err)) => {
            tracing::debug!(position, "vote update addressed an unknown position");
            UpdateResponse::NotFound(Json(err.to_string()))
        }
    }
}

/// `DELETE /candidates/{id}`
///
/// Same positional addressing as update; unknown positions answer 404.
pub async fn delete<CR>(State(state): State<AppState<CR>>, Path(id): Path<String>) -> DeleteResponse
where
    CR: CandidateRepository + Send + Sync + 'static,
{
    let Some(position) = parse_position(&id) else {
        return DeleteResponse::NotFound(Json("{}"));
    };
    match state.candidate_service.delete_candidate(position).await {
        Ok(()) => DeleteResponse::NoContent,
        Err(TallyError::NotFound(_)) => {
            tracing::debug!(position, "delete addressed an unknown position");
            DeleteResponse::NotFound(Json("{}"))
        }
    }
}

/// Positions are base-10 and zero-based; anything else never resolves.
fn parse_position(raw: &str) -> Option<usize> {
    raw.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_plain_base_10_positions() {
        assert_eq!(parse_position("0"), Some(0));
        assert_eq!(parse_position("999"), Some(999));
    }

    #[test]
    fn should_reject_non_numeric_positions() {
        assert_eq!(parse_position("abc"), None);
        assert_eq!(parse_position("3abc"), None);
        assert_eq!(parse_position("-1"), None);
        assert_eq!(parse_position(""), None);
    }

    #[test]
    fn should_default_missing_request_fields() {
        let create: CreateCandidateRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(create.name, "");

        let update: UpdateVotesRequest = serde_json::from_str(r#"{"bandVotes":5}"#).unwrap();
        assert_eq!(update.band_votes, 5);
        assert_eq!(update.album_votes, 0);
    }
}
