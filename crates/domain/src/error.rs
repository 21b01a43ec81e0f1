//! Common error types used across the workspace.

/// Top-level error for store operations.
#[derive(Debug, thiserror::Error)]
pub enum TallyError {
    /// An update or delete addressed a position outside the sequence.
    #[error(transparent)]
    NotFound(#[from] NotFoundError),
}

/// A lookup failed; `id` carries the position the caller asked for.
///
/// The display form is the exact message HTTP clients receive.
#[derive(Debug, thiserror::Error)]
#[error("Could not find ID {id}")]
pub struct NotFoundError {
    pub id: String,
}
