//! # tally-adapter-storage-memory
//!
//! In-memory storage adapter — the candidate collection is process state.
//!
//! ## Responsibilities
//! - Implement the repository port trait defined in `tally-app::ports::storage`
//! - Own the ordered candidate sequence and the id counter
//! - Seed the two well-known starting records
//!
//! ## Dependency rule
//! Depends on `tally-app` (for port traits) and `tally-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

pub mod candidate_repo;

pub use candidate_repo::MemoryCandidateRepository;
