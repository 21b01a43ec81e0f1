//! # tally-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define the **port trait** the storage adapter must implement:
//!   `CandidateRepository` — ordered CRUD over the candidate sequence
//! - Define the driving use-case struct: `CandidateService` — list, create,
//!   update votes, delete
//! - Orchestrate domain objects without knowing *how* storage works
//!
//! ## Dependency rule
//! Depends on `tally-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
