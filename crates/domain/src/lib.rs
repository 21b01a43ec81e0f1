//! # tally-domain
//!
//! Pure domain model for the tally candidate-voting service.
//!
//! ## Responsibilities
//! - Define the **Candidate** record: a named act with two independent vote
//!   counters and a never-reused numeric id
//! - Define the error conventions shared by the application and adapter layers
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod candidate;
pub mod error;
