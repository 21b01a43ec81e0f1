//! # tally-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the **candidate REST API** and the static diagnostic endpoints
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results into JSON wire responses
//! - Apply the blanket CORS policy and per-request tracing
//!
//! ## Dependency rule
//! Depends on `tally-app` (for port traits and services) and `tally-domain`
//! (for domain types used in request/response mapping). Never leaks axum
//! types into the domain.

pub mod api;
pub mod router;
pub mod state;
