//! Application services — use-case structs driving the ports.

pub mod candidate_service;
