//! # tallyd — tally daemon
//!
//! Composition root that wires the store, service, and HTTP adapter
//! together and starts the server.
//!
//! ## Responsibilities
//! - Parse configuration (TOML file, env vars)
//! - Construct the in-memory candidate store with its seed records
//! - Construct the application service, injecting the store via its port trait
//! - Build the axum router, injecting the application service
//! - Bind to a TCP port and serve
//! - Handle graceful shutdown (ctrl-c)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use tally_adapter_http_axum::state::AppState;
use tally_adapter_storage_memory::MemoryCandidateRepository;
use tally_app::services::candidate_service::CandidateService;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .init();

    let candidate_repo = MemoryCandidateRepository::seeded();
    let candidate_service = CandidateService::new(candidate_repo);
    let state = AppState::new(candidate_service);
    let app = tally_adapter_http_axum::router::build(state);

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!("tallyd listening on http://{bind_addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
}
