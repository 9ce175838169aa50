//! Holocron API - planet catalog HTTP service
//!
//! Serves the planet catalog over JSON, backed by MongoDB and enriched with
//! film counts from the Star Wars API.

mod config;
mod dto;
mod handlers;
mod routes;

use anyhow::Result;
use holocron_domain::PlanetService;
use holocron_mongo::{MongoConfig, MongoPlanetRepository};
use holocron_swapi::SwapiClient;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::config::ApiConfig;

/// Application state shared across handlers
pub struct AppState<R, L> {
    pub planet_service: Arc<PlanetService<R, L>>,
}

impl<R, L> Clone for AppState<R, L> {
    fn clone(&self) -> Self {
        Self {
            planet_service: Arc::clone(&self.planet_service),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("Starting Holocron API");

    let config = ApiConfig::from_env()?;
    let mongo_config = MongoConfig::from_env();

    info!(database = %mongo_config.database, "Initializing MongoDB planet repository");
    let repository = MongoPlanetRepository::connect(&mongo_config).await?;
    if let Err(err) = repository.ensure_indexes().await {
        warn!(error = %err, "Unique name index is not in place");
    }

    let lookup = SwapiClient::from_env();
    info!(swapi_url = %lookup.base_url(), "Using SWAPI catalog");

    let service = PlanetService::new(repository, lookup, config.service_config());

    // Create shared application state
    let state = AppState {
        planet_service: Arc::new(service),
    };

    // Build HTTP router
    let app = routes::create_router(state);

    let addr = config.bind_addr();
    info!(addr = %addr, "Starting HTTP server");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
