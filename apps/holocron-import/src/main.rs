//! Holocron Import - seeds the planet catalog from a CSV file
//!
//! Every row goes through the same save workflow as the HTTP API, so rows
//! already registered or unknown to SWAPI are reported and left out.

mod csv_source;

use std::{path::PathBuf, sync::Arc};

use anyhow::{Context, Result};
use clap::Parser;
use holocron_domain::{ImportService, PlanetService, PlanetServiceConfig};
use holocron_mongo::{MongoConfig, MongoPlanetRepository};
use holocron_swapi::SwapiClient;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use crate::csv_source::CsvPlanetSource;

/// Import planets into the Holocron catalog
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// `;`-delimited file with a header row and name, climate, terrain columns
    #[arg(short, long, env = "IMPORTER_PATH_CSV", default_value = "planets.csv")]
    path: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    info!(path = %args.path.display(), "Reading planet seed file");
    let planets = CsvPlanetSource::open(&args.path)
        .and_then(|mut source| source.read_planets())
        .with_context(|| format!("couldn't read the csv file {}", args.path.display()))?;

    let mongo_config = MongoConfig::from_env();
    let repository = MongoPlanetRepository::connect(&mongo_config).await?;
    if let Err(err) = repository.ensure_indexes().await {
        warn!(error = %err, "Unique name index is not in place");
    }

    let lookup = SwapiClient::from_env();
    let service = PlanetService::new(repository, lookup, PlanetServiceConfig::default());
    let importer = ImportService::new(Arc::new(service));

    let report = importer.import(planets).await;

    for failure in &report.failures {
        error!(
            index = failure.index,
            planet_name = %failure.name,
            error = %failure.error,
            "Planet was not imported"
        );
    }
    info!(imported = report.imported.len(), "Imported planets");
    info!("completed - errors: {}", report.failures.len());

    Ok(())
}
