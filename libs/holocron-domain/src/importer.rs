//! Bulk import of planets
//!
//! Runs the regular save workflow for every candidate concurrently. Each task
//! reports its outcome over a channel to a single collector, so there is no
//! shared accumulator to lock. A failing row never cancels its siblings.

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::planet::{Planet, PlanetError, PlanetService};
use crate::ports::{PlanetLookup, PlanetRepository};

/// A row that could not be imported
#[derive(Debug)]
pub struct ImportFailure {
    /// Position of the row in the submitted batch
    pub index: usize,
    /// Name of the planet in that row
    pub name: String,
    pub error: PlanetError,
}

/// Outcome of a bulk import
///
/// Both lists are in completion order, which is not deterministic.
#[derive(Debug, Default)]
pub struct ImportReport {
    pub imported: Vec<Planet>,
    pub failures: Vec<ImportFailure>,
}

impl ImportReport {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn errors(&self) -> impl Iterator<Item = &PlanetError> {
        self.failures.iter().map(|failure| &failure.error)
    }
}

struct ImportOutcome {
    index: usize,
    result: Result<Planet, PlanetError>,
}

/// Best-effort bulk importer on top of [`PlanetService::save`]
pub struct ImportService<R, L> {
    planets: Arc<PlanetService<R, L>>,
}

impl<R, L> Clone for ImportService<R, L> {
    fn clone(&self) -> Self {
        Self {
            planets: Arc::clone(&self.planets),
        }
    }
}

impl<R, L> ImportService<R, L>
where
    R: PlanetRepository + 'static,
    L: PlanetLookup + 'static,
{
    pub fn new(planets: Arc<PlanetService<R, L>>) -> Self {
        Self { planets }
    }

    /// Save every planet of the batch concurrently
    ///
    /// One task is spawned per planet, with no bound on the fan-out. The call
    /// returns once every task has reported.
    pub async fn import(&self, planets: Vec<Planet>) -> ImportReport {
        let total = planets.len();
        let names: Vec<String> = planets.iter().map(|p| p.name().to_string()).collect();
        info!(total, "Starting planet import");

        let (tx, mut rx) = mpsc::unbounded_channel();
        for (index, planet) in planets.into_iter().enumerate() {
            let tx = tx.clone();
            let service = Arc::clone(&self.planets);
            tokio::spawn(async move {
                let result = service.save(planet).await;
                // The collector only goes away once every sender is dropped
                let _ = tx.send(ImportOutcome { index, result });
            });
        }
        drop(tx);

        let mut report = ImportReport::default();
        let mut reported = vec![false; total];
        while let Some(ImportOutcome { index, result }) = rx.recv().await {
            reported[index] = true;
            match result {
                Ok(planet) => {
                    debug!(index, planet_id = %planet.id(), "Imported planet");
                    report.imported.push(planet);
                }
                Err(error) => {
                    warn!(index, name = %names[index], error = %error, "Failed to import planet");
                    report.failures.push(ImportFailure {
                        index,
                        name: names[index].clone(),
                        error,
                    });
                }
            }
        }

        // A task that panicked dropped its sender without reporting
        for (index, _) in reported.iter().enumerate().filter(|(_, done)| !**done) {
            warn!(index, name = %names[index], "Import task ended without reporting");
            report.failures.push(ImportFailure {
                index,
                name: names[index].clone(),
                error: PlanetError::internal("import task ended without reporting"),
            });
        }

        info!(
            imported = report.imported.len(),
            failed = report.failures.len(),
            "Finished planet import"
        );
        report
    }
}
