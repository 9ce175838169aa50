//! Planet service - Business logic orchestration
//!
//! This module contains the core business logic of the catalog. The service
//! coordinates the planet store and the external catalog, and is the single
//! boundary where their raw errors become [`PlanetError`]s.

use std::future::Future;
use std::time::Duration;

use tracing::{debug, error, info, instrument, warn};

use super::{Planet, PlanetError};
use crate::ports::{HealthStatus, PlanetLookup, PlanetRepository, RepositoryError};

/// Configuration for the planet service
#[derive(Debug, Clone)]
pub struct PlanetServiceConfig {
    /// Deadline for read operations (default: 2s)
    pub read_timeout: Duration,
    /// Deadline for a whole save, external lookup included (default: 20s)
    pub write_timeout: Duration,
}

impl Default for PlanetServiceConfig {
    fn default() -> Self {
        Self {
            read_timeout: Duration::from_secs(2),
            write_timeout: Duration::from_secs(20),
        }
    }
}

/// Service for registering and querying planets
///
/// This service encapsulates the business rules of the catalog:
/// - Validates caller input before touching any dependency
/// - Refuses to register a name twice
/// - Enriches new planets with their film count from the external catalog
/// - Bounds every operation by a deadline
///
/// ## Static Dispatch
///
/// The service is generic over any `PlanetRepository` and `PlanetLookup`
/// implementation.
pub struct PlanetService<R, L> {
    repository: R,
    lookup: L,
    config: PlanetServiceConfig,
}

impl<R, L> PlanetService<R, L>
where
    R: PlanetRepository,
    L: PlanetLookup,
{
    /// Create a new PlanetService with the given ports and configuration
    pub fn new(repository: R, lookup: L, config: PlanetServiceConfig) -> Self {
        Self {
            repository,
            lookup,
            config,
        }
    }

    /// Create a new PlanetService with default deadlines
    pub fn with_defaults(repository: R, lookup: L) -> Self {
        Self::new(repository, lookup, PlanetServiceConfig::default())
    }

    /// Check whether a planet with this name is registered
    ///
    /// # Errors
    ///
    /// - `PlanetError::InvalidInput` if `name` is empty
    /// - `PlanetError::Repository` with the raw store error for any failure
    ///   other than absence
    pub async fn exists(&self, name: &str) -> Result<bool, PlanetError> {
        if name.is_empty() {
            return Err(PlanetError::invalid_input("name is invalid"));
        }

        self.within(self.config.read_timeout, "exists", self.check_exists(name))
            .await
    }

    /// Get a planet by name
    ///
    /// # Errors
    ///
    /// - `PlanetError::InvalidInput` if `name` is empty
    /// - `PlanetError::NotFound` if no planet has this name
    /// - `PlanetError::Internal` for any store failure
    pub async fn find_by_name(&self, name: &str) -> Result<Planet, PlanetError> {
        if name.is_empty() {
            return Err(PlanetError::invalid_input("name is invalid"));
        }

        self.within(self.config.read_timeout, "find_by_name", async {
            self.repository
                .find_by_name(name)
                .await
                .map_err(|err| translate_read_error("find_by_name", err))
        })
        .await
    }

    /// Get a planet by its identifier
    ///
    /// # Errors
    ///
    /// - `PlanetError::InvalidInput` if `id` is empty or malformed
    /// - `PlanetError::NotFound` if no planet has this id
    /// - `PlanetError::Internal` for any other store failure
    pub async fn find_by_id(&self, id: &str) -> Result<Planet, PlanetError> {
        if id.is_empty() {
            return Err(PlanetError::invalid_input("id is invalid"));
        }

        self.within(self.config.read_timeout, "find_by_id", async {
            self.repository
                .find_by_id(id)
                .await
                .map_err(|err| translate_read_error("find_by_id", err))
        })
        .await
    }

    /// List planets in store order
    ///
    /// A `limit` of zero lists every planet after `skip`.
    ///
    /// # Errors
    ///
    /// Returns `PlanetError::Internal` for any store failure
    pub async fn find_all(&self, limit: u64, skip: u64) -> Result<Vec<Planet>, PlanetError> {
        self.within(self.config.read_timeout, "find_all", async {
            self.repository
                .find_all(limit, skip)
                .await
                .map_err(|err| internal("find_all", err))
        })
        .await
    }

    /// Delete a planet by its identifier
    ///
    /// Deleting an id that matches nothing succeeds.
    ///
    /// # Errors
    ///
    /// - `PlanetError::InvalidInput` if `id` is empty or malformed
    /// - `PlanetError::Internal` for any other store failure
    pub async fn delete(&self, id: &str) -> Result<(), PlanetError> {
        if id.is_empty() {
            return Err(PlanetError::invalid_input("id is invalid"));
        }

        self.within(self.config.write_timeout, "delete", async {
            match self.repository.delete(id).await {
                Ok(()) => {
                    info!(planet_id = %id, "Deleted planet");
                    Ok(())
                }
                Err(RepositoryError::InvalidId(_)) => {
                    Err(PlanetError::invalid_input("id is invalid"))
                }
                Err(err) => Err(internal("delete", err)),
            }
        })
        .await
    }

    /// Register a new planet
    ///
    /// This is the main entry point for creating planets. It:
    /// 1. Validates the required fields
    /// 2. Refuses names that are already registered
    /// 3. Searches the external catalog for the name
    /// 4. Sets the film count from the single matching record
    /// 5. Persists the planet and returns it with its new id
    ///
    /// Any film count supplied by the caller is discarded.
    ///
    /// # Errors
    ///
    /// - `PlanetError::InvalidInput` if a required field is empty or the
    ///   catalog does not know the name
    /// - `PlanetError::Conflict` if the name is already registered
    /// - `PlanetError::Validation` if the catalog result is ambiguous
    /// - `PlanetError::Repository` with the raw store error if the
    ///   existence check fails
    /// - `PlanetError::Internal` if the catalog or the insert fails
    #[instrument(skip(self, planet), fields(planet_name = %planet.name()))]
    pub async fn save(&self, planet: Planet) -> Result<Planet, PlanetError> {
        planet.validate()?;

        self.within(self.config.write_timeout, "save", self.register(planet))
            .await
    }

    /// Check connectivity to the planet store
    pub async fn health(&self) -> HealthStatus {
        match tokio::time::timeout(self.config.read_timeout, self.repository.ping()).await {
            Ok(status) => status,
            Err(_) => {
                warn!("Planet store ping timed out");
                HealthStatus::Error
            }
        }
    }

    async fn register(&self, mut planet: Planet) -> Result<Planet, PlanetError> {
        if self.check_exists(planet.name()).await? {
            debug!("Planet name already taken");
            return Err(PlanetError::conflict("planet already registered"));
        }

        let search = self
            .lookup
            .search(planet.name())
            .await
            .map_err(|err| internal("search", err))?;

        if search.is_empty() {
            return Err(PlanetError::invalid_input("non-existent planet"));
        }

        let total_films = search.total_appearances()?;
        planet.set_total_films(total_films);

        match self.repository.insert(planet).await {
            Ok(saved) => {
                info!(planet_id = %saved.id(), total_films, "Registered planet");
                Ok(saved)
            }
            Err(RepositoryError::Duplicate(_)) => {
                Err(PlanetError::conflict("planet already registered"))
            }
            Err(err) => Err(internal("insert", err)),
        }
    }

    async fn check_exists(&self, name: &str) -> Result<bool, PlanetError> {
        match self.repository.find_by_name(name).await {
            Ok(_) => Ok(true),
            Err(RepositoryError::NotFound) => Ok(false),
            Err(err) => Err(PlanetError::Repository(err)),
        }
    }

    async fn within<T>(
        &self,
        limit: Duration,
        operation: &'static str,
        fut: impl Future<Output = Result<T, PlanetError>>,
    ) -> Result<T, PlanetError> {
        match tokio::time::timeout(limit, fut).await {
            Ok(result) => result,
            Err(_) => {
                error!(
                    operation,
                    timeout_ms = limit.as_millis() as u64,
                    "Planet operation exceeded its deadline"
                );
                Err(PlanetError::internal(format!(
                    "{} timed out after {}ms",
                    operation,
                    limit.as_millis()
                )))
            }
        }
    }
}

fn translate_read_error(operation: &'static str, err: RepositoryError) -> PlanetError {
    match err {
        RepositoryError::NotFound => PlanetError::not_found(),
        RepositoryError::InvalidId(_) => PlanetError::invalid_input("id is invalid"),
        err => internal(operation, err),
    }
}

fn internal(operation: &'static str, err: impl std::fmt::Display) -> PlanetError {
    error!(operation, error = %err, "Planet operation failed");
    PlanetError::internal(err.to_string())
}
