//! Ports (trait definitions) for external dependencies
//!
//! This module defines the contracts (ports) that external adapters must implement.
//! Following hexagonal architecture, the domain defines what it needs, and the
//! infrastructure provides implementations.
//!
//! Adapters report raw, low-level failures through [`RepositoryError`] and
//! [`LookupError`]. Turning those into the domain taxonomy is the job of
//! [`PlanetService`](crate::planet::PlanetService).
//!
//! ## Static Dispatch
//!
//! We use native Rust async traits with `impl Future` return types instead of
//! `async_trait` to ensure zero-cost abstractions and static dispatch.

use std::fmt;
use std::future::Future;

use thiserror::Error;

use crate::planet::{Planet, PlanetSearch};

/// Raw errors reported by a planet store
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// No document matched the query
    #[error("no planet matched the query")]
    NotFound,

    /// The identifier cannot be parsed into the store's native format
    #[error("the provided id is not a valid identifier: {0}")]
    InvalidId(String),

    /// A uniqueness constraint rejected the write
    #[error("duplicate planet: {0}")]
    Duplicate(String),

    /// Any other failure of the underlying database
    #[error("storage backend failure: {0}")]
    Backend(String),
}

impl RepositoryError {
    pub fn invalid_id(id: impl Into<String>) -> Self {
        Self::InvalidId(id.into())
    }

    pub fn duplicate(name: impl Into<String>) -> Self {
        Self::Duplicate(name.into())
    }

    pub fn backend(msg: impl Into<String>) -> Self {
        Self::Backend(msg.into())
    }
}

/// Raw errors reported by the external planet catalog
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// The request could not be sent or no response arrived
    #[error("catalog request failed: {0}")]
    Request(String),

    /// The catalog answered with a non-success status
    #[error("catalog responded with status {0}")]
    Status(u16),

    /// The response body could not be decoded
    #[error("catalog response could not be decoded: {0}")]
    Decode(String),
}

/// Connectivity status of a dependency
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthStatus {
    Ok,
    Error,
}

impl HealthStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ok => "ok",
            Self::Error => "error",
        }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Ok)
    }
}

impl fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Port for planet persistence
///
/// This trait abstracts away the document database holding the `planets`
/// collection. Implementations must:
/// - Report "no matching document" as `RepositoryError::NotFound`
/// - Report unparsable identifiers as `RepositoryError::InvalidId`
/// - Report uniqueness violations on `name` as `RepositoryError::Duplicate`
pub trait PlanetRepository: Send + Sync {
    /// Find a single planet by exact name
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no planet has this name
    fn find_by_name(
        &self,
        name: &str,
    ) -> impl Future<Output = Result<Planet, RepositoryError>> + Send;

    /// Find a single planet by its store-assigned identifier
    ///
    /// # Errors
    ///
    /// - `RepositoryError::InvalidId` if `id` is malformed
    /// - `RepositoryError::NotFound` if no planet has this id
    fn find_by_id(&self, id: &str) -> impl Future<Output = Result<Planet, RepositoryError>> + Send;

    /// List up to `limit` planets after skipping `skip`, in store order
    ///
    /// A `limit` of zero means no limit.
    fn find_all(
        &self,
        limit: u64,
        skip: u64,
    ) -> impl Future<Output = Result<Vec<Planet>, RepositoryError>> + Send;

    /// Insert a new planet and return it with its generated identifier
    fn insert(&self, planet: Planet) -> impl Future<Output = Result<Planet, RepositoryError>> + Send;

    /// Remove a planet by identifier
    ///
    /// Removing an identifier that matches nothing is not an error.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::InvalidId` if `id` is malformed
    fn delete(&self, id: &str) -> impl Future<Output = Result<(), RepositoryError>> + Send;

    /// Check connectivity to the database; never fails
    fn ping(&self) -> impl Future<Output = HealthStatus> + Send;
}

/// Port for the external planet catalog
pub trait PlanetLookup: Send + Sync {
    /// Search the catalog by planet name
    ///
    /// # Errors
    ///
    /// Returns a `LookupError` on network or decode failure. No retry is attempted.
    fn search(&self, name: &str) -> impl Future<Output = Result<PlanetSearch, LookupError>> + Send;
}
