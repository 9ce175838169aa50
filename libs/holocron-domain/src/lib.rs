//! # Holocron Domain Layer
//!
//! This crate contains the business logic and domain models for the Holocron
//! planet catalog. It follows hexagonal architecture principles:
//!
//! - **Entities**: Core domain models (Planet)
//! - **Ports**: Trait definitions for external dependencies (PlanetRepository, PlanetLookup)
//! - **Services**: Business logic orchestration (PlanetService, ImportService)
//!
//! ## Architecture
//!
//! This layer has NO dependencies on infrastructure concerns (MongoDB, HTTP, etc.).
//! All external dependencies are expressed as traits (ports) that are implemented
//! by adapter crates.
//!
//! ## Example
//!
//! ```rust
//! use holocron_domain::planet::{Planet, PlanetService};
//! use holocron_domain::ports::{PlanetLookup, PlanetRepository};
//!
//! // The service is generic over any store and lookup implementation
//! async fn example<R: PlanetRepository, L: PlanetLookup>(service: PlanetService<R, L>) {
//!     let planet = Planet::new("Tatooine", "arid", "desert");
//!     let saved = service.save(planet).await.unwrap();
//!     println!("Registered planet {} in {} films", saved.id(), saved.total_films());
//! }
//! ```

pub mod importer;
pub mod planet;
pub mod ports;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

// Re-export commonly used types
pub use importer::{ImportFailure, ImportReport, ImportService};
pub use planet::{ErrorKind, Planet, PlanetError, PlanetService, PlanetServiceConfig};
pub use ports::{PlanetLookup, PlanetRepository};
