//! Planet domain module
//!
//! This module contains the core business logic and entities of the catalog.
//! It defines what a Planet is and how a planet gets registered.

mod entity;
mod error;
mod lookup;
mod service;

pub use entity::Planet;
pub use error::{ErrorKind, PlanetError, Result, INTERNAL_ERROR_MESSAGE};
pub use lookup::{PlanetMatch, PlanetSearch};
pub use service::{PlanetService, PlanetServiceConfig};
