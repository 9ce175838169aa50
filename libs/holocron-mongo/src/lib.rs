//! MongoDB adapter for the Holocron planet catalog
//!
//! Implements the domain's `PlanetRepository` port on top of a single
//! `planets` collection.

pub mod infrastructure;

pub use infrastructure::{MongoConfig, MongoConfigError, MongoPlanetRepository};
