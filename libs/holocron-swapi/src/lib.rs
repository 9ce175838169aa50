//! Star Wars API client for the Holocron planet catalog
//!
//! Implements the domain's `PlanetLookup` port against `GET {base}/planets/?search=`.

mod client;

pub use client::{SwapiClient, DEFAULT_SWAPI_URL};
