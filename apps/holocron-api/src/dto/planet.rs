//! DTOs for planet endpoints

use holocron_domain::Planet;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Request body for planet creation
///
/// Missing fields read as empty and are rejected by validation. Any `id` or
/// `totalFilms` sent by the client is ignored.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreatePlanetRequest {
    #[serde(default)]
    #[schema(example = "Tatooine")]
    pub name: String,
    #[serde(default)]
    #[schema(example = "arid")]
    pub climate: String,
    #[serde(default)]
    #[schema(example = "desert")]
    pub terrain: String,
}

impl From<CreatePlanetRequest> for Planet {
    fn from(request: CreatePlanetRequest) -> Self {
        Planet::new(request.name, request.climate, request.terrain)
    }
}

/// A planet as returned by the API; every field is always present
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlanetResponse {
    #[schema(example = "5f1d7f1e2a3b4c5d6e7f8091")]
    pub id: String,
    #[schema(example = "Tatooine")]
    pub name: String,
    #[schema(example = "arid")]
    pub climate: String,
    #[schema(example = "desert")]
    pub terrain: String,
    /// Number of films the planet appears in
    #[schema(example = 5)]
    pub total_films: u32,
}

impl From<Planet> for PlanetResponse {
    fn from(planet: Planet) -> Self {
        Self {
            id: planet.id().to_string(),
            name: planet.name().to_string(),
            climate: planet.climate().to_string(),
            terrain: planet.terrain().to_string(),
            total_films: planet.total_films(),
        }
    }
}

/// Paging parameters for the planet listing
///
/// Kept as raw strings so a malformed or repeated value gets a
/// field-specific message.
#[derive(Debug, Default, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListPlanetsQuery {
    /// Maximum number of planets to return (default 3, 0 for all)
    pub limit: Option<String>,
    /// Number of planets to skip (default 0)
    pub skip: Option<String>,
}

pub const DEFAULT_LIMIT: u64 = 3;

impl ListPlanetsQuery {
    /// Pick `limit` and `skip` out of the decoded query string
    ///
    /// Unknown keys are ignored. A key given twice has no single value and
    /// reads as invalid.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        let mut query = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "limit" => &mut query.limit,
                "skip" => &mut query.skip,
                _ => continue,
            };
            *slot = if slot.is_some() {
                Some(String::new())
            } else {
                Some(value)
            };
        }
        query
    }

    /// Parsed `limit`, or `None` if it is not a non-negative integer
    pub fn limit(&self) -> Option<u64> {
        parse_or(self.limit.as_deref(), DEFAULT_LIMIT)
    }

    /// Parsed `skip`, or `None` if it is not a non-negative integer
    pub fn skip(&self) -> Option<u64> {
        parse_or(self.skip.as_deref(), 0)
    }
}

fn parse_or(value: Option<&str>, default: u64) -> Option<u64> {
    match value {
        None => Some(default),
        Some(raw) => raw.trim().parse().ok(),
    }
}

/// Error response body
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Error description
    #[schema(example = "planet not found")]
    pub error: String,
}
