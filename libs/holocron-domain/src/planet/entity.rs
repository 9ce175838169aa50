//! Domain entities for the planet catalog
//!
//! A Planet is the only resource in Holocron. Its identity is assigned by the
//! store on insert and its film count is derived from the external catalog,
//! never supplied by the caller.

use super::PlanetError;

/// A planet registered in the catalog
///
/// - `id` is empty until the planet has been persisted
/// - `name` is unique within the store
/// - `total_films` is overwritten by [`PlanetService::save`](super::PlanetService::save)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Planet {
    id: String,
    name: String,
    climate: String,
    terrain: String,
    total_films: u32,
}

impl Planet {
    /// Create a new, not yet persisted planet
    pub fn new(
        name: impl Into<String>,
        climate: impl Into<String>,
        terrain: impl Into<String>,
    ) -> Self {
        Self {
            id: String::new(),
            name: name.into(),
            climate: climate.into(),
            terrain: terrain.into(),
            total_films: 0,
        }
    }

    /// Create a Planet with explicit values (used for reconstruction from storage)
    pub fn from_parts(
        id: String,
        name: String,
        climate: String,
        terrain: String,
        total_films: u32,
    ) -> Self {
        Self {
            id,
            name,
            climate,
            terrain,
            total_films,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn climate(&self) -> &str {
        &self.climate
    }

    pub fn terrain(&self) -> &str {
        &self.terrain
    }

    pub fn total_films(&self) -> u32 {
        self.total_films
    }

    /// Set the identifier generated by the store after insertion
    pub fn set_id(&mut self, id: impl Into<String>) {
        self.id = id.into();
    }

    pub fn set_total_films(&mut self, total_films: u32) {
        self.total_films = total_films;
    }

    /// Check if this planet has been persisted to storage
    pub fn is_persisted(&self) -> bool {
        !self.id.is_empty()
    }

    /// Names of the required fields that are empty
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.name.is_empty() {
            missing.push("name");
        }
        if self.climate.is_empty() {
            missing.push("climate");
        }
        if self.terrain.is_empty() {
            missing.push("terrain");
        }
        missing
    }

    /// Validate the fields a caller must supply before creation
    ///
    /// # Errors
    ///
    /// Returns `PlanetError::InvalidInput` if `name`, `climate` or `terrain` is empty.
    pub fn validate(&self) -> Result<(), PlanetError> {
        if self.missing_fields().is_empty() {
            Ok(())
        } else {
            Err(PlanetError::invalid_input(
                "name, climate and terrain is required",
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_planet_creation() {
        let planet = Planet::new("Tatooine", "arid", "desert");

        assert_eq!(planet.name(), "Tatooine");
        assert_eq!(planet.climate(), "arid");
        assert_eq!(planet.terrain(), "desert");
        assert_eq!(planet.total_films(), 0);
        assert!(!planet.is_persisted());
    }

    #[test]
    fn test_planet_set_id() {
        let mut planet = Planet::new("Hoth", "frozen", "tundra");
        planet.set_id("5f1d7f1e2a3b4c5d6e7f8091");

        assert!(planet.is_persisted());
        assert_eq!(planet.id(), "5f1d7f1e2a3b4c5d6e7f8091");
    }

    #[test]
    fn test_missing_fields_lists_each_empty_field() {
        let planet = Planet::new("", "temperate", "");
        assert_eq!(planet.missing_fields(), vec!["name", "terrain"]);

        let planet = Planet::new("Naboo", "temperate", "grassy hills");
        assert!(planet.missing_fields().is_empty());
    }

    #[test]
    fn test_validate_rejects_empty_climate() {
        let planet = Planet::new("Dagobah", "", "swamp");
        let err = planet.validate().unwrap_err();

        assert!(matches!(err, PlanetError::InvalidInput(_)));
        assert_eq!(err.to_string(), "name, climate and terrain is required");
    }

    #[test]
    fn test_validate_ignores_total_films() {
        // A zero film count is legitimate and must not fail validation
        let planet = Planet::new("Yavin IV", "temperate", "jungle");
        assert!(planet.validate().is_ok());
    }
}
