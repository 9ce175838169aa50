//! Result of searching the external catalog for a planet name

use super::PlanetError;

/// One planet returned by the external catalog
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlanetMatch {
    /// Films the planet appears in
    pub films: Vec<String>,
}

impl PlanetMatch {
    pub fn new(films: Vec<String>) -> Self {
        Self { films }
    }
}

/// Search result from the external catalog
///
/// Transient: used only to compute a planet's film count during save.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlanetSearch {
    /// Number of matches reported by the catalog
    pub count: u32,
    /// Detailed records for the matches
    pub results: Vec<PlanetMatch>,
}

impl PlanetSearch {
    pub fn new(count: u32, results: Vec<PlanetMatch>) -> Self {
        Self { count, results }
    }

    /// A search that matched nothing
    pub fn empty() -> Self {
        Self::default()
    }

    /// Convenience constructor for a single match listing `films`
    pub fn single<S: Into<String>>(films: impl IntoIterator<Item = S>) -> Self {
        Self::new(
            1,
            vec![PlanetMatch::new(films.into_iter().map(Into::into).collect())],
        )
    }

    /// Whether the catalog knows the name at all
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Number of films the searched planet appears in
    ///
    /// # Errors
    ///
    /// Returns `PlanetError::Validation` unless exactly one detailed record is present.
    pub fn total_appearances(&self) -> Result<u32, PlanetError> {
        match self.results.as_slice() {
            [only] => Ok(u32::try_from(only.films.len()).unwrap_or(u32::MAX)),
            _ => Err(PlanetError::validation("search did not return the planet")),
        }
    }
}
