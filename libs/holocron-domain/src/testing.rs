//! In-memory port implementations for tests
//!
//! Enabled inside this crate's tests and, for dependent crates, through the
//! `testing` feature. Both fakes are cheap to clone and share their state, so a
//! test can hand one copy to a service and keep another to inspect calls.

use std::collections::HashMap;
use std::future::Future;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use crate::planet::{Planet, PlanetSearch};
use crate::ports::{HealthStatus, LookupError, PlanetLookup, PlanetRepository, RepositoryError};

#[derive(Default)]
struct StoreState {
    planets: Vec<Planet>,
    next_id: u64,
    failure: Option<RepositoryError>,
    insert_failure: Option<RepositoryError>,
    healthy: bool,
    calls: usize,
    insert_calls: usize,
}

/// A planet store kept in a vector, in insertion order
///
/// Mirrors the document store contract: ids are 24 hex characters, names are
/// unique, a `limit` of zero lists everything.
#[derive(Clone)]
pub struct InMemoryPlanetRepository {
    state: Arc<Mutex<StoreState>>,
}

impl Default for InMemoryPlanetRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryPlanetRepository {
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(StoreState {
                healthy: true,
                ..StoreState::default()
            })),
        }
    }

    /// Create a store pre-seeded with `planets`, assigning ids in order
    pub fn with_planets(planets: impl IntoIterator<Item = Planet>) -> Self {
        let repository = Self::new();
        {
            let mut state = repository.lock();
            for planet in planets {
                let planet = assign_id(&mut state, planet);
                state.planets.push(planet);
            }
        }
        repository
    }

    /// Make every following operation fail with `error`
    pub fn fail_with(&self, error: RepositoryError) {
        self.lock().failure = Some(error);
    }

    /// Make only `insert` fail with `error`, reads keep working
    pub fn fail_inserts_with(&self, error: RepositoryError) {
        self.lock().insert_failure = Some(error);
    }

    pub fn set_healthy(&self, healthy: bool) {
        self.lock().healthy = healthy;
    }

    /// Number of store operations performed, `ping` excluded
    pub fn calls(&self) -> usize {
        self.lock().calls
    }

    pub fn insert_calls(&self) -> usize {
        self.lock().insert_calls
    }

    /// Snapshot of the stored planets in insertion order
    pub fn planets(&self) -> Vec<Planet> {
        self.lock().planets.clone()
    }

    fn lock(&self) -> MutexGuard<'_, StoreState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn begin(&self) -> Result<MutexGuard<'_, StoreState>, RepositoryError> {
        let mut state = self.lock();
        state.calls += 1;
        match state.failure.clone() {
            Some(err) => Err(err),
            None => Ok(state),
        }
    }
}

fn assign_id(state: &mut StoreState, mut planet: Planet) -> Planet {
    state.next_id += 1;
    planet.set_id(format!("{:024x}", state.next_id));
    planet
}

fn check_id(id: &str) -> Result<(), RepositoryError> {
    if id.len() == 24 && id.chars().all(|c| c.is_ascii_hexdigit()) {
        Ok(())
    } else {
        Err(RepositoryError::invalid_id(id))
    }
}

impl PlanetRepository for InMemoryPlanetRepository {
    fn find_by_name(
        &self,
        name: &str,
    ) -> impl Future<Output = Result<Planet, RepositoryError>> + Send {
        let result = self.begin().and_then(|state| {
            state
                .planets
                .iter()
                .find(|planet| planet.name() == name)
                .cloned()
                .ok_or(RepositoryError::NotFound)
        });
        async move { result }
    }

    fn find_by_id(&self, id: &str) -> impl Future<Output = Result<Planet, RepositoryError>> + Send {
        let result = self.begin().and_then(|state| {
            check_id(id)?;
            state
                .planets
                .iter()
                .find(|planet| planet.id() == id)
                .cloned()
                .ok_or(RepositoryError::NotFound)
        });
        async move { result }
    }

    fn find_all(
        &self,
        limit: u64,
        skip: u64,
    ) -> impl Future<Output = Result<Vec<Planet>, RepositoryError>> + Send {
        let result = self.begin().map(|state| {
            let skip = usize::try_from(skip).unwrap_or(usize::MAX);
            let limit = match limit {
                0 => usize::MAX,
                n => usize::try_from(n).unwrap_or(usize::MAX),
            };
            state
                .planets
                .iter()
                .skip(skip)
                .take(limit)
                .cloned()
                .collect()
        });
        async move { result }
    }

    fn insert(&self, planet: Planet) -> impl Future<Output = Result<Planet, RepositoryError>> + Send {
        let result = self.begin().and_then(|mut state| {
            state.insert_calls += 1;
            if let Some(err) = state.insert_failure.clone() {
                return Err(err);
            }
            if state.planets.iter().any(|p| p.name() == planet.name()) {
                return Err(RepositoryError::duplicate(planet.name()));
            }
            let planet = assign_id(&mut state, planet);
            state.planets.push(planet.clone());
            Ok(planet)
        });
        async move { result }
    }

    fn delete(&self, id: &str) -> impl Future<Output = Result<(), RepositoryError>> + Send {
        let result = self.begin().and_then(|mut state| {
            check_id(id)?;
            state.planets.retain(|planet| planet.id() != id);
            Ok(())
        });
        async move { result }
    }

    fn ping(&self) -> impl Future<Output = HealthStatus> + Send {
        let status = if self.lock().healthy {
            HealthStatus::Ok
        } else {
            HealthStatus::Error
        };
        async move { status }
    }
}

/// A catalog answering from a scripted table
///
/// Unknown names yield an empty search (`count == 0`).
#[derive(Clone, Default)]
pub struct StubPlanetLookup {
    responses: Arc<Mutex<HashMap<String, Result<PlanetSearch, LookupError>>>>,
    delay: Option<Duration>,
    calls: Arc<AtomicUsize>,
}

impl StubPlanetLookup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer searches for `name` with `search`
    pub fn with_search(self, name: impl Into<String>, search: PlanetSearch) -> Self {
        self.lock().insert(name.into(), Ok(search));
        self
    }

    /// Answer searches for `name` with `error`
    pub fn with_failure(self, name: impl Into<String>, error: LookupError) -> Self {
        self.lock().insert(name.into(), Err(error));
        self
    }

    /// Wait `delay` before answering each search
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, Result<PlanetSearch, LookupError>>> {
        self.responses.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl PlanetLookup for StubPlanetLookup {
    fn search(&self, name: &str) -> impl Future<Output = Result<PlanetSearch, LookupError>> + Send {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let result = self
            .lock()
            .get(name)
            .cloned()
            .unwrap_or_else(|| Ok(PlanetSearch::empty()));
        let delay = self.delay;

        async move {
            if let Some(delay) = delay {
                tokio::time::sleep(delay).await;
            }
            result
        }
    }
}
