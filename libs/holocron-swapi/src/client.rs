//! SWAPI client (planet search endpoint)

use std::future::Future;

use holocron_domain::planet::{PlanetMatch, PlanetSearch};
use holocron_domain::ports::{LookupError, PlanetLookup};
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, error, info_span, Instrument};

/// Default SWAPI base URL.
pub const DEFAULT_SWAPI_URL: &str = "https://swapi.dev/api";

/// Client for the Star Wars API planet search
///
/// No retry, no cache and no timeout of its own: the caller's deadline
/// bounds every request.
#[derive(Clone, Debug)]
pub struct SwapiClient {
    client: Client,
    base_url: String,
}

impl SwapiClient {
    pub fn new(base_url: &str) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    /// Create client reusing an existing reqwest client
    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Create client from environment variables.
    ///
    /// Uses the `SWAPI_URL` environment variable, falling back to the public API if not set.
    pub fn from_env() -> Self {
        let base_url = std::env::var("SWAPI_URL").unwrap_or_else(|_| DEFAULT_SWAPI_URL.to_string());
        Self::new(&base_url)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn search_url(&self) -> String {
        format!("{}/planets/", self.base_url)
    }
}

impl Default for SwapiClient {
    fn default() -> Self {
        Self::new(DEFAULT_SWAPI_URL)
    }
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    count: u32,
    #[serde(default)]
    results: Vec<PlanetRecord>,
}

#[derive(Debug, Deserialize)]
struct PlanetRecord {
    #[serde(default)]
    films: Vec<String>,
}

impl From<SearchResponse> for PlanetSearch {
    fn from(response: SearchResponse) -> Self {
        PlanetSearch::new(
            response.count,
            response
                .results
                .into_iter()
                .map(|record| PlanetMatch::new(record.films))
                .collect(),
        )
    }
}

impl PlanetLookup for SwapiClient {
    fn search(&self, name: &str) -> impl Future<Output = Result<PlanetSearch, LookupError>> + Send {
        let request = self
            .client
            .get(self.search_url())
            .query(&[("search", name)]);
        let span = info_span!("swapi_search", planet_name = %name);

        async move {
            debug!("Searching SWAPI for planet");

            let response = request.send().await.map_err(|e| {
                error!(error = %e, "SWAPI request failed");
                LookupError::Request(e.to_string())
            })?;

            let status = response.status();
            if !status.is_success() {
                error!(status = status.as_u16(), "SWAPI responded with an error status");
                return Err(LookupError::Status(status.as_u16()));
            }

            let body: SearchResponse = response.json().await.map_err(|e| {
                error!(error = %e, "Failed to decode SWAPI response");
                LookupError::Decode(e.to_string())
            })?;

            debug!(count = body.count, results = body.results.len(), "SWAPI search finished");
            Ok(body.into())
        }
        .instrument(span)
    }
}
