//! DTOs for the health check endpoint

use holocron_domain::ports::HealthStatus;
use serde::Serialize;
use utoipa::ToSchema;

/// Status of each external dependency
#[derive(Debug, Serialize, ToSchema)]
pub struct Dependencies {
    /// Planet store connectivity
    #[serde(rename = "mongoDb")]
    #[schema(example = "ok")]
    pub mongo_db: String,
}

/// Response body for the health check
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// "ok", or the status of the first failing dependency
    #[schema(example = "ok")]
    pub status: String,
    pub dependencies: Dependencies,
}

impl HealthResponse {
    /// Build the report; the overall status mirrors a failing store
    pub fn from_store(store: HealthStatus) -> Self {
        Self {
            status: store.to_string(),
            dependencies: Dependencies {
                mongo_db: store.to_string(),
            },
        }
    }

    pub fn is_healthy(&self) -> bool {
        self.status == HealthStatus::Ok.as_str()
    }
}
