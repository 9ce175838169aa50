mod config;
mod document;
mod mongo_repository;

pub use config::{MongoConfig, MongoConfigError};
pub use document::PlanetDocument;
pub use mongo_repository::{MongoPlanetRepository, COLLECTION_NAME};
