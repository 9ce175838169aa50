//! MongoDB Planet Repository Implementation
//!
//! This module implements the `PlanetRepository` trait using MongoDB as the backend.
//! It handles all driver operations and reports failures as raw `RepositoryError`s.

use std::future::Future;

use futures_util::TryStreamExt;
use holocron_domain::{
    ports::{HealthStatus, PlanetRepository, RepositoryError},
    Planet,
};
use mongodb::{
    bson::{doc, oid::ObjectId},
    error::{Error as MongoError, ErrorKind, WriteFailure},
    options::IndexOptions,
    Client, Collection, Database, IndexModel,
};
use tracing::{debug, error, info, info_span, warn, Instrument};

use super::{MongoConfig, MongoConfigError, PlanetDocument};

/// Collection holding every planet
pub const COLLECTION_NAME: &str = "planets";

/// Server error code for a unique index violation
const DUPLICATE_KEY_CODE: i32 = 11000;

/// MongoDB-based implementation of the PlanetRepository port
///
/// This adapter translates domain storage operations into driver calls on the
/// `planets` collection. Identifiers are MongoDB ObjectIds in hex form.
///
/// ## Error Handling
///
/// - An empty `find_one` result becomes `RepositoryError::NotFound`
/// - An id that is not a valid ObjectId becomes `RepositoryError::InvalidId`
/// - A unique index violation becomes `RepositoryError::Duplicate`
/// - Everything else becomes `RepositoryError::Backend` with the driver message
#[derive(Clone)]
pub struct MongoPlanetRepository {
    database: Database,
    collection: Collection<PlanetDocument>,
}

impl MongoPlanetRepository {
    /// Create a repository on an already configured database handle
    pub fn new(database: Database) -> Self {
        info!(database = %database.name(), collection = COLLECTION_NAME, "Initializing MongoPlanetRepository");
        let collection = database.collection::<PlanetDocument>(COLLECTION_NAME);
        Self {
            database,
            collection,
        }
    }

    /// Build a client from `config` and open its database
    ///
    /// The driver connects lazily, so an unreachable server is only reported
    /// by the first operation.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use holocron_mongo::{MongoConfig, MongoPlanetRepository};
    ///
    /// # async fn example() {
    /// let repo = MongoPlanetRepository::connect(&MongoConfig::from_env()).await.unwrap();
    /// repo.ensure_indexes().await.unwrap();
    /// # }
    /// ```
    pub async fn connect(config: &MongoConfig) -> Result<Self, MongoConfigError> {
        let client = Client::with_uri_str(&config.uri)
            .await
            .map_err(|err| MongoConfigError::InvalidUri(err.to_string()))?;
        Ok(Self::new(client.database(&config.database)))
    }

    /// Create the unique index on `name`
    ///
    /// Concurrent saves of the same name can both pass the service's
    /// existence check; the index makes the second insert fail.
    pub async fn ensure_indexes(&self) -> Result<(), MongoConfigError> {
        let index = IndexModel::builder()
            .keys(doc! { "name": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();

        self.collection
            .create_index(index)
            .await
            .map_err(|err| MongoConfigError::Index(err.to_string()))?;

        info!(collection = COLLECTION_NAME, "Ensured unique index on planet name");
        Ok(())
    }
}

fn parse_id(id: &str) -> Result<ObjectId, RepositoryError> {
    ObjectId::parse_str(id).map_err(|err| {
        debug!(id = %id, error = %err, "Rejected malformed planet id");
        RepositoryError::invalid_id(id)
    })
}

fn is_duplicate_key(err: &MongoError) -> bool {
    matches!(
        err.kind.as_ref(),
        ErrorKind::Write(WriteFailure::WriteError(write_error))
            if write_error.code == DUPLICATE_KEY_CODE
    )
}

fn backend(operation: &str, err: MongoError) -> RepositoryError {
    error!(operation, error = ?err, "MongoDB operation failed");
    RepositoryError::backend(format!("{} failed: {}", operation, err))
}

impl PlanetRepository for MongoPlanetRepository {
    fn find_by_name(
        &self,
        name: &str,
    ) -> impl Future<Output = Result<Planet, RepositoryError>> + Send {
        let collection = self.collection.clone();
        let name = name.to_string();
        let span = info_span!("find_by_name", planet_name = %name);

        async move {
            debug!("Finding planet by name");

            match collection.find_one(doc! { "name": name.as_str() }).await {
                Ok(Some(document)) => Ok(document.into()),
                Ok(None) => {
                    debug!("No planet with this name");
                    Err(RepositoryError::NotFound)
                }
                Err(err) => Err(backend("find_one", err)),
            }
        }
        .instrument(span)
    }

    fn find_by_id(&self, id: &str) -> impl Future<Output = Result<Planet, RepositoryError>> + Send {
        let collection = self.collection.clone();
        let parsed = parse_id(id);
        let span = info_span!("find_by_id", planet_id = %id);

        async move {
            let oid = parsed?;
            debug!("Finding planet by id");

            match collection.find_one(doc! { "_id": oid }).await {
                Ok(Some(document)) => Ok(document.into()),
                Ok(None) => Err(RepositoryError::NotFound),
                Err(err) => Err(backend("find_one", err)),
            }
        }
        .instrument(span)
    }

    fn find_all(
        &self,
        limit: u64,
        skip: u64,
    ) -> impl Future<Output = Result<Vec<Planet>, RepositoryError>> + Send {
        let collection = self.collection.clone();
        let span = info_span!("find_all", limit, skip);

        async move {
            debug!("Listing planets");

            let mut find = collection.find(doc! {}).skip(skip);
            // A zero limit means no limit
            if limit > 0 {
                find = find.limit(i64::try_from(limit).unwrap_or(i64::MAX));
            }

            let cursor = find.await.map_err(|err| backend("find", err))?;
            let documents: Vec<PlanetDocument> = cursor
                .try_collect()
                .await
                .map_err(|err| backend("find cursor", err))?;

            debug!(count = documents.len(), "Listed planets");
            Ok(documents.into_iter().map(Planet::from).collect())
        }
        .instrument(span)
    }

    fn insert(
        &self,
        mut planet: Planet,
    ) -> impl Future<Output = Result<Planet, RepositoryError>> + Send {
        let collection = self.collection.clone();
        let document = PlanetDocument {
            id: None,
            ..PlanetDocument::from(&planet)
        };
        let span = info_span!("insert", planet_name = %planet.name());

        async move {
            debug!("Inserting planet");

            match collection.insert_one(&document).await {
                Ok(result) => match result.inserted_id.as_object_id() {
                    Some(oid) => {
                        planet.set_id(oid.to_hex());
                        info!(planet_id = %planet.id(), "Successfully inserted planet");
                        Ok(planet)
                    }
                    None => {
                        error!(inserted_id = ?result.inserted_id, "Inserted id is not an ObjectId");
                        Err(RepositoryError::backend("inserted id is not an ObjectId"))
                    }
                },
                Err(err) if is_duplicate_key(&err) => {
                    warn!("Unique index rejected planet name");
                    Err(RepositoryError::duplicate(planet.name()))
                }
                Err(err) => Err(backend("insert_one", err)),
            }
        }
        .instrument(span)
    }

    fn delete(&self, id: &str) -> impl Future<Output = Result<(), RepositoryError>> + Send {
        let collection = self.collection.clone();
        let parsed = parse_id(id);
        let span = info_span!("delete", planet_id = %id);

        async move {
            let oid = parsed?;

            match collection.delete_one(doc! { "_id": oid }).await {
                Ok(result) => {
                    debug!(deleted = result.deleted_count, "Deleted planet");
                    Ok(())
                }
                Err(err) => Err(backend("delete_one", err)),
            }
        }
        .instrument(span)
    }

    fn ping(&self) -> impl Future<Output = HealthStatus> + Send {
        let database = self.database.clone();

        async move {
            match database.run_command(doc! { "ping": 1 }).await {
                Ok(_) => HealthStatus::Ok,
                Err(err) => {
                    error!(error = %err, "MongoDB ping failed");
                    HealthStatus::Error
                }
            }
        }
    }
}
