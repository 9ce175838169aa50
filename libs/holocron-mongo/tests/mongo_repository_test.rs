//! Integration tests against a live MongoDB
//!
//! These tests verify that:
//! 1. Inserted planets get an ObjectId and can be read back by id and name
//! 2. Listing honours limit and skip in insertion order
//! 3. The unique index on `name` rejects a second insert of the same name
//! 4. Deleting is idempotent
//!
//! Run with a server available:
//! `MONGO_TEST_URI=mongodb://localhost:27017 cargo test -p holocron-mongo -- --ignored`

use holocron_domain::ports::{HealthStatus, PlanetRepository, RepositoryError};
use holocron_domain::Planet;
use holocron_mongo::{MongoConfig, MongoPlanetRepository};

/// Connect to a fresh database named after the test
async fn fresh_repository(test_name: &str) -> MongoPlanetRepository {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();

    let uri = std::env::var("MONGO_TEST_URI")
        .unwrap_or_else(|_| "mongodb://localhost:27017".to_string());
    let config = MongoConfig::new(uri, format!("holocron_it_{}", test_name));

    let client = mongodb::Client::with_uri_str(&config.uri)
        .await
        .expect("Failed to build client");
    client
        .database(&config.database)
        .drop()
        .await
        .expect("Failed to drop test database");

    let repo = MongoPlanetRepository::connect(&config)
        .await
        .expect("Failed to connect");
    repo.ensure_indexes().await.expect("Failed to create indexes");
    repo
}

#[tokio::test]
#[ignore = "requires a running MongoDB"]
async fn test_insert_and_find() {
    let repo = fresh_repository("insert_and_find").await;

    let mut planet = Planet::new("Tatooine", "arid", "desert");
    planet.set_total_films(5);
    let saved = repo.insert(planet).await.expect("insert failed");

    assert_eq!(saved.id().len(), 24);

    let by_id = repo.find_by_id(saved.id()).await.expect("find_by_id failed");
    assert_eq!(by_id, saved);

    let by_name = repo.find_by_name("Tatooine").await.expect("find_by_name failed");
    assert_eq!(by_name.total_films(), 5);

    let missing = repo.find_by_name("Alderaan").await;
    assert_eq!(missing, Err(RepositoryError::NotFound));
}

#[tokio::test]
#[ignore = "requires a running MongoDB"]
async fn test_find_all_limit_and_skip() {
    let repo = fresh_repository("find_all").await;

    for name in ["Tatooine", "Alderaan", "Yavin IV", "Hoth", "Dagobah"] {
        repo.insert(Planet::new(name, "climate", "terrain"))
            .await
            .expect("insert failed");
    }

    let page = repo.find_all(3, 0).await.expect("find_all failed");
    let names: Vec<&str> = page.iter().map(Planet::name).collect();
    assert_eq!(names, vec!["Tatooine", "Alderaan", "Yavin IV"]);

    let rest = repo.find_all(3, 3).await.expect("find_all failed");
    assert_eq!(rest.len(), 2);

    let all = repo.find_all(0, 0).await.expect("find_all failed");
    assert_eq!(all.len(), 5);
}

#[tokio::test]
#[ignore = "requires a running MongoDB"]
async fn test_unique_name_index() {
    let repo = fresh_repository("unique_name").await;

    repo.insert(Planet::new("Hoth", "frozen", "tundra"))
        .await
        .expect("first insert failed");
    let second = repo.insert(Planet::new("Hoth", "frozen", "tundra")).await;

    assert_eq!(second, Err(RepositoryError::duplicate("Hoth")));
}

#[tokio::test]
#[ignore = "requires a running MongoDB"]
async fn test_delete_is_idempotent() {
    let repo = fresh_repository("delete").await;

    let saved = repo
        .insert(Planet::new("Naboo", "temperate", "grassy hills"))
        .await
        .expect("insert failed");

    repo.delete(saved.id()).await.expect("delete failed");
    repo.delete(saved.id()).await.expect("second delete failed");

    assert_eq!(
        repo.find_by_id(saved.id()).await,
        Err(RepositoryError::NotFound)
    );
    assert_eq!(repo.ping().await, HealthStatus::Ok);
}
