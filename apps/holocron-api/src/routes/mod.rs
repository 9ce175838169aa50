//! API routes

pub mod planets;

use axum::{
    http::{header, HeaderValue},
    routing::get,
    Router,
};
use holocron_domain::ports::{PlanetLookup, PlanetRepository};
use tower_http::{cors::CorsLayer, set_header::SetResponseHeaderLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    dto::{
        health::{Dependencies, HealthResponse},
        planet::{CreatePlanetRequest, ErrorResponse, PlanetResponse},
    },
    handlers, AppState,
};

/// OpenAPI documentation structure
#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::planets::list_planets,
        handlers::planets::get_planet,
        handlers::planets::get_planet_by_name,
        handlers::planets::create_planet,
        handlers::planets::delete_planet,
        handlers::health::health_check
    ),
    components(
        schemas(CreatePlanetRequest, PlanetResponse, ErrorResponse, HealthResponse, Dependencies)
    ),
    tags(
        (name = "planets", description = "Planet catalog endpoints"),
        (name = "health", description = "Health check endpoints")
    ),
    info(
        title = "Holocron API",
        version = "0.1.0",
        description = "Catalog of planets enriched with their film appearances",
        contact(
            name = "Holocron Maintainers"
        )
    )
)]
pub struct ApiDoc;

/// Create the main application router
///
/// Every response is JSON and CORS is fully open.
pub fn create_router<R, L>(state: AppState<R, L>) -> Router
where
    R: PlanetRepository + 'static,
    L: PlanetLookup + 'static,
{
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(planets::routes())
        .route("/health-check", get(handlers::health::health_check::<R, L>))
        .fallback(handlers::route_not_found)
        .layer(CorsLayer::permissive())
        // Outside the CORS layer so preflight answers are labelled too
        .layer(SetResponseHeaderLayer::if_not_present(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{Body, Bytes},
        http::{Method, Request, StatusCode},
    };
    use holocron_domain::{
        planet::PlanetSearch,
        ports::LookupError,
        testing::{InMemoryPlanetRepository, StubPlanetLookup},
        Planet, PlanetService,
    };
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;

    fn app(repository: &InMemoryPlanetRepository, lookup: StubPlanetLookup) -> Router {
        create_router(AppState {
            planet_service: Arc::new(PlanetService::with_defaults(repository.clone(), lookup)),
        })
    }

    fn catalog() -> StubPlanetLookup {
        StubPlanetLookup::new()
            .with_search("Tatooine", PlanetSearch::single(["f1", "f2", "f3", "f4", "f5"]))
            .with_search("Hoth", PlanetSearch::single(["f5"]))
            .with_failure("Jakku", LookupError::Status(503))
    }

    fn seeded() -> InMemoryPlanetRepository {
        InMemoryPlanetRepository::with_planets(
            ["Alderaan", "Yavin IV", "Hoth", "Dagobah", "Bespin"]
                .into_iter()
                .map(|name| Planet::new(name, "temperate", "mixed")),
        )
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, Option<String>, Bytes) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .map(|value| value.to_str().unwrap().to_string());
        let body = response.into_body().collect().await.unwrap().to_bytes();
        (status, content_type, body)
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn post_json(body: &str) -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri("/planets")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn delete(uri: &str) -> Request<Body> {
        Request::builder()
            .method(Method::DELETE)
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    fn json_body(body: &Bytes) -> Value {
        serde_json::from_slice(body).unwrap()
    }

    #[tokio::test]
    async fn test_health_check_ok() {
        let repository = InMemoryPlanetRepository::new();
        let (status, content_type, body) =
            send(app(&repository, catalog()), get("/health-check")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(content_type.as_deref(), Some("application/json"));
        assert_eq!(
            json_body(&body),
            json!({"status": "ok", "dependencies": {"mongoDb": "ok"}})
        );
    }

    #[tokio::test]
    async fn test_health_check_mirrors_store_error() {
        let repository = InMemoryPlanetRepository::new();
        repository.set_healthy(false);
        let (status, _, body) = send(app(&repository, catalog()), get("/health-check")).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            json_body(&body),
            json!({"status": "error", "dependencies": {"mongoDb": "error"}})
        );
    }

    #[tokio::test]
    async fn test_create_planet() {
        let repository = InMemoryPlanetRepository::new();
        let (status, content_type, body) = send(
            app(&repository, catalog()),
            post_json(r#"{"name":"Tatooine","climate":"arid","terrain":"desert","totalFilms":1}"#),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(content_type.as_deref(), Some("application/json"));

        let body = json_body(&body);
        assert_eq!(body["name"], "Tatooine");
        assert_eq!(body["totalFilms"], 5);
        assert_eq!(body["id"].as_str().unwrap().len(), 24);
        assert_eq!(repository.planets().len(), 1);
    }

    #[tokio::test]
    async fn test_create_planet_missing_field() {
        let repository = InMemoryPlanetRepository::new();
        let (status, _, body) = send(
            app(&repository, catalog()),
            post_json(r#"{"name":"Tatooine","climate":"arid"}"#),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            json_body(&body),
            json!({"error": "name, climate and terrain is required"})
        );
        assert_eq!(repository.calls(), 0);
    }

    #[tokio::test]
    async fn test_create_planet_invalid_body() {
        let repository = InMemoryPlanetRepository::new();
        let (status, _, body) =
            send(app(&repository, catalog()), post_json(r#"{"name": 42"#)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json_body(&body), json!({"error": "body is invalid"}));
    }

    #[tokio::test]
    async fn test_create_planet_already_registered() {
        let repository = seeded();
        let (status, _, body) = send(
            app(&repository, catalog()),
            post_json(r#"{"name":"Hoth","climate":"frozen","terrain":"tundra"}"#),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json_body(&body), json!({"error": "planet already registered"}));
    }

    #[tokio::test]
    async fn test_create_planet_unknown_to_catalog() {
        let repository = InMemoryPlanetRepository::new();
        let (status, _, body) = send(
            app(&repository, catalog()),
            post_json(r#"{"name":"Atlantis","climate":"wet","terrain":"ocean"}"#),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json_body(&body), json!({"error": "non-existent planet"}));
    }

    #[tokio::test]
    async fn test_create_planet_catalog_failure_is_masked() {
        let repository = InMemoryPlanetRepository::new();
        let (status, _, body) = send(
            app(&repository, catalog()),
            post_json(r#"{"name":"Jakku","climate":"arid","terrain":"desert"}"#),
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json_body(&body), json!({"error": "internal server error"}));
    }

    #[tokio::test]
    async fn test_list_planets_default_page() {
        let repository = seeded();
        let (status, _, body) = send(app(&repository, catalog()), get("/planets")).await;

        assert_eq!(status, StatusCode::OK);
        let names: Vec<String> = json_body(&body)
            .as_array()
            .unwrap()
            .iter()
            .map(|planet| planet["name"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(names, vec!["Alderaan", "Yavin IV", "Hoth"]);
    }

    #[tokio::test]
    async fn test_list_planets_limit_and_skip() {
        let repository = seeded();
        let (status, _, body) =
            send(app(&repository, catalog()), get("/planets?limit=2&skip=4")).await;

        assert_eq!(status, StatusCode::OK);
        let planets = json_body(&body);
        assert_eq!(planets.as_array().unwrap().len(), 1);
        assert_eq!(planets[0]["name"], "Bespin");
        assert_eq!(planets[0]["totalFilms"], 0);
    }

    #[tokio::test]
    async fn test_list_planets_rejects_bad_paging() {
        let repository = seeded();

        let (status, _, body) =
            send(app(&repository, catalog()), get("/planets?limit=three")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json_body(&body), json!({"error": "limit is invalid"}));

        let (status, _, body) = send(app(&repository, catalog()), get("/planets?skip=-1")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json_body(&body), json!({"error": "skip is invalid"}));
    }

    #[tokio::test]
    async fn test_get_planet_by_id() {
        let repository = seeded();
        let id = repository.planets()[2].id().to_string();

        let (status, _, body) =
            send(app(&repository, catalog()), get(&format!("/planets/{id}"))).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json_body(&body)["name"], "Hoth");
    }

    #[tokio::test]
    async fn test_get_planet_not_found_and_invalid_id() {
        let repository = seeded();

        let (status, _, body) = send(
            app(&repository, catalog()),
            get("/planets/ffffffffffffffffffffffff"),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json_body(&body), json!({"error": "planet not found"}));

        let (status, _, body) = send(app(&repository, catalog()), get("/planets/xyz")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json_body(&body), json!({"error": "id is invalid"}));
    }

    #[tokio::test]
    async fn test_get_planet_by_name() {
        let repository = seeded();

        let (status, _, body) =
            send(app(&repository, catalog()), get("/planets/name/Dagobah")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json_body(&body)["name"], "Dagobah");

        let (status, _, _) = send(app(&repository, catalog()), get("/planets/name/Kamino")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_delete_planet() {
        let repository = seeded();
        let id = repository.planets()[0].id().to_string();

        let (status, _, body) =
            send(app(&repository, catalog()), delete(&format!("/planets/{id}"))).await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.is_empty());
        assert_eq!(repository.planets().len(), 4);
    }

    #[tokio::test]
    async fn test_delete_planet_invalid_id() {
        let repository = seeded();
        let (status, _, body) = send(app(&repository, catalog()), delete("/planets/42")).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json_body(&body), json!({"error": "id is invalid"}));
    }

    #[tokio::test]
    async fn test_cors_preflight() {
        let repository = InMemoryPlanetRepository::new();
        let request = Request::builder()
            .method(Method::OPTIONS)
            .uri("/planets")
            .header(header::ORIGIN, "http://example.com")
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
            .body(Body::empty())
            .unwrap();

        let response = app(&repository, catalog()).oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "*"
        );
        assert_eq!(response.headers()[header::CONTENT_TYPE], "application/json");
    }

    #[tokio::test]
    async fn test_list_planets_rejects_repeated_limit() {
        let repository = seeded();
        let (status, content_type, body) =
            send(app(&repository, catalog()), get("/planets?limit=1&limit=2")).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(content_type.as_deref(), Some("application/json"));
        assert_eq!(json_body(&body), json!({"error": "limit is invalid"}));
    }

    #[tokio::test]
    async fn test_unknown_route_is_json_not_found() {
        let repository = InMemoryPlanetRepository::new();
        let (status, content_type, body) =
            send(app(&repository, catalog()), get("/moons")).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(content_type.as_deref(), Some("application/json"));
        assert_eq!(json_body(&body), json!({"error": "route not found"}));
    }

    #[tokio::test]
    async fn test_openapi_document_is_served() {
        let repository = InMemoryPlanetRepository::new();
        let (status, _, body) =
            send(app(&repository, catalog()), get("/api-docs/openapi.json")).await;

        assert_eq!(status, StatusCode::OK);
        assert!(json_body(&body)["paths"]["/planets"].is_object());
    }
}
