//! Planet handlers

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use holocron_domain::{
    ports::{PlanetLookup, PlanetRepository},
    Planet,
};
use tracing::{debug, info};

use super::{bad_request, error_response};
use crate::{
    dto::planet::{CreatePlanetRequest, ErrorResponse, ListPlanetsQuery, PlanetResponse},
    AppState,
};

/// List planets
#[utoipa::path(
    get,
    path = "/planets",
    params(ListPlanetsQuery),
    responses(
        (status = 200, description = "A page of planets", body = [PlanetResponse]),
        (status = 400, description = "Invalid limit or skip", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "planets"
)]
pub async fn list_planets<R, L>(
    State(state): State<AppState<R, L>>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Response
where
    R: PlanetRepository + 'static,
    L: PlanetLookup + 'static,
{
    let query = ListPlanetsQuery::from_pairs(pairs);
    let Some(limit) = query.limit() else {
        return bad_request("limit is invalid");
    };
    let Some(skip) = query.skip() else {
        return bad_request("skip is invalid");
    };

    match state.planet_service.find_all(limit, skip).await {
        Ok(planets) => {
            debug!(limit, skip, count = planets.len(), "Listed planets");
            let body: Vec<PlanetResponse> = planets.into_iter().map(Into::into).collect();
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(err) => error_response(err),
    }
}

/// Get a planet by id
#[utoipa::path(
    get,
    path = "/planets/{id}",
    params(("id" = String, Path, description = "Planet identifier")),
    responses(
        (status = 200, description = "The planet", body = PlanetResponse),
        (status = 400, description = "Invalid id", body = ErrorResponse),
        (status = 404, description = "Planet not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "planets"
)]
pub async fn get_planet<R, L>(
    State(state): State<AppState<R, L>>,
    Path(id): Path<String>,
) -> Response
where
    R: PlanetRepository + 'static,
    L: PlanetLookup + 'static,
{
    match state.planet_service.find_by_id(&id).await {
        Ok(planet) => (StatusCode::OK, Json(PlanetResponse::from(planet))).into_response(),
        Err(err) => error_response(err),
    }
}

/// Get a planet by name
#[utoipa::path(
    get,
    path = "/planets/name/{name}",
    params(("name" = String, Path, description = "Exact planet name")),
    responses(
        (status = 200, description = "The planet", body = PlanetResponse),
        (status = 404, description = "Planet not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "planets"
)]
pub async fn get_planet_by_name<R, L>(
    State(state): State<AppState<R, L>>,
    Path(name): Path<String>,
) -> Response
where
    R: PlanetRepository + 'static,
    L: PlanetLookup + 'static,
{
    match state.planet_service.find_by_name(&name).await {
        Ok(planet) => (StatusCode::OK, Json(PlanetResponse::from(planet))).into_response(),
        Err(err) => error_response(err),
    }
}

/// Register a planet
///
/// The film count is looked up in the external catalog.
#[utoipa::path(
    post,
    path = "/planets",
    request_body = CreatePlanetRequest,
    responses(
        (status = 201, description = "Planet registered", body = PlanetResponse),
        (status = 400, description = "Missing field, already registered or unknown planet", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "planets"
)]
pub async fn create_planet<R, L>(
    State(state): State<AppState<R, L>>,
    payload: Result<Json<CreatePlanetRequest>, JsonRejection>,
) -> Response
where
    R: PlanetRepository + 'static,
    L: PlanetLookup + 'static,
{
    let Json(request) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            debug!(error = %rejection, "Rejected planet body");
            return bad_request("body is invalid");
        }
    };

    info!(planet_name = %request.name, "Received planet registration");

    match state.planet_service.save(Planet::from(request)).await {
        Ok(planet) => (StatusCode::CREATED, Json(PlanetResponse::from(planet))).into_response(),
        Err(err) => error_response(err),
    }
}

/// Delete a planet by id
#[utoipa::path(
    delete,
    path = "/planets/{id}",
    params(("id" = String, Path, description = "Planet identifier")),
    responses(
        (status = 200, description = "Planet deleted (or never existed)"),
        (status = 400, description = "Invalid id", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "planets"
)]
pub async fn delete_planet<R, L>(
    State(state): State<AppState<R, L>>,
    Path(id): Path<String>,
) -> Response
where
    R: PlanetRepository + 'static,
    L: PlanetLookup + 'static,
{
    match state.planet_service.delete(&id).await {
        Ok(()) => StatusCode::OK.into_response(),
        Err(err) => error_response(err),
    }
}
