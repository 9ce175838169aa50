//! Planet routes

use axum::{routing::get, Router};
use holocron_domain::ports::{PlanetLookup, PlanetRepository};

use crate::{
    handlers::planets::{create_planet, delete_planet, get_planet, get_planet_by_name, list_planets},
    AppState,
};

/// Create planet routes
pub fn routes<R, L>() -> Router<AppState<R, L>>
where
    R: PlanetRepository + 'static,
    L: PlanetLookup + 'static,
{
    Router::new()
        .route(
            "/planets",
            get(list_planets::<R, L>).post(create_planet::<R, L>),
        )
        .route(
            "/planets/:id",
            get(get_planet::<R, L>).delete(delete_planet::<R, L>),
        )
        .route("/planets/name/:name", get(get_planet_by_name::<R, L>))
}
