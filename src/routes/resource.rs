//! Character and planet routes: plural path for the collection, singular for items.

use crate::handlers::resource::{create, delete, list, read, update};
use crate::service::{CharacterRepo, PlanetRepo};
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};

pub fn resource_routes(state: AppState) -> Router {
    Router::new()
        .route("/characters", get(list::<CharacterRepo>))
        .route("/character", post(create::<CharacterRepo>))
        .route(
            "/character/:character_id",
            get(read::<CharacterRepo>)
                .put(update::<CharacterRepo>)
                .delete(delete::<CharacterRepo>),
        )
        .route("/planets", get(list::<PlanetRepo>))
        .route("/planet", post(create::<PlanetRepo>))
        .route(
            "/planet/:planet_id",
            get(read::<PlanetRepo>)
                .put(update::<PlanetRepo>)
                .delete(delete::<PlanetRepo>),
        )
        .with_state(state)
}
