//! User and favorite routes.

use crate::handlers::favorites::{add_favorite, delete_favorite, list_favorites};
use crate::handlers::users::{create_user, list_users, read_user};
use crate::state::AppState;
use axum::{
    routing::{delete, get, post},
    Router,
};

pub fn user_routes(state: AppState) -> Router {
    Router::new()
        .route("/users", get(list_users))
        .route("/user", post(create_user))
        .route("/user/:user_id", get(read_user))
        .route("/user/:user_id/favorites", get(list_favorites).post(add_favorite))
        .route("/favorite/:favorite_id", delete(delete_favorite))
        .with_state(state)
}
