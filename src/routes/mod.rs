//! Router assembly: every route the server mounts, plus the middleware stack around them.

mod common;
mod resource;
mod users;

pub use common::{common_routes, common_routes_with_ready};
pub use resource::resource_routes;
pub use users::user_routes;

use crate::state::AppState;
use axum::Router;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, limit::RequestBodyLimitLayer, trace::TraceLayer};

/// Served at `GET /`. Kept in step with the routers below; a test walks it against the real router.
pub const SITEMAP: &[(&str, &str)] = &[
    ("GET", "/"),
    ("GET", "/health"),
    ("GET", "/ready"),
    ("GET", "/version"),
    ("GET", "/characters"),
    ("POST", "/character"),
    ("GET", "/character/:character_id"),
    ("PUT", "/character/:character_id"),
    ("DELETE", "/character/:character_id"),
    ("GET", "/planets"),
    ("POST", "/planet"),
    ("GET", "/planet/:planet_id"),
    ("PUT", "/planet/:planet_id"),
    ("DELETE", "/planet/:planet_id"),
    ("GET", "/users"),
    ("POST", "/user"),
    ("GET", "/user/:user_id"),
    ("GET", "/user/:user_id/favorites"),
    ("POST", "/user/:user_id/favorites"),
    ("DELETE", "/favorite/:favorite_id"),
];

/// Full application: service routes, resources, users and favorites behind tracing, a body limit and CORS.
/// CORS sits innermost so it wraps the router's own body type.
pub fn app(state: AppState, body_limit: usize) -> Router {
    Router::new()
        .merge(common_routes_with_ready(state.clone()))
        .merge(resource_routes(state.clone()))
        .merge(user_routes(state))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(RequestBodyLimitLayer::new(body_limit))
                .layer(CorsLayer::permissive()),
        )
}
