//! Common routes: sitemap, health, readiness, version.

use super::SITEMAP;
use crate::state::AppState;
use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

#[derive(Serialize)]
struct HealthBody {
    status: &'static str,
}

#[derive(Serialize)]
struct ReadyBody {
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    database: Option<&'static str>,
}

#[derive(Serialize)]
struct RouteEntry {
    method: &'static str,
    path: &'static str,
}

#[derive(Serialize)]
struct SitemapBody {
    routes: Vec<RouteEntry>,
}

async fn sitemap() -> Json<SitemapBody> {
    Json(SitemapBody {
        routes: SITEMAP
            .iter()
            .map(|&(method, path)| RouteEntry { method, path })
            .collect(),
    })
}

async fn health() -> Json<HealthBody> {
    Json(HealthBody { status: "ok" })
}

async fn ready(State(state): State<AppState>) -> Result<Json<ReadyBody>, (axum::http::StatusCode, Json<ReadyBody>)> {
    if let Err(e) = sqlx::query("SELECT 1").fetch_optional(&state.db.pool).await {
        tracing::warn!(error = %e, "readiness check failed");
        return Err((
            axum::http::StatusCode::SERVICE_UNAVAILABLE,
            Json(ReadyBody {
                status: "degraded",
                database: Some("unavailable"),
            }),
        ));
    }
    Ok(Json(ReadyBody {
        status: "ok",
        database: Some("ok"),
    }))
}

async fn version() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Sitemap, liveness and version. None of them touch the pool.
pub fn common_routes() -> Router {
    Router::new()
        .route("/", get(sitemap))
        .route("/health", get(health))
        .route("/version", get(version))
}

/// The routes above plus `GET /ready`, which round-trips `SELECT 1` through the pool.
pub fn common_routes_with_ready(state: AppState) -> Router {
    Router::new()
        .route("/ready", get(ready))
        .with_state(state)
        .merge(common_routes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Db;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    #[tokio::test]
    async fn ready_with_live_pool() {
        let state = AppState {
            db: Db::in_memory().await.unwrap(),
        };
        let response = common_routes_with_ready(state)
            .oneshot(Request::builder().uri("/ready").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn ready_with_closed_pool() {
        let db = Db::in_memory().await.unwrap();
        db.pool.close().await;
        let response = common_routes_with_ready(AppState { db })
            .oneshot(Request::builder().uri("/ready").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }
}
