//! List, read, create, update and delete for the public resources (characters, planets).
//! Each handler is generic over a [`Resource`]; the router instantiates one copy per resource.

use super::{body_to_map, parse_id};
use crate::error::AppError;
use crate::models::{Character, Planet};
use crate::response::acknowledged;
use crate::service::{CharacterRepo, PlanetRepo, Repository, RequestValidator};
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use serde_json::Value;

/// HTTP-facing description of a repository: what it is called and which fields a create must carry.
pub trait Resource: Repository + Sized + 'static {
    /// Capitalized singular, used in messages ("Character not found").
    const LABEL: &'static str;
    /// JSON key for the primary key in acknowledgements.
    const ID_KEY: &'static str;
    const REQUIRED: &'static [&'static str];
    /// Columns a partial update may not null out.
    const NON_NULL: &'static [&'static str];

    fn from_state(state: &AppState) -> Self;
    fn id(row: &Self::Row) -> i64;
    fn name(row: &Self::Row) -> &str;
}

impl Resource for CharacterRepo {
    const LABEL: &'static str = "Character";
    const ID_KEY: &'static str = "character_id";
    const REQUIRED: &'static [&'static str] = &["name", "species", "homeworld"];
    const NON_NULL: &'static [&'static str] = &["name"];

    fn from_state(state: &AppState) -> Self {
        CharacterRepo::new(state.db.clone())
    }

    fn id(row: &Character) -> i64 {
        row.character_id
    }

    fn name(row: &Character) -> &str {
        &row.name
    }
}

impl Resource for PlanetRepo {
    const LABEL: &'static str = "Planet";
    const ID_KEY: &'static str = "planet_id";
    const REQUIRED: &'static [&'static str] = &["name", "climate", "terrain"];
    const NON_NULL: &'static [&'static str] = &["name"];

    fn from_state(state: &AppState) -> Self {
        PlanetRepo::new(state.db.clone())
    }

    fn id(row: &Planet) -> i64 {
        row.planet_id
    }

    fn name(row: &Planet) -> &str {
        &row.name
    }
}

pub async fn list<R: Resource>(State(state): State<AppState>) -> Result<Json<Vec<R::Row>>, AppError> {
    let rows = R::from_state(&state).list().await?;
    Ok(Json(rows))
}

pub async fn read<R: Resource>(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<Json<R::Row>, AppError> {
    let id = parse_id(&id_str)?;
    let row = R::from_state(&state)
        .find(id)
        .await?
        .ok_or_else(|| AppError::not_found(R::LABEL))?;
    Ok(Json(row))
}

pub async fn create<R: Resource>(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let Json(body) = payload?;
    let body = body_to_map(body)?;
    RequestValidator::validate(&body, R::REQUIRED)?;
    let new: R::New = serde_json::from_value(Value::Object(body)).map_err(|e| AppError::BadRequest(e.to_string()))?;
    let row = R::from_state(&state).insert(new).await?;
    tracing::info!(resource = R::LABEL, id = R::id(&row), "created");
    Ok(acknowledged(
        StatusCode::CREATED,
        format!("{} added successfully", R::LABEL),
        R::ID_KEY,
        R::id(&row),
        Some(("name", R::name(&row))),
    ))
}

pub async fn update<R: Resource>(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let id = parse_id(&id_str)?;
    let Json(body) = payload?;
    let body = body_to_map(body)?;
    RequestValidator::validate_partial(&body, R::NON_NULL)?;
    let changes: R::Changes =
        serde_json::from_value(Value::Object(body)).map_err(|e| AppError::BadRequest(e.to_string()))?;
    let row = R::from_state(&state)
        .update(id, changes)
        .await?
        .ok_or_else(|| AppError::not_found(R::LABEL))?;
    tracing::info!(resource = R::LABEL, id, "updated");
    Ok(acknowledged(
        StatusCode::OK,
        format!("{} updated successfully", R::LABEL),
        R::ID_KEY,
        R::id(&row),
        Some(("name", R::name(&row))),
    ))
}

pub async fn delete<R: Resource>(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let id = parse_id(&id_str)?;
    if !R::from_state(&state).delete(id).await? {
        return Err(AppError::not_found(R::LABEL));
    }
    tracing::info!(resource = R::LABEL, id, "deleted");
    Ok(acknowledged(
        StatusCode::OK,
        format!("{} deleted successfully", R::LABEL),
        R::ID_KEY,
        id,
        None,
    ))
}
