//! A user's favorites: list, add, remove.

use super::{body_to_map, parse_id};
use crate::error::AppError;
use crate::models::{Favorite, NewFavorite};
use crate::response::acknowledged;
use crate::service::{FavoriteRepo, UserRepo};
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use serde_json::Value;

async fn require_user(state: &AppState, user_id: i64) -> Result<(), AppError> {
    if UserRepo::new(state.db.clone()).exists(user_id).await? {
        Ok(())
    } else {
        Err(AppError::not_found("User"))
    }
}

pub async fn list_favorites(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<Json<Vec<Favorite>>, AppError> {
    let user_id = parse_id(&id_str)?;
    require_user(&state, user_id).await?;
    Ok(Json(FavoriteRepo::new(state.db).list_for_user(user_id).await?))
}

pub async fn add_favorite(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<Favorite>), AppError> {
    let user_id = parse_id(&id_str)?;
    let Json(body) = payload?;
    let body = body_to_map(body)?;
    let new: NewFavorite =
        serde_json::from_value(Value::Object(body)).map_err(|e| AppError::BadRequest(e.to_string()))?;
    let target = new.target()?;
    require_user(&state, user_id).await?;
    let favorite = FavoriteRepo::new(state.db).insert(user_id, target).await?;
    tracing::info!(user_id, favorite_id = favorite.favorite_id, kind = %target.kind(), "favorite added");
    Ok((StatusCode::CREATED, Json(favorite)))
}

pub async fn delete_favorite(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let id = parse_id(&id_str)?;
    if !FavoriteRepo::new(state.db).delete(id).await? {
        return Err(AppError::not_found("Favorite"));
    }
    Ok(acknowledged(
        StatusCode::OK,
        "Favorite deleted successfully".into(),
        "favorite_id",
        id,
        None,
    ))
}
