//! Users: list, read, register.

use super::{body_to_map, parse_id};
use crate::error::AppError;
use crate::models::{NewUser, User};
use crate::response::acknowledged;
use crate::service::{RequestValidator, UserRepo};
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use serde_json::Value;

const REQUIRED: &[&str] = &["email", "username", "password"];

pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<User>>, AppError> {
    Ok(Json(UserRepo::new(state.db).list().await?))
}

pub async fn read_user(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<Json<User>, AppError> {
    let id = parse_id(&id_str)?;
    let user = UserRepo::new(state.db)
        .find(id)
        .await?
        .ok_or_else(|| AppError::not_found("User"))?;
    Ok(Json(user))
}

pub async fn create_user(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let Json(body) = payload?;
    let body = body_to_map(body)?;
    RequestValidator::validate(&body, REQUIRED)?;
    let new: NewUser = serde_json::from_value(Value::Object(body)).map_err(|e| AppError::BadRequest(e.to_string()))?;
    let user = UserRepo::new(state.db).insert(new).await?;
    tracing::info!(user_id = user.user_id, "user created");
    Ok(acknowledged(
        StatusCode::CREATED,
        "User added successfully".into(),
        "user_id",
        user.user_id,
        Some(("username", user.username.as_str())),
    ))
}
