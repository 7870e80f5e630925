//! HTTP handlers for resources, users and favorites.

pub mod favorites;
pub mod resource;
pub mod users;

pub use resource::Resource;

use crate::error::AppError;
use serde_json::{Map, Value};

/// Path ids are store-generated integers; anything else is a bad request.
fn parse_id(id_str: &str) -> Result<i64, AppError> {
    id_str.parse().map_err(|_| AppError::BadRequest("invalid id".into()))
}

fn body_to_map(value: Value) -> Result<Map<String, Value>, AppError> {
    match value {
        Value::Object(m) => Ok(m),
        _ => Err(AppError::BadRequest("body must be a JSON object".into())),
    }
}
