//! Acknowledgement bodies for writes.

use axum::{http::StatusCode, Json};
use serde_json::{Map, Value};

/// `{"message": ..., "<id_key>": id, "name": ...}`. `name` is omitted when `None`.
pub fn acknowledged(
    status: StatusCode,
    message: String,
    id_key: &str,
    id: i64,
    name: Option<(&str, &str)>,
) -> (StatusCode, Json<Value>) {
    let mut body = Map::new();
    body.insert("message".into(), Value::String(message));
    body.insert(id_key.into(), Value::Number(id.into()));
    if let Some((key, value)) = name {
        body.insert(key.into(), Value::String(value.to_string()));
    }
    (status, Json(Value::Object(body)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn delete_ack_has_no_name() {
        let (status, Json(body)) =
            acknowledged(StatusCode::OK, "Planet deleted successfully".into(), "planet_id", 4, None);
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"message": "Planet deleted successfully", "planet_id": 4}));
    }
}
