//! Presence checks on raw JSON bodies, run before they are deserialized into typed inputs.

use crate::error::AppError;
use serde_json::{Map, Value};

pub struct RequestValidator;

impl RequestValidator {
    /// Every field in `required` must be present and non-null.
    pub fn validate(body: &Map<String, Value>, required: &[&str]) -> Result<(), AppError> {
        let missing: Vec<&str> = required
            .iter()
            .copied()
            .filter(|f| matches!(body.get(*f), None | Some(Value::Null)))
            .collect();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(AppError::Validation(format!("Missing required fields: {}", missing.join(", "))))
        }
    }

    /// For partial updates: absent fields are fine, but `non_null` fields may not be set to null.
    pub fn validate_partial(body: &Map<String, Value>, non_null: &[&str]) -> Result<(), AppError> {
        for f in non_null {
            if let Some(Value::Null) = body.get(*f) {
                return Err(AppError::Validation(format!("{} cannot be null", f)));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn obj(v: Value) -> Map<String, Value> {
        match v {
            Value::Object(m) => m,
            _ => unreachable!(),
        }
    }

    #[test]
    fn lists_every_missing_field() {
        let body = obj(json!({"name": "Chewbacca", "species": null}));
        let err = RequestValidator::validate(&body, &["name", "species", "homeworld"]).unwrap_err();
        assert_eq!(err.to_string(), "Missing required fields: species, homeworld");
    }

    #[test]
    fn partial_allows_absent_but_not_null() {
        let required = ["name"];
        assert!(RequestValidator::validate_partial(&obj(json!({"population": 5})), &required).is_ok());
        assert!(RequestValidator::validate_partial(&obj(json!({"name": null})), &required).is_err());
    }
}
