//! User queries. Users are created and read, never updated or deleted through the API.

use crate::error::AppError;
use crate::models::{hash_password, NewUser, User};
use crate::store::Db;
use axum::http::StatusCode;

const COLUMNS: &str =
    "user_id, email, password_hash, username, CAST(user_creation_date AS TEXT) AS user_creation_date";

pub struct UserRepo {
    db: Db,
}

impl UserRepo {
    pub fn new(db: Db) -> Self {
        UserRepo { db }
    }

    pub async fn list(&self) -> Result<Vec<User>, AppError> {
        let sql = format!("SELECT {} FROM users ORDER BY user_id", COLUMNS);
        tracing::debug!(sql = %sql, "query");
        Ok(sqlx::query_as(&sql).fetch_all(&self.db.pool).await?)
    }

    pub async fn find(&self, id: i64) -> Result<Option<User>, AppError> {
        let sql = format!("SELECT {} FROM users WHERE user_id = $1", COLUMNS);
        tracing::debug!(sql = %sql, id, "query");
        Ok(sqlx::query_as(&sql).bind(id).fetch_optional(&self.db.pool).await?)
    }

    pub async fn exists(&self, id: i64) -> Result<bool, AppError> {
        let sql = "SELECT COUNT(*) FROM users WHERE user_id = $1";
        tracing::debug!(sql = %sql, id, "query");
        let (n,): (i64,) = sqlx::query_as(sql).bind(id).fetch_one(&self.db.pool).await?;
        Ok(n > 0)
    }

    /// Hash the password and store the user. A taken email surfaces as a conflict.
    pub async fn insert(&self, new: NewUser) -> Result<User, AppError> {
        let password_hash = hash_password(&new.password).map_err(|e| AppError::Api {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: format!("failed to hash password: {}", e),
        })?;
        let sql = format!(
            "INSERT INTO users (email, password_hash, username) VALUES ($1, $2, $3) RETURNING {}",
            COLUMNS
        );
        tracing::debug!(sql = %sql, "query");
        Ok(sqlx::query_as(&sql)
            .bind(new.email)
            .bind(password_hash)
            .bind(new.username)
            .fetch_one(&self.db.pool)
            .await?)
    }
}
