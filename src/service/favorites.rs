//! Favorites are always reached through their owning user, except for delete by id.

use crate::error::AppError;
use crate::models::{Favorite, FavoriteTarget};
use crate::store::Db;

const COLUMNS: &str = "favorite_id, user_id, planet_id, character_id, favorite_type";

pub struct FavoriteRepo {
    db: Db,
}

impl FavoriteRepo {
    pub fn new(db: Db) -> Self {
        FavoriteRepo { db }
    }

    pub async fn list_for_user(&self, user_id: i64) -> Result<Vec<Favorite>, AppError> {
        let sql = format!("SELECT {} FROM favorites WHERE user_id = $1 ORDER BY favorite_id", COLUMNS);
        tracing::debug!(sql = %sql, user_id, "query");
        Ok(sqlx::query_as(&sql).bind(user_id).fetch_all(&self.db.pool).await?)
    }

    /// Unknown planet or character ids are rejected by the store's foreign keys.
    pub async fn insert(&self, user_id: i64, target: FavoriteTarget) -> Result<Favorite, AppError> {
        let sql = format!(
            "INSERT INTO favorites (user_id, planet_id, character_id, favorite_type) VALUES ($1, $2, $3, $4) RETURNING {}",
            COLUMNS
        );
        tracing::debug!(sql = %sql, user_id, kind = %target.kind(), "query");
        Ok(sqlx::query_as(&sql)
            .bind(user_id)
            .bind(target.planet_id())
            .bind(target.character_id())
            .bind(target.kind().as_str())
            .fetch_one(&self.db.pool)
            .await?)
    }

    pub async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let sql = "DELETE FROM favorites WHERE favorite_id = $1";
        tracing::debug!(sql = %sql, id, "query");
        let done = sqlx::query(sql).bind(id).execute(&self.db.pool).await?;
        Ok(done.rows_affected() > 0)
    }
}
