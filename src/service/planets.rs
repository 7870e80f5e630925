//! SQL for the `planets` table.

use super::Repository;
use crate::error::AppError;
use crate::models::{NewPlanet, Planet, PlanetChanges};
use crate::store::Db;
use async_trait::async_trait;

const COLUMNS: &str = "planet_id, name, climate, terrain, population";

pub struct PlanetRepo {
    db: Db,
}

impl PlanetRepo {
    pub fn new(db: Db) -> Self {
        PlanetRepo { db }
    }
}

#[async_trait]
impl Repository for PlanetRepo {
    type Row = Planet;
    type New = NewPlanet;
    type Changes = PlanetChanges;

    async fn list(&self) -> Result<Vec<Planet>, AppError> {
        let sql = format!("SELECT {} FROM planets ORDER BY planet_id", COLUMNS);
        tracing::debug!(sql = %sql, "query");
        Ok(sqlx::query_as(&sql).fetch_all(&self.db.pool).await?)
    }

    async fn find(&self, id: i64) -> Result<Option<Planet>, AppError> {
        let sql = format!("SELECT {} FROM planets WHERE planet_id = $1", COLUMNS);
        tracing::debug!(sql = %sql, id, "query");
        Ok(sqlx::query_as(&sql).bind(id).fetch_optional(&self.db.pool).await?)
    }

    async fn insert(&self, new: NewPlanet) -> Result<Planet, AppError> {
        let sql = format!(
            "INSERT INTO planets (name, climate, terrain, population) VALUES ($1, $2, $3, $4) RETURNING {}",
            COLUMNS
        );
        tracing::debug!(sql = %sql, "query");
        Ok(sqlx::query_as(&sql)
            .bind(new.name)
            .bind(new.climate)
            .bind(new.terrain)
            .bind(new.population)
            .fetch_one(&self.db.pool)
            .await?)
    }

    async fn update(&self, id: i64, changes: PlanetChanges) -> Result<Option<Planet>, AppError> {
        let Some(mut current) = self.find(id).await? else {
            return Ok(None);
        };
        changes.apply(&mut current);
        let sql = "UPDATE planets SET name = $1, climate = $2, terrain = $3, population = $4 WHERE planet_id = $5";
        tracing::debug!(sql = %sql, id, "query");
        let done = sqlx::query(sql)
            .bind(current.name.clone())
            .bind(current.climate.clone())
            .bind(current.terrain.clone())
            .bind(current.population)
            .bind(id)
            .execute(&self.db.pool)
            .await?;
        if done.rows_affected() == 0 {
            return Ok(None);
        }
        Ok(Some(current))
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let sql = "DELETE FROM planets WHERE planet_id = $1";
        tracing::debug!(sql = %sql, id, "query");
        let done = sqlx::query(sql).bind(id).execute(&self.db.pool).await?;
        Ok(done.rows_affected() > 0)
    }
}
