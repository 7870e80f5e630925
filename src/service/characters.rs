//! SQL for the `characters` table.

use super::Repository;
use crate::error::AppError;
use crate::models::{Character, CharacterChanges, NewCharacter};
use crate::store::Db;
use async_trait::async_trait;

const COLUMNS: &str = "character_id, name, species, homeworld, gender";

pub struct CharacterRepo {
    db: Db,
}

impl CharacterRepo {
    pub fn new(db: Db) -> Self {
        CharacterRepo { db }
    }
}

#[async_trait]
impl Repository for CharacterRepo {
    type Row = Character;
    type New = NewCharacter;
    type Changes = CharacterChanges;

    async fn list(&self) -> Result<Vec<Character>, AppError> {
        let sql = format!("SELECT {} FROM characters ORDER BY character_id", COLUMNS);
        tracing::debug!(sql = %sql, "query");
        Ok(sqlx::query_as(&sql).fetch_all(&self.db.pool).await?)
    }

    async fn find(&self, id: i64) -> Result<Option<Character>, AppError> {
        let sql = format!("SELECT {} FROM characters WHERE character_id = $1", COLUMNS);
        tracing::debug!(sql = %sql, id, "query");
        Ok(sqlx::query_as(&sql).bind(id).fetch_optional(&self.db.pool).await?)
    }

    async fn insert(&self, new: NewCharacter) -> Result<Character, AppError> {
        let sql = format!(
            "INSERT INTO characters (name, species, homeworld, gender) VALUES ($1, $2, $3, $4) RETURNING {}",
            COLUMNS
        );
        tracing::debug!(sql = %sql, "query");
        Ok(sqlx::query_as(&sql)
            .bind(new.name)
            .bind(new.species)
            .bind(new.homeworld)
            .bind(new.gender)
            .fetch_one(&self.db.pool)
            .await?)
    }

    async fn update(&self, id: i64, changes: CharacterChanges) -> Result<Option<Character>, AppError> {
        let Some(mut current) = self.find(id).await? else {
            return Ok(None);
        };
        changes.apply(&mut current);
        let sql = "UPDATE characters SET name = $1, species = $2, homeworld = $3, gender = $4 WHERE character_id = $5";
        tracing::debug!(sql = %sql, id, "query");
        let done = sqlx::query(sql)
            .bind(current.name.clone())
            .bind(current.species.clone())
            .bind(current.homeworld.clone())
            .bind(current.gender.clone())
            .bind(id)
            .execute(&self.db.pool)
            .await?;
        if done.rows_affected() == 0 {
            return Ok(None);
        }
        Ok(Some(current))
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let sql = "DELETE FROM characters WHERE character_id = $1";
        tracing::debug!(sql = %sql, id, "query");
        let done = sqlx::query(sql).bind(id).execute(&self.db.pool).await?;
        Ok(done.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn yoda() -> NewCharacter {
        NewCharacter {
            name: "Yoda".into(),
            species: "Yoda's species".into(),
            homeworld: "Unknown".into(),
            gender: None,
        }
    }

    #[tokio::test]
    async fn insert_find_update_delete() {
        let repo = CharacterRepo::new(Db::in_memory().await.unwrap());
        let created = repo.insert(yoda()).await.unwrap();
        assert_eq!(repo.find(created.character_id).await.unwrap(), Some(created.clone()));

        let changes = CharacterChanges {
            gender: Some(Some("male".into())),
            ..Default::default()
        };
        let updated = repo.update(created.character_id, changes).await.unwrap().unwrap();
        assert_eq!(updated.gender.as_deref(), Some("male"));
        assert_eq!(updated.name, "Yoda");

        assert!(repo.delete(created.character_id).await.unwrap());
        assert!(!repo.delete(created.character_id).await.unwrap());
        assert_eq!(repo.find(created.character_id).await.unwrap(), None);
    }

    #[tokio::test]
    async fn ids_are_monotonic() {
        let repo = CharacterRepo::new(Db::in_memory().await.unwrap());
        let a = repo.insert(yoda()).await.unwrap();
        repo.delete(a.character_id).await.unwrap();
        let b = repo.insert(yoda()).await.unwrap();
        assert!(b.character_id > a.character_id);
        assert_eq!(repo.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn update_unknown_id_is_none() {
        let repo = CharacterRepo::new(Db::in_memory().await.unwrap());
        assert!(repo.update(99999, CharacterChanges::default()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn update_that_writes_no_row_is_none() {
        let db = Db::in_memory().await.unwrap();
        let repo = CharacterRepo::new(db.clone());
        let created = repo.insert(yoda()).await.unwrap();
        // Skip every write, as if the row vanished between the read and the UPDATE.
        sqlx::query("CREATE TRIGGER freeze BEFORE UPDATE ON characters BEGIN SELECT RAISE(IGNORE); END")
            .execute(&db.pool)
            .await
            .unwrap();
        let changes = CharacterChanges {
            name: Some("Master Yoda".into()),
            ..Default::default()
        };
        assert!(repo.update(created.character_id, changes).await.unwrap().is_none());
    }
}
