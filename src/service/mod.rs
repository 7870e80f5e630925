//! Repositories: the only place SQL lives. Handlers call these and never touch the pool directly.

mod characters;
mod favorites;
mod planets;
mod users;
mod validation;

pub use characters::CharacterRepo;
pub use favorites::FavoriteRepo;
pub use planets::PlanetRepo;
pub use users::UserRepo;
pub use validation::RequestValidator;

use crate::error::AppError;
use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};

/// CRUD over one table keyed by a store-generated integer id.
#[async_trait]
pub trait Repository: Send + Sync {
    type Row: Serialize + Send;
    type New: DeserializeOwned + Send;
    type Changes: DeserializeOwned + Send;

    async fn list(&self) -> Result<Vec<Self::Row>, AppError>;

    async fn find(&self, id: i64) -> Result<Option<Self::Row>, AppError>;

    async fn insert(&self, new: Self::New) -> Result<Self::Row, AppError>;

    /// Merge `changes` into the stored row. `None` when the id does not exist.
    async fn update(&self, id: i64, changes: Self::Changes) -> Result<Option<Self::Row>, AppError>;

    /// `false` when the id does not exist.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;
}
