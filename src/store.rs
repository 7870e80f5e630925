//! Connection pool and table bootstrap. The pool speaks to PostgreSQL or SQLite through sqlx's `Any` driver,
//! so every statement here and in `service` sticks to SQL both engines accept.

use crate::error::{AppError, ConfigError};
use sqlx::any::{AnyPoolOptions, install_default_drivers};
use sqlx::AnyPool;

/// Relational engine behind the pool, picked from the URL scheme.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Backend {
    Postgres,
    Sqlite,
}

impl Backend {
    pub fn from_url(url: &str) -> Result<Self, ConfigError> {
        if url.starts_with("postgresql:") || url.starts_with("postgres:") {
            Ok(Backend::Postgres)
        } else if url.starts_with("sqlite:") {
            Ok(Backend::Sqlite)
        } else {
            Err(ConfigError::UnsupportedDatabase(url.split(':').next().unwrap_or(url).to_string()))
        }
    }

    fn serial_pk(self, column: &str) -> String {
        match self {
            Backend::Postgres => format!("{} BIGSERIAL PRIMARY KEY", column),
            Backend::Sqlite => format!("{} INTEGER PRIMARY KEY AUTOINCREMENT", column),
        }
    }
}

/// Process-wide pool plus the backend it talks to. Cheap to clone.
#[derive(Clone, Debug)]
pub struct Db {
    pub pool: AnyPool,
    pub backend: Backend,
}

impl Db {
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self, AppError> {
        let backend = Backend::from_url(database_url)?;
        install_default_drivers();
        let pool = AnyPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await?;
        tracing::info!(?backend, "connected to database");
        Ok(Db { pool, backend })
    }

    /// Single-connection in-memory SQLite with tables created. The connection never idles out,
    /// since closing it drops the database.
    pub async fn in_memory() -> Result<Self, AppError> {
        install_default_drivers();
        let pool = AnyPoolOptions::new()
            .min_connections(1)
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await?;
        let db = Db {
            pool,
            backend: Backend::Sqlite,
        };
        ensure_tables(&db).await?;
        Ok(db)
    }
}

/// Create `users`, `planets`, `characters` and `favorites` if missing. Safe to run on every start.
/// Favorites cascade with their user or target, and must point at exactly one target matching their type.
pub async fn ensure_tables(db: &Db) -> Result<(), AppError> {
    let b = db.backend;
    let statements = [
        format!(
            r#"
            CREATE TABLE IF NOT EXISTS users (
                {},
                email TEXT NOT NULL UNIQUE,
                password_hash TEXT NOT NULL,
                username TEXT NOT NULL,
                user_creation_date TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
            )
            "#,
            b.serial_pk("user_id")
        ),
        format!(
            r#"
            CREATE TABLE IF NOT EXISTS planets (
                {},
                name TEXT NOT NULL,
                climate TEXT,
                terrain TEXT,
                population BIGINT
            )
            "#,
            b.serial_pk("planet_id")
        ),
        format!(
            r#"
            CREATE TABLE IF NOT EXISTS characters (
                {},
                name TEXT NOT NULL,
                species TEXT,
                homeworld TEXT,
                gender TEXT
            )
            "#,
            b.serial_pk("character_id")
        ),
        format!(
            r#"
            CREATE TABLE IF NOT EXISTS favorites (
                {},
                user_id BIGINT NOT NULL REFERENCES users(user_id) ON DELETE CASCADE,
                planet_id BIGINT REFERENCES planets(planet_id) ON DELETE CASCADE,
                character_id BIGINT REFERENCES characters(character_id) ON DELETE CASCADE,
                favorite_type TEXT NOT NULL,
                CHECK (
                    (favorite_type = 'planet' AND planet_id IS NOT NULL AND character_id IS NULL)
                    OR (favorite_type = 'character' AND character_id IS NOT NULL AND planet_id IS NULL)
                )
            )
            "#,
            b.serial_pk("favorite_id")
        ),
    ];
    for ddl in &statements {
        tracing::debug!(sql = %ddl, "bootstrap");
        sqlx::query(ddl).execute(&db.pool).await?;
    }
    tracing::info!("tables ready");
    Ok(())
}
