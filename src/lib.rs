//! Star Wars resource API: characters, planets, users and favorites over PostgreSQL or SQLite.

pub mod error;
pub mod handlers;
pub mod models;
pub mod response;
pub mod routes;
pub mod service;
pub mod settings;
pub mod state;
pub mod store;

pub use error::{AppError, ConfigError};
pub use routes::{app, SITEMAP};
pub use settings::Settings;
pub use state::AppState;
pub use store::{ensure_tables, Backend, Db};
