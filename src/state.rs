//! Shared application state for all routes.

use crate::store::Db;

#[derive(Clone)]
pub struct AppState {
    /// Built once at startup; every handler borrows connections from it.
    pub db: Db,
}
