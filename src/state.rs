//! Shared application state for all routes.

use sqlx::SqlitePool;

#[derive(Clone)]
pub struct AppState {
    /// The one shared database handle; cloning the pool is cheap and every
    /// handler goes through it.
    pub pool: SqlitePool,
}
