use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable; the pool is already reference-counted.
/// The pool handle is injected here once at startup and passed down,
/// so no module ever owns its own database client.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: recetario_db::DbPool,
    /// Server configuration (read by the gate middleware and CORS setup).
    pub config: Arc<ServerConfig>,
}
