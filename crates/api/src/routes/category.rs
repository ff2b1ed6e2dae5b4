//! Route definitions for the `categories` namespace.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::category;
use crate::state::AppState;

/// Routes mounted at `/api/categories`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/list", get(category::list))
        .route("/create", post(category::create))
        .route("/update", post(category::update))
        .route("/delete", post(category::delete))
}
