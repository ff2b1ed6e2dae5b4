//! Route definitions for the `ingredients` namespace.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::ingredient;
use crate::state::AppState;

/// Routes mounted at `/api/ingredients`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/list", get(ingredient::list))
        .route("/create", post(ingredient::create))
        .route("/update", post(ingredient::update))
        .route("/delete", post(ingredient::delete))
}
