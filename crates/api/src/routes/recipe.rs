//! Route definitions for the `recipes` namespace.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::recipe;
use crate::state::AppState;

/// Routes mounted at `/api/recipes`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/list", get(recipe::list))
        .route("/getById", get(recipe::get_by_id))
        .route("/byCategory", get(recipe::by_category))
        .route("/search", get(recipe::search))
        .route("/create", post(recipe::create))
        .route("/update", post(recipe::update))
        .route("/appendChildren", post(recipe::append_children))
        .route("/delete", post(recipe::delete))
}
