//! Route definitions for the `videos` namespace.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::video;
use crate::state::AppState;

/// Routes mounted at `/api/videos`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/list", get(video::list))
        .route("/create", post(video::create))
        .route("/update", post(video::update))
        .route("/delete", post(video::delete))
}
