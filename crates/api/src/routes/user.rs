//! Route definitions for the `users` namespace.

use axum::routing::get;
use axum::Router;

use crate::handlers::user;
use crate::state::AppState;

/// Routes mounted at `/api/users`.
pub fn router() -> Router<AppState> {
    Router::new().route("/byUsername", get(user::by_username))
}
