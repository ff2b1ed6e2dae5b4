//! Handlers for the `users` namespace.
//!
//! Read-only: account creation belongs to the external access gate.

use axum::extract::State;
use recetario_db::models::user::User;
use recetario_db::repositories::UserRepo;
use serde::Deserialize;

use crate::error::AppResult;
use crate::extract::{Json, Query};
use crate::state::AppState;

/// Query parameters for `GET /api/users/byUsername`.
#[derive(Debug, Clone, Deserialize)]
pub struct ByUsernameQuery {
    pub username: String,
}

/// GET /api/users/byUsername?username=
///
/// Returns the user or `null` when the username is unknown.
pub async fn by_username(
    State(state): State<AppState>,
    Query(params): Query<ByUsernameQuery>,
) -> AppResult<Json<Option<User>>> {
    let user = UserRepo::find_by_username(&state.pool, &params.username).await?;
    Ok(Json(user))
}
