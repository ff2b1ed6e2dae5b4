//! Handlers for the `categories` namespace.

use axum::extract::State;
use axum::http::StatusCode;
use recetario_core::error::CoreError;
use recetario_db::models::category::{Category, CreateCategory, UpdateCategory};
use recetario_db::models::DeleteById;
use recetario_db::repositories::CategoryRepo;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::extract::Json;
use crate::state::AppState;

/// GET /api/categories/list
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Category>>> {
    let categories = CategoryRepo::list(&state.pool).await?;
    Ok(Json(categories))
}

/// POST /api/categories/create
///
/// Duplicate names are a 409 (unique constraint).
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateCategory>,
) -> AppResult<(StatusCode, Json<Category>)> {
    input.validate()?;
    let category = CategoryRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(category)))
}

/// POST /api/categories/update
pub async fn update(
    State(state): State<AppState>,
    Json(input): Json<UpdateCategory>,
) -> AppResult<Json<Category>> {
    input.validate()?;
    let category = CategoryRepo::update(&state.pool, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Category",
            id: input.id,
        }))?;
    Ok(Json(category))
}

/// POST /api/categories/delete
pub async fn delete(
    State(state): State<AppState>,
    Json(input): Json<DeleteById>,
) -> AppResult<StatusCode> {
    let deleted = CategoryRepo::delete(&state.pool, input.id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Category",
            id: input.id,
        }))
    }
}
