//! Handlers for the `ingredients` namespace.

use axum::extract::State;
use axum::http::StatusCode;
use recetario_core::error::CoreError;
use recetario_db::models::ingredient::{CreateIngredient, Ingredient, UpdateIngredient};
use recetario_db::models::DeleteById;
use recetario_db::repositories::IngredientRepo;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::extract::Json;
use crate::state::AppState;

/// GET /api/ingredients/list
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Ingredient>>> {
    let ingredients = IngredientRepo::list(&state.pool).await?;
    Ok(Json(ingredients))
}

/// POST /api/ingredients/create
///
/// An unknown `recipe_id` fails the foreign key and maps to 400.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateIngredient>,
) -> AppResult<(StatusCode, Json<Ingredient>)> {
    input.validate()?;
    let ingredient = IngredientRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(ingredient)))
}

/// POST /api/ingredients/update
pub async fn update(
    State(state): State<AppState>,
    Json(input): Json<UpdateIngredient>,
) -> AppResult<Json<Ingredient>> {
    input.validate()?;
    let ingredient = IngredientRepo::update(&state.pool, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Ingredient",
            id: input.id,
        }))?;
    Ok(Json(ingredient))
}

/// POST /api/ingredients/delete
pub async fn delete(
    State(state): State<AppState>,
    Json(input): Json<DeleteById>,
) -> AppResult<StatusCode> {
    let deleted = IngredientRepo::delete(&state.pool, input.id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Ingredient",
            id: input.id,
        }))
    }
}
