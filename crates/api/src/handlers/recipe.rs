//! Handlers for the `recipes` namespace.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use recetario_core::error::CoreError;
use recetario_core::types::DbId;
use recetario_db::models::recipe::{
    AppendChildren, CreateRecipe, Recipe, RecipeDetail, RecipeWithMedia, UpdateRecipe,
};
use recetario_db::models::DeleteById;
use recetario_db::repositories::RecipeRepo;
use serde::Deserialize;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::extract::{Json, Query};
use crate::gate::Identity;
use crate::handlers::IdQuery;
use crate::state::AppState;

/// Query parameters for `GET /api/recipes/byCategory`.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ByCategoryQuery {
    pub category_id: DbId,
}

/// Query parameters for `GET /api/recipes/search`.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchQuery {
    pub title: String,
}

/// GET /api/recipes/list
///
/// An empty store returns an empty array, never an error.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<RecipeWithMedia>>> {
    let recipes = RecipeRepo::list(&state.pool).await?;
    Ok(Json(recipes))
}

/// GET /api/recipes/getById?id=
pub async fn get_by_id(
    State(state): State<AppState>,
    Query(params): Query<IdQuery>,
) -> AppResult<Json<RecipeDetail>> {
    let recipe = RecipeRepo::find_detail(&state.pool, params.id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Recipe",
            id: params.id,
        }))?;
    Ok(Json(recipe))
}

/// GET /api/recipes/byCategory?categoryId=
///
/// A category that owns zero recipes returns an empty array.
pub async fn by_category(
    State(state): State<AppState>,
    Query(params): Query<ByCategoryQuery>,
) -> AppResult<Json<Vec<RecipeDetail>>> {
    let recipes = RecipeRepo::list_by_category(&state.pool, params.category_id).await?;
    Ok(Json(recipes))
}

/// GET /api/recipes/search?title=
///
/// Exact-title match; returns the first hit (scalar fields only) or
/// `null` when nothing matches.
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchQuery>,
) -> AppResult<Json<Option<Recipe>>> {
    let recipe = RecipeRepo::find_by_title(&state.pool, &params.title).await?;
    Ok(Json(recipe))
}

/// POST /api/recipes/create
///
/// Validates the full record including nested children, then persists
/// recipe plus children in one transaction.
pub async fn create(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    Json(input): Json<CreateRecipe>,
) -> AppResult<(StatusCode, Json<RecipeDetail>)> {
    input.validate()?;
    let recipe = RecipeRepo::create(&state.pool, &input).await?;
    tracing::info!(recipe_id = recipe.recipe.id, by = %identity, "Recipe created");
    Ok((StatusCode::CREATED, Json(recipe)))
}

/// POST /api/recipes/update
///
/// Full-record replace: scalars overwritten, nested children
/// reconciled to exactly the payload's lists.
pub async fn update(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    Json(input): Json<UpdateRecipe>,
) -> AppResult<Json<RecipeDetail>> {
    input.validate()?;
    let recipe = RecipeRepo::update_replace(&state.pool, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Recipe",
            id: input.id,
        }))?;
    tracing::info!(recipe_id = input.id, by = %identity, "Recipe replaced");
    Ok(Json(recipe))
}

/// POST /api/recipes/appendChildren
///
/// Additive semantics: appends the payload's children after the
/// recipe's existing ones, scalars untouched.
pub async fn append_children(
    State(state): State<AppState>,
    Json(input): Json<AppendChildren>,
) -> AppResult<Json<RecipeDetail>> {
    input.validate()?;
    let recipe = RecipeRepo::append_children(&state.pool, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Recipe",
            id: input.id,
        }))?;
    Ok(Json(recipe))
}

/// POST /api/recipes/delete
///
/// Deleting an id that no longer exists is a 404, not a silent success.
pub async fn delete(
    State(state): State<AppState>,
    Json(input): Json<DeleteById>,
) -> AppResult<StatusCode> {
    let deleted = RecipeRepo::delete(&state.pool, input.id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Recipe",
            id: input.id,
        }))
    }
}
