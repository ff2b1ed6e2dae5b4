//! Recipe entity model, nested read/write shapes, and DTOs.

use recetario_core::catalog::{Difficulty, Unit};
use recetario_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::models::category::Category;
use crate::models::comment::Comment;
use crate::models::image::Image;
use crate::models::ingredient::Ingredient;
use crate::models::video::Video;

/// A row from the `recipes` table.
///
/// `difficulty` holds the canonical string form of [`Difficulty`].
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Recipe {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub body: String,
    pub prep_time_minutes: i32,
    pub difficulty: String,
    pub published_at: Timestamp,
    pub category_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// List shape: a recipe with its videos and images populated.
#[derive(Debug, Serialize)]
pub struct RecipeWithMedia {
    #[serde(flatten)]
    pub recipe: Recipe,
    pub videos: Vec<Video>,
    pub images: Vec<Image>,
}

/// Full read shape: a recipe with every nested collection populated.
///
/// Ingredients come back in their stored `position` order.
#[derive(Debug, Serialize)]
pub struct RecipeDetail {
    #[serde(flatten)]
    pub recipe: Recipe,
    pub category: Category,
    pub ingredients: Vec<Ingredient>,
    pub videos: Vec<Video>,
    pub images: Vec<Image>,
    pub comments: Vec<Comment>,
}

/// Nested ingredient in a recipe create/update payload.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct IngredientInput {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub name: String,
    #[validate(range(exclusive_min = 0.0, message = "must be positive"))]
    pub quantity: f64,
    pub unit: Unit,
}

/// Nested video in a recipe create/update payload.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct VideoInput {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub title: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub url: String,
    #[validate(range(min = 0, message = "must not be negative"))]
    pub duration_secs: i32,
    pub published_at: Option<Timestamp>,
}

/// Nested image in a recipe create/update payload.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ImageInput {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub url: String,
}

/// Nested comment in a recipe create payload.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CommentInput {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub body: String,
    pub posted_at: Option<Timestamp>,
}

/// DTO for creating a recipe plus all nested children in one write.
///
/// The category must already exist; the insert connects to it by id.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateRecipe {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub title: String,
    pub description: String,
    pub body: String,
    #[validate(range(min = 1, message = "must be positive"))]
    pub prep_time_minutes: i32,
    pub difficulty: Difficulty,
    pub published_at: Timestamp,
    pub category_id: DbId,
    #[validate(nested)]
    #[serde(default)]
    pub ingredients: Vec<IngredientInput>,
    #[validate(nested)]
    #[serde(default)]
    pub videos: Vec<VideoInput>,
    #[validate(nested)]
    #[serde(default)]
    pub images: Vec<ImageInput>,
    #[validate(nested)]
    #[serde(default)]
    pub comments: Vec<CommentInput>,
}

/// DTO for the full-record replace mutation.
///
/// Scalar fields overwrite the stored row; nested collections replace
/// the stored children wholesale (comments are left untouched).
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateRecipe {
    pub id: DbId,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub title: String,
    pub description: String,
    pub body: String,
    #[validate(range(min = 1, message = "must be positive"))]
    pub prep_time_minutes: i32,
    pub difficulty: Difficulty,
    pub published_at: Timestamp,
    pub category_id: DbId,
    #[validate(nested)]
    #[serde(default)]
    pub ingredients: Vec<IngredientInput>,
    #[validate(nested)]
    #[serde(default)]
    pub videos: Vec<VideoInput>,
    #[validate(nested)]
    #[serde(default)]
    pub images: Vec<ImageInput>,
}

/// DTO for the additive child mutation (`recipes/appendChildren`).
///
/// Scalars are not touched; the given children are appended after the
/// recipe's existing ones.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AppendChildren {
    pub id: DbId,
    #[validate(nested)]
    #[serde(default)]
    pub ingredients: Vec<IngredientInput>,
    #[validate(nested)]
    #[serde(default)]
    pub videos: Vec<VideoInput>,
    #[validate(nested)]
    #[serde(default)]
    pub images: Vec<ImageInput>,
}
