//! Ingredient entity model and DTOs.

use recetario_core::catalog::Unit;
use recetario_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `ingredients` table.
///
/// `unit` holds the canonical string form of [`Unit`]; `position`
/// preserves insertion order within a recipe.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Ingredient {
    pub id: DbId,
    pub recipe_id: DbId,
    pub name: String,
    pub quantity: f64,
    pub unit: String,
    pub position: i32,
}

/// DTO for creating an ingredient attached to an existing recipe.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateIngredient {
    pub recipe_id: DbId,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub name: String,
    #[validate(range(exclusive_min = 0.0, message = "must be positive"))]
    pub quantity: f64,
    pub unit: Unit,
}

/// DTO for replacing an ingredient's fields.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateIngredient {
    pub id: DbId,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub name: String,
    #[validate(range(exclusive_min = 0.0, message = "must be positive"))]
    pub quantity: f64,
    pub unit: Unit,
}
