//! Repository for the `ingredients` table.
//!
//! Standalone CRUD for single ingredients; recipe-nested writes live
//! in [`crate::repositories::recipe_repo`].

use recetario_core::types::DbId;
use sqlx::PgPool;

use crate::models::ingredient::{CreateIngredient, Ingredient, UpdateIngredient};

const COLUMNS: &str = "id, recipe_id, name, quantity, unit, position";

/// Provides CRUD operations for ingredients.
pub struct IngredientRepo;

impl IngredientRepo {
    /// List all ingredients in insertion order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Ingredient>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM ingredients ORDER BY id");
        sqlx::query_as::<_, Ingredient>(&query).fetch_all(pool).await
    }

    /// Insert an ingredient attached to an existing recipe, appended
    /// after the recipe's current ingredients.
    pub async fn create(
        pool: &PgPool,
        input: &CreateIngredient,
    ) -> Result<Ingredient, sqlx::Error> {
        let query = format!(
            "INSERT INTO ingredients (recipe_id, name, quantity, unit, position)
             VALUES ($1, $2, $3, $4,
                     (SELECT COALESCE(MAX(position) + 1, 0) FROM ingredients WHERE recipe_id = $1))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Ingredient>(&query)
            .bind(input.recipe_id)
            .bind(&input.name)
            .bind(input.quantity)
            .bind(input.unit.as_str())
            .fetch_one(pool)
            .await
    }

    /// Replace an ingredient's fields. Returns `None` if the id is unknown.
    pub async fn update(
        pool: &PgPool,
        input: &UpdateIngredient,
    ) -> Result<Option<Ingredient>, sqlx::Error> {
        let query = format!(
            "UPDATE ingredients SET name = $2, quantity = $3, unit = $4
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Ingredient>(&query)
            .bind(input.id)
            .bind(&input.name)
            .bind(input.quantity)
            .bind(input.unit.as_str())
            .fetch_optional(pool)
            .await
    }

    /// Delete an ingredient by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM ingredients WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
