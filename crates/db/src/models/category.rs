//! Category entity model and DTOs.

use recetario_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `categories` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Category {
    pub id: DbId,
    pub name: String,
    pub created_at: Timestamp,
}

/// DTO for creating a new category.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCategory {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub name: String,
}

/// DTO for renaming an existing category.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateCategory {
    pub id: DbId,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub name: String,
}
