//! Video entity model and DTOs.

use recetario_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `videos` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Video {
    pub id: DbId,
    pub recipe_id: DbId,
    pub title: String,
    pub url: String,
    pub duration_secs: i32,
    pub published_at: Timestamp,
}

/// DTO for creating a video attached to an existing recipe.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateVideo {
    pub recipe_id: DbId,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub title: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub url: String,
    #[validate(range(min = 0, message = "must not be negative"))]
    pub duration_secs: i32,
    pub published_at: Option<Timestamp>,
}

/// DTO for replacing a video's fields.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateVideo {
    pub id: DbId,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub title: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub url: String,
    #[validate(range(min = 0, message = "must not be negative"))]
    pub duration_secs: i32,
}
