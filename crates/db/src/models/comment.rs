//! Comment entity model. Comments are written as nested children of a
//! recipe and read back with the recipe detail.

use recetario_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `comments` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Comment {
    pub id: DbId,
    pub recipe_id: DbId,
    pub body: String,
    pub posted_at: Timestamp,
}
