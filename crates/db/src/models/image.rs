//! Image entity model. Images are only ever written as nested children
//! of a recipe; the URL comes from the external image-hosting service.

use recetario_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `images` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Image {
    pub id: DbId,
    pub recipe_id: DbId,
    pub url: String,
}
