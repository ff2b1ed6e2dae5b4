//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` + `Validate` create DTO for inserts
//! - A `Deserialize` + `Validate` update DTO (full-record replace)

pub mod category;
pub mod comment;
pub mod image;
pub mod ingredient;
pub mod recipe;
pub mod user;
pub mod video;

use recetario_core::types::DbId;
use serde::Deserialize;

/// Body of every delete mutation: `{ "id": <n> }`.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct DeleteById {
    pub id: DbId,
}
