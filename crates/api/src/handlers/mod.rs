//! Procedure handlers, one module per namespace.
//!
//! Every handler is a single-shot round trip: validate the input
//! shape, make one repository call, map the outcome. No state is
//! carried between calls.

pub mod category;
pub mod ingredient;
pub mod recipe;
pub mod user;
pub mod video;

use recetario_core::types::DbId;
use serde::Deserialize;

/// Query parameters for lookups by id (`?id=`).
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct IdQuery {
    pub id: DbId,
}
