//! Domain types shared across the recetario backend.
//!
//! No I/O lives here: just the entity enumerations, the id/timestamp
//! aliases, and the error taxonomy the `db` and `api` crates build on.

pub mod catalog;
pub mod error;
pub mod types;
