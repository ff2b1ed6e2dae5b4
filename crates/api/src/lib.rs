//! Recetario API server library.
//!
//! Exposes the core building blocks (config, state, error handling,
//! gate middleware, routes) so integration tests and the binary
//! entrypoint can both access them.

pub mod config;
pub mod error;
pub mod extract;
pub mod gate;
pub mod handlers;
pub mod router;
pub mod routes;
pub mod state;
