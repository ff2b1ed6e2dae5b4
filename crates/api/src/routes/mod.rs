//! Procedure route tree.
//!
//! Namespaces compose under `/api/<namespace>/<procedure>`: queries
//! are GET with query parameters, mutations POST with a JSON body.
//! Once published these paths are a client contract; add procedures,
//! never move them.

pub mod category;
pub mod health;
pub mod ingredient;
pub mod recipe;
pub mod user;
pub mod video;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /recipes/list             GET     all recipes with videos + images
/// /recipes/getById          GET     full detail by ?id=
/// /recipes/byCategory       GET     populated recipes by ?categoryId=
/// /recipes/search           GET     first exact-title match by ?title=
/// /recipes/create           POST    nested create (201)
/// /recipes/update           POST    full-record replace
/// /recipes/appendChildren   POST    additive child append
/// /recipes/delete           POST    delete by {id} (204)
///
/// /categories/list          GET
/// /categories/create        POST
/// /categories/update        POST
/// /categories/delete        POST
///
/// /ingredients/list         GET
/// /ingredients/create       POST
/// /ingredients/update       POST
/// /ingredients/delete       POST
///
/// /videos/list              GET
/// /videos/create            POST
/// /videos/update            POST
/// /videos/delete            POST
///
/// /users/byUsername         GET     lookup by ?username=
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/recipes", recipe::router())
        .nest("/categories", category::router())
        .nest("/ingredients", ingredient::router())
        .nest("/videos", video::router())
        .nest("/users", user::router())
}
