//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. Only the recipe
//! repository opens transactions: a recipe plus its nested children is
//! the one multi-row write that must be atomic.

pub mod category_repo;
pub mod ingredient_repo;
pub mod recipe_repo;
pub mod user_repo;
pub mod video_repo;

pub use category_repo::CategoryRepo;
pub use ingredient_repo::IngredientRepo;
pub use recipe_repo::RecipeRepo;
pub use user_repo::UserRepo;
pub use video_repo::VideoRepo;
