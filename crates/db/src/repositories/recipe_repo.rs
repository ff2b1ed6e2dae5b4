//! Repository for the `recipes` table and its nested children.
//!
//! Create, replace, and append all run inside one transaction so a
//! recipe and its children land atomically: either the whole nested
//! write commits or none of it does. No manual rollback is needed;
//! dropping an uncommitted transaction rolls it back.

use std::collections::HashMap;

use recetario_core::types::DbId;
use sqlx::{PgPool, Postgres, Transaction};

use crate::models::comment::Comment;
use crate::models::image::Image;
use crate::models::ingredient::Ingredient;
use crate::models::recipe::{
    AppendChildren, CommentInput, CreateRecipe, ImageInput, IngredientInput, Recipe,
    RecipeDetail, RecipeWithMedia, UpdateRecipe, VideoInput,
};
use crate::models::video::Video;
use crate::repositories::category_repo::CategoryRepo;

const COLUMNS: &str = "id, title, description, body, prep_time_minutes, difficulty, \
    published_at, category_id, created_at, updated_at";

/// Provides CRUD operations for recipes, including nested child writes.
pub struct RecipeRepo;

impl RecipeRepo {
    /// List all recipes with their videos and images, in insertion order.
    ///
    /// An empty store yields an empty vec, never an error.
    pub async fn list(pool: &PgPool) -> Result<Vec<RecipeWithMedia>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM recipes ORDER BY id");
        let recipes = sqlx::query_as::<_, Recipe>(&query).fetch_all(pool).await?;

        let ids: Vec<DbId> = recipes.iter().map(|r| r.id).collect();
        let mut videos = load_grouped::<Video>(pool, "videos", &ids).await?;
        let mut images = load_grouped::<Image>(pool, "images", &ids).await?;

        Ok(recipes
            .into_iter()
            .map(|recipe| {
                let id = recipe.id;
                RecipeWithMedia {
                    recipe,
                    videos: videos.remove(&id).unwrap_or_default(),
                    images: images.remove(&id).unwrap_or_default(),
                }
            })
            .collect())
    }

    /// Find a recipe by ID with every nested collection populated.
    pub async fn find_detail(pool: &PgPool, id: DbId) -> Result<Option<RecipeDetail>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM recipes WHERE id = $1");
        let Some(recipe) = sqlx::query_as::<_, Recipe>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?
        else {
            return Ok(None);
        };

        let mut details = assemble_details(pool, vec![recipe]).await?;
        Ok(details.pop())
    }

    /// List the recipes owned by a category, fully populated.
    ///
    /// A category with zero recipes (or an unknown category id) yields
    /// an empty vec.
    pub async fn list_by_category(
        pool: &PgPool,
        category_id: DbId,
    ) -> Result<Vec<RecipeDetail>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM recipes WHERE category_id = $1 ORDER BY id");
        let recipes = sqlx::query_as::<_, Recipe>(&query)
            .bind(category_id)
            .fetch_all(pool)
            .await?;

        assemble_details(pool, recipes).await
    }

    /// Find the first recipe with an exact title match (scalar fields only).
    pub async fn find_by_title(pool: &PgPool, title: &str) -> Result<Option<Recipe>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM recipes WHERE title = $1 ORDER BY id LIMIT 1");
        sqlx::query_as::<_, Recipe>(&query)
            .bind(title)
            .fetch_optional(pool)
            .await
    }

    /// Insert a recipe plus all nested children in one transaction.
    ///
    /// The category connect is enforced by the foreign key; an unknown
    /// `category_id` surfaces as a database error and nothing persists.
    pub async fn create(pool: &PgPool, input: &CreateRecipe) -> Result<RecipeDetail, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let insert_query = format!(
            "INSERT INTO recipes
                (title, description, body, prep_time_minutes, difficulty,
                 published_at, category_id)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        let recipe = sqlx::query_as::<_, Recipe>(&insert_query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.body)
            .bind(input.prep_time_minutes)
            .bind(input.difficulty.as_str())
            .bind(input.published_at)
            .bind(input.category_id)
            .fetch_one(&mut *tx)
            .await?;

        insert_ingredients(&mut tx, recipe.id, 0, &input.ingredients).await?;
        insert_videos(&mut tx, recipe.id, &input.videos).await?;
        insert_images(&mut tx, recipe.id, &input.images).await?;
        insert_comments(&mut tx, recipe.id, &input.comments).await?;

        tx.commit().await?;

        Self::find_detail(pool, recipe.id)
            .await?
            .ok_or(sqlx::Error::RowNotFound)
    }

    /// Full-record replace: overwrite scalar fields and reconcile the
    /// nested children to exactly the given lists, in one transaction.
    ///
    /// Comments are not part of the replace payload and are preserved.
    /// Returns `None` if no recipe with the given id exists.
    pub async fn update_replace(
        pool: &PgPool,
        input: &UpdateRecipe,
    ) -> Result<Option<RecipeDetail>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let update_query = format!(
            "UPDATE recipes SET
                title = $2,
                description = $3,
                body = $4,
                prep_time_minutes = $5,
                difficulty = $6,
                published_at = $7,
                category_id = $8,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let Some(recipe) = sqlx::query_as::<_, Recipe>(&update_query)
            .bind(input.id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.body)
            .bind(input.prep_time_minutes)
            .bind(input.difficulty.as_str())
            .bind(input.published_at)
            .bind(input.category_id)
            .fetch_optional(&mut *tx)
            .await?
        else {
            return Ok(None);
        };

        for table in ["ingredients", "videos", "images"] {
            let delete_query = format!("DELETE FROM {table} WHERE recipe_id = $1");
            sqlx::query(&delete_query)
                .bind(recipe.id)
                .execute(&mut *tx)
                .await?;
        }

        insert_ingredients(&mut tx, recipe.id, 0, &input.ingredients).await?;
        insert_videos(&mut tx, recipe.id, &input.videos).await?;
        insert_images(&mut tx, recipe.id, &input.images).await?;

        tx.commit().await?;

        Self::find_detail(pool, recipe.id).await
    }

    /// Additive child mutation: append the given children after the
    /// recipe's existing ones, leaving scalar fields untouched.
    ///
    /// Returns `None` if no recipe with the given id exists.
    pub async fn append_children(
        pool: &PgPool,
        input: &AppendChildren,
    ) -> Result<Option<RecipeDetail>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let exists = sqlx::query_scalar::<_, DbId>("SELECT id FROM recipes WHERE id = $1")
            .bind(input.id)
            .fetch_optional(&mut *tx)
            .await?;
        if exists.is_none() {
            return Ok(None);
        }

        let next_position = sqlx::query_scalar::<_, i32>(
            "SELECT COALESCE(MAX(position) + 1, 0) FROM ingredients WHERE recipe_id = $1",
        )
        .bind(input.id)
        .fetch_one(&mut *tx)
        .await?;

        insert_ingredients(&mut tx, input.id, next_position, &input.ingredients).await?;
        insert_videos(&mut tx, input.id, &input.videos).await?;
        insert_images(&mut tx, input.id, &input.images).await?;

        tx.commit().await?;

        Self::find_detail(pool, input.id).await
    }

    /// Delete a recipe by ID; children cascade. Returns `true` if a
    /// row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM recipes WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

/// Populate full [`RecipeDetail`]s for a batch of recipe rows.
async fn assemble_details(
    pool: &PgPool,
    recipes: Vec<Recipe>,
) -> Result<Vec<RecipeDetail>, sqlx::Error> {
    if recipes.is_empty() {
        return Ok(Vec::new());
    }

    let ids: Vec<DbId> = recipes.iter().map(|r| r.id).collect();
    let mut ingredients = load_grouped::<Ingredient>(pool, "ingredients", &ids).await?;
    let mut videos = load_grouped::<Video>(pool, "videos", &ids).await?;
    let mut images = load_grouped::<Image>(pool, "images", &ids).await?;
    let mut comments = load_grouped::<Comment>(pool, "comments", &ids).await?;

    let mut details = Vec::with_capacity(recipes.len());
    for recipe in recipes {
        let category = CategoryRepo::find_by_id(pool, recipe.category_id)
            .await?
            // The FK guarantees the category row exists.
            .ok_or(sqlx::Error::RowNotFound)?;
        let id = recipe.id;
        details.push(RecipeDetail {
            recipe,
            category,
            ingredients: ingredients.remove(&id).unwrap_or_default(),
            videos: videos.remove(&id).unwrap_or_default(),
            images: images.remove(&id).unwrap_or_default(),
            comments: comments.remove(&id).unwrap_or_default(),
        });
    }
    Ok(details)
}

/// Load all child rows for a set of recipes, grouped by `recipe_id`.
///
/// Rows come back ordered by id except ingredients, which order by
/// their stored `position`.
async fn load_grouped<T>(
    pool: &PgPool,
    table: &str,
    recipe_ids: &[DbId],
) -> Result<HashMap<DbId, Vec<T>>, sqlx::Error>
where
    T: ChildRow + for<'r> sqlx::FromRow<'r, sqlx::postgres::PgRow> + Send + Unpin,
{
    if recipe_ids.is_empty() {
        return Ok(HashMap::new());
    }

    let order = if table == "ingredients" { "position, id" } else { "id" };
    let query = format!("SELECT * FROM {table} WHERE recipe_id = ANY($1) ORDER BY {order}");
    let rows = sqlx::query_as::<_, T>(&query)
        .bind(recipe_ids)
        .fetch_all(pool)
        .await?;

    let mut grouped: HashMap<DbId, Vec<T>> = HashMap::new();
    for row in rows {
        grouped.entry(row.recipe_id()).or_default().push(row);
    }
    Ok(grouped)
}

/// Child rows know which recipe they belong to.
trait ChildRow {
    fn recipe_id(&self) -> DbId;
}

impl ChildRow for Ingredient {
    fn recipe_id(&self) -> DbId {
        self.recipe_id
    }
}

impl ChildRow for Video {
    fn recipe_id(&self) -> DbId {
        self.recipe_id
    }
}

impl ChildRow for Image {
    fn recipe_id(&self) -> DbId {
        self.recipe_id
    }
}

impl ChildRow for Comment {
    fn recipe_id(&self) -> DbId {
        self.recipe_id
    }
}

async fn insert_ingredients(
    tx: &mut Transaction<'_, Postgres>,
    recipe_id: DbId,
    base_position: i32,
    inputs: &[IngredientInput],
) -> Result<(), sqlx::Error> {
    for (offset, ingredient) in inputs.iter().enumerate() {
        sqlx::query(
            "INSERT INTO ingredients (recipe_id, name, quantity, unit, position)
             VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(recipe_id)
        .bind(&ingredient.name)
        .bind(ingredient.quantity)
        .bind(ingredient.unit.as_str())
        .bind(base_position + offset as i32)
        .execute(&mut **tx)
        .await?;
    }
    Ok(())
}

async fn insert_videos(
    tx: &mut Transaction<'_, Postgres>,
    recipe_id: DbId,
    inputs: &[VideoInput],
) -> Result<(), sqlx::Error> {
    for video in inputs {
        sqlx::query(
            "INSERT INTO videos (recipe_id, title, url, duration_secs, published_at)
             VALUES ($1, $2, $3, $4, COALESCE($5, NOW()))",
        )
        .bind(recipe_id)
        .bind(&video.title)
        .bind(&video.url)
        .bind(video.duration_secs)
        .bind(video.published_at)
        .execute(&mut **tx)
        .await?;
    }
    Ok(())
}

async fn insert_images(
    tx: &mut Transaction<'_, Postgres>,
    recipe_id: DbId,
    inputs: &[ImageInput],
) -> Result<(), sqlx::Error> {
    for image in inputs {
        sqlx::query("INSERT INTO images (recipe_id, url) VALUES ($1, $2)")
            .bind(recipe_id)
            .bind(&image.url)
            .execute(&mut **tx)
            .await?;
    }
    Ok(())
}

async fn insert_comments(
    tx: &mut Transaction<'_, Postgres>,
    recipe_id: DbId,
    inputs: &[CommentInput],
) -> Result<(), sqlx::Error> {
    for comment in inputs {
        sqlx::query(
            "INSERT INTO comments (recipe_id, body, posted_at)
             VALUES ($1, $2, COALESCE($3, NOW()))",
        )
        .bind(recipe_id)
        .bind(&comment.body)
        .bind(comment.posted_at)
        .execute(&mut **tx)
        .await?;
    }
    Ok(())
}
