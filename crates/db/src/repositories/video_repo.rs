//! Repository for the `videos` table.

use recetario_core::types::DbId;
use sqlx::PgPool;

use crate::models::video::{CreateVideo, UpdateVideo, Video};

const COLUMNS: &str = "id, recipe_id, title, url, duration_secs, published_at";

/// Provides CRUD operations for videos.
pub struct VideoRepo;

impl VideoRepo {
    /// List all videos in insertion order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Video>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM videos ORDER BY id");
        sqlx::query_as::<_, Video>(&query).fetch_all(pool).await
    }

    /// Insert a video attached to an existing recipe.
    ///
    /// If `published_at` is `None`, defaults to `NOW()`.
    pub async fn create(pool: &PgPool, input: &CreateVideo) -> Result<Video, sqlx::Error> {
        let query = format!(
            "INSERT INTO videos (recipe_id, title, url, duration_secs, published_at)
             VALUES ($1, $2, $3, $4, COALESCE($5, NOW()))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Video>(&query)
            .bind(input.recipe_id)
            .bind(&input.title)
            .bind(&input.url)
            .bind(input.duration_secs)
            .bind(input.published_at)
            .fetch_one(pool)
            .await
    }

    /// Replace a video's fields. Returns `None` if the id is unknown.
    pub async fn update(pool: &PgPool, input: &UpdateVideo) -> Result<Option<Video>, sqlx::Error> {
        let query = format!(
            "UPDATE videos SET title = $2, url = $3, duration_secs = $4
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Video>(&query)
            .bind(input.id)
            .bind(&input.title)
            .bind(&input.url)
            .bind(input.duration_secs)
            .fetch_optional(pool)
            .await
    }

    /// Delete a video by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM videos WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
