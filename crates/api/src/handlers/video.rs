//! Handlers for the `videos` namespace.

use axum::extract::State;
use axum::http::StatusCode;
use recetario_core::error::CoreError;
use recetario_db::models::video::{CreateVideo, UpdateVideo, Video};
use recetario_db::models::DeleteById;
use recetario_db::repositories::VideoRepo;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::extract::Json;
use crate::state::AppState;

/// GET /api/videos/list
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Video>>> {
    let videos = VideoRepo::list(&state.pool).await?;
    Ok(Json(videos))
}

/// POST /api/videos/create
///
/// An unknown `recipe_id` fails the foreign key and maps to 400.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateVideo>,
) -> AppResult<(StatusCode, Json<Video>)> {
    input.validate()?;
    let video = VideoRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(video)))
}

/// POST /api/videos/update
pub async fn update(
    State(state): State<AppState>,
    Json(input): Json<UpdateVideo>,
) -> AppResult<Json<Video>> {
    input.validate()?;
    let video = VideoRepo::update(&state.pool, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Video",
            id: input.id,
        }))?;
    Ok(Json(video))
}

/// POST /api/videos/delete
pub async fn delete(
    State(state): State<AppState>,
    Json(input): Json<DeleteById>,
) -> AppResult<StatusCode> {
    let deleted = VideoRepo::delete(&state.pool, input.id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Video",
            id: input.id,
        }))
    }
}
