// src/handlers/progress.rs

use std::sync::Arc;

use axum::{Json, extract::State, response::IntoResponse};

use crate::{
    config::Config,
    error::AppError,
    extract::ValidatedJson,
    models::user::{ProgressResponse, UpdateProgressRequest, UpdateProgressResponse},
    store::{ContentStore, UserStore},
};

/// Returns the default learner's progress map.
///
/// There are no sessions; every request acts as the learner named in config.
pub async fn get_progress(
    State(users): State<Arc<UserStore>>,
    State(config): State<Config>,
) -> Result<impl IntoResponse, AppError> {
    let learner = users
        .ensure_user(&config.learner_username, &config.learner_password)
        .await?;

    Ok(Json(ProgressResponse {
        progress: learner.progress,
    }))
}

/// Records the outcome of one exercise for the default learner.
pub async fn update_progress(
    State(catalog): State<Arc<ContentStore>>,
    State(users): State<Arc<UserStore>>,
    State(config): State<Config>,
    ValidatedJson(payload): ValidatedJson<UpdateProgressRequest>,
) -> Result<impl IntoResponse, AppError> {
    let exercise = catalog
        .get_exercise(payload.exercise_id)
        .ok_or(AppError::NotFound("Ejercicio no encontrado".to_string()))?;
    if exercise.lesson_id != payload.lesson_id {
        return Err(AppError::BadRequest(format!(
            "Exercise {} does not belong to lesson {}",
            payload.exercise_id, payload.lesson_id
        )));
    }

    let learner = users
        .ensure_user(&config.learner_username, &config.learner_password)
        .await?;

    let progress = users
        .record_progress(
            learner.id,
            payload.lesson_id,
            payload.exercise_id,
            payload.completed,
            payload.score,
        )
        .await?;

    Ok(Json(UpdateProgressResponse {
        success: true,
        progress,
    }))
}
