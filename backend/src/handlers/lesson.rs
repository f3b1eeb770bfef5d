// src/handlers/lesson.rs

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};

use crate::{error::AppError, store::ContentStore};

/// Lists all lessons in navigation order.
pub async fn list_lessons(State(catalog): State<Arc<ContentStore>>) -> impl IntoResponse {
    Json(catalog.get_lessons())
}

/// Retrieves a single lesson by slug.
pub async fn get_lesson(
    State(catalog): State<Arc<ContentStore>>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let lesson = catalog
        .get_lesson_by_slug(&slug)
        .cloned()
        .ok_or(AppError::NotFound("Lección no encontrada".to_string()))?;

    Ok(Json(lesson))
}
