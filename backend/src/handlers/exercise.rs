// src/handlers/exercise.rs

use std::sync::Arc;

use axum::{Json, extract::State, response::IntoResponse};

use crate::{
    error::AppError,
    extract::{AppPath, ValidatedJson},
    models::{
        exercise::PublicExercise,
        verification::{SubmissionRequest, SyntaxCheckRequest, VerifyRequest},
    },
    store::ContentStore,
    verifier::{self, syntax::check_syntax},
};

/// Lists the exercises of a lesson, without reference solutions.
pub async fn list_exercises(
    State(catalog): State<Arc<ContentStore>>,
    AppPath(lesson_id): AppPath<i64>,
) -> Result<impl IntoResponse, AppError> {
    let exercises: Vec<PublicExercise> = catalog
        .get_exercises(lesson_id)
        .iter()
        .map(PublicExercise::from)
        .collect();

    Ok(Json(exercises))
}

/// Retrieves a single exercise by ID, without its reference solution.
pub async fn get_exercise(
    State(catalog): State<Arc<ContentStore>>,
    AppPath(id): AppPath<i64>,
) -> Result<impl IntoResponse, AppError> {
    let exercise = catalog
        .get_exercise(id)
        .map(PublicExercise::from)
        .ok_or(AppError::NotFound("Ejercicio no encontrado".to_string()))?;

    Ok(Json(exercise))
}

/// Verifies a submission for the exercise in the path.
///
/// Unknown exercises are not a 404 here: the verdict itself carries the
/// error, so the editor can render it like any other result.
pub async fn verify_exercise(
    State(catalog): State<Arc<ContentStore>>,
    AppPath(id): AppPath<i64>,
    ValidatedJson(payload): ValidatedJson<VerifyRequest>,
) -> Result<impl IntoResponse, AppError> {
    let input = payload.input.unwrap_or_default();
    let result = verifier::verify(&catalog, id, &payload.code, &input);
    tracing::info!(exercise_id = id, success = result.success, "Submission verified");

    Ok(Json(result))
}

/// Verifies a submission that names its exercise in the body.
pub async fn verify_submission(
    State(catalog): State<Arc<ContentStore>>,
    ValidatedJson(payload): ValidatedJson<SubmissionRequest>,
) -> Result<impl IntoResponse, AppError> {
    let input = payload.input.unwrap_or_default();
    let result = verifier::verify(&catalog, payload.exercise_id, &payload.code, &input);
    tracing::info!(
        exercise_id = payload.exercise_id,
        success = result.success,
        "Submission verified"
    );

    Ok(Json(result))
}

/// Runs the line-oriented syntax checks on a snippet.
pub async fn syntax_check(
    ValidatedJson(payload): ValidatedJson<SyntaxCheckRequest>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(check_syntax(&payload.code)))
}
