// src/routes.rs

use axum::{
    Router,
    http::{Method, header},
    routing::{get, post},
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

use crate::{
    handlers::{exercise, health, lesson, progress},
    state::AppState,
};

/// Assembles the main application router.
///
/// * Merges the lesson, exercise and progress sub-routers under `/api`.
/// * Applies global middleware (Trace, CORS).
/// * Serves the frontend bundle from `STATIC_DIR` when configured.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    // `{lesson}` is a slug on its own and a numeric id before `/exercises`.
    let lesson_routes = Router::new()
        .route("/", get(lesson::list_lessons))
        .route("/{lesson}", get(lesson::get_lesson))
        .route("/{lesson}/exercises", get(exercise::list_exercises));

    let exercise_routes = Router::new()
        .route("/{id}", get(exercise::get_exercise))
        .route("/{id}/verify", post(exercise::verify_exercise));

    let progress_routes = Router::new().route(
        "/progress",
        get(progress::get_progress).post(progress::update_progress),
    );

    let static_dir = state.config.static_dir.clone();

    let router = Router::new()
        .route("/api/health", get(health::health))
        .nest("/api/lessons", lesson_routes)
        .nest("/api/exercises", exercise_routes)
        .nest("/api/user", progress_routes)
        .route("/api/verify-exercise", post(exercise::verify_submission))
        .route("/api/syntax-check", post(exercise::syntax_check))
        // Global Middleware (applied from outside in)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state);

    match static_dir {
        Some(dir) => {
            let index = format!("{}/index.html", dir);
            router.fallback_service(
                ServeDir::new(dir)
                    .append_index_html_on_directories(true)
                    .not_found_service(ServeFile::new(index)),
            )
        }
        None => router,
    }
}
