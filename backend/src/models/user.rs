// src/models/user.rs

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Progress map keyed by `"<lessonId>-<exerciseId>"`.
pub type ProgressMap = BTreeMap<String, ProgressEntry>;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,

    /// Unique username.
    pub username: String,

    /// Argon2 password hash.
    /// Skipped during serialization to prevent leaking sensitive data.
    #[serde(skip)]
    pub password: String,

    pub progress: ProgressMap,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressEntry {
    pub completed: bool,
    pub score: i32,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// DTO for recording progress on one exercise.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProgressRequest {
    #[validate(range(min = 1))]
    pub lesson_id: i64,
    #[validate(range(min = 1))]
    pub exercise_id: i64,
    pub completed: bool,
    #[validate(range(min = 0, max = 100))]
    pub score: i32,
}

#[derive(Debug, Serialize)]
pub struct ProgressResponse {
    pub progress: ProgressMap,
}

#[derive(Debug, Serialize)]
pub struct UpdateProgressResponse {
    pub success: bool,
    pub progress: ProgressMap,
}

/// Builds the progress key for one exercise.
pub fn progress_key(lesson_id: i64, exercise_id: i64) -> String {
    format!("{}-{}", lesson_id, exercise_id)
}
