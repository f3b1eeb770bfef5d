// src/models/lesson.rs

use serde::{Deserialize, Serialize};
use validator::Validate;

/// A unit of instructional content, addressed by its unique slug.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lesson {
    pub id: i64,

    pub title: String,

    /// URL-safe identifier (e.g., "condicionales-if-else").
    pub slug: String,

    pub description: String,

    /// Long-form markdown-like text with embedded code blocks.
    pub content: String,

    /// Display and navigation position.
    pub order: i32,

    /// Difficulty label (e.g., "Principiante").
    pub level: String,

    pub category: String,
}

/// DTO for creating a lesson, also the record shape of catalog seed files.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateLessonRequest {
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    #[validate(length(min = 1, max = 100), custom(function = validate_slug))]
    pub slug: String,
    #[validate(length(min = 1, max = 1000))]
    pub description: String,
    #[validate(length(min = 1, max = 100_000))]
    pub content: String,

    /// Defaults to the load position when omitted.
    #[serde(default)]
    pub order: Option<i32>,

    #[validate(length(min = 1, max = 50))]
    pub level: String,
    #[validate(length(min = 1, max = 50))]
    pub category: String,
}

/// Slugs are lowercase ascii words joined by hyphens.
fn validate_slug(slug: &str) -> Result<(), validator::ValidationError> {
    let well_formed = slug
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');
    if !well_formed || slug.starts_with('-') || slug.ends_with('-') {
        return Err(validator::ValidationError::new("invalid_slug"));
    }
    Ok(())
}
