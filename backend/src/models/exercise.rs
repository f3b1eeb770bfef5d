// src/models/exercise.rs

use serde::{Deserialize, Serialize};
use validator::Validate;

/// A recorded (input, expected output) pair.
/// Used to phrase the simulated result; nothing is ever executed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestCase {
    pub input: String,
    pub expected: String,
}

/// A coding challenge attached to a lesson.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub instructions: String,

    /// Template shown to the learner in the editor.
    pub starting_code: String,

    /// Reference solution. Never sent to clients, see `PublicExercise`.
    pub solution_code: String,

    pub hints: Vec<String>,
    pub lesson_id: i64,
    pub test_cases: Vec<TestCase>,
    pub order: i32,
}

/// DTO for sending an exercise to clients (excludes the reference solution).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicExercise {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub instructions: String,
    pub starting_code: String,
    pub hints: Vec<String>,
    pub lesson_id: i64,
    pub test_cases: Vec<TestCase>,
    pub order: i32,
}

impl From<&Exercise> for PublicExercise {
    fn from(e: &Exercise) -> Self {
        Self {
            id: e.id,
            title: e.title.clone(),
            description: e.description.clone(),
            instructions: e.instructions.clone(),
            starting_code: e.starting_code.clone(),
            hints: e.hints.clone(),
            lesson_id: e.lesson_id,
            test_cases: e.test_cases.clone(),
            order: e.order,
        }
    }
}

/// DTO for creating an exercise, also the record shape of catalog seed files.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateExerciseRequest {
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    #[validate(length(min = 1, max = 1000))]
    pub description: String,
    #[validate(length(min = 1, max = 20_000))]
    pub instructions: String,
    #[validate(length(max = 50_000))]
    pub starting_code: String,
    #[validate(length(min = 1, max = 50_000))]
    pub solution_code: String,
    #[serde(default)]
    #[validate(custom(function = validate_hints))]
    pub hints: Vec<String>,
    #[validate(range(min = 1))]
    pub lesson_id: i64,
    #[serde(default)]
    pub test_cases: Vec<TestCase>,

    /// Defaults to the position within its lesson when omitted.
    #[serde(default)]
    pub order: Option<i32>,
}

fn validate_hints(hints: &[String]) -> Result<(), validator::ValidationError> {
    for hint in hints {
        if hint.trim().is_empty() {
            return Err(validator::ValidationError::new("hint_cannot_be_empty"));
        }
        if hint.len() > 500 {
            return Err(validator::ValidationError::new("hint_too_long"));
        }
    }
    Ok(())
}
