// src/models/verification.rs

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::config::{MAX_CODE_LENGTH, MAX_INPUT_LENGTH};

/// Verdict returned by the verification engine.
///
/// `error` is only set when the exercise could not be evaluated at all;
/// an ordinary wrong answer is `success: false` with `error` absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationResult {
    pub success: bool,
    pub output: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl VerificationResult {
    /// Result for a submission that could not be evaluated.
    pub fn errored(message: impl Into<String>) -> Self {
        Self {
            success: false,
            output: String::new(),
            expected: None,
            error: Some(message.into()),
        }
    }
}

/// Body of `POST /api/exercises/{id}/verify`.
#[derive(Debug, Deserialize, Validate)]
pub struct VerifyRequest {
    #[validate(length(max = MAX_CODE_LENGTH))]
    pub code: String,
    #[serde(default)]
    #[validate(length(max = MAX_INPUT_LENGTH))]
    pub input: Option<String>,
}

/// A learner submission that names its exercise in the body
/// (`POST /api/verify-exercise`).
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionRequest {
    #[validate(range(min = 1))]
    pub exercise_id: i64,
    #[validate(length(max = MAX_CODE_LENGTH))]
    pub code: String,
    #[serde(default)]
    #[validate(length(max = MAX_INPUT_LENGTH))]
    pub input: Option<String>,
}

/// Body of `POST /api/syntax-check`.
#[derive(Debug, Deserialize, Validate)]
pub struct SyntaxCheckRequest {
    #[validate(length(max = MAX_CODE_LENGTH))]
    pub code: String,
}

/// Findings of the line-oriented syntax checker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SyntaxReport {
    pub valid: bool,
    pub errors: Vec<String>,
}
