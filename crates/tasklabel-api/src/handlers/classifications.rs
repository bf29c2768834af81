//! Classification HTTP handlers.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;
use serde_json::Value as JsonValue;
use tracing::{error, info};

use crate::{ApiError, AppState};
use tasklabel_core::{ClassificationRecord, ClassificationRepository};

/// Response for `GET /check_classification/:task`.
#[derive(Debug, Serialize)]
pub struct CheckClassificationResponse {
    pub message: &'static str,
    /// The stored value verbatim. Always present; `null` when the task has
    /// not been classified or its record has no `classification` key.
    pub classification: JsonValue,
}

/// Save a classification, replacing any earlier one for the same task.
///
/// # Request Body
/// A classification record; `task` is required, `classification` and any
/// other fields are stored verbatim.
///
/// # Returns
/// - 200 OK `Classification saved`
/// - 500 `Error saving classification` on store failure
pub async fn save_classification(
    State(state): State<AppState>,
    Json(record): Json<ClassificationRecord>,
) -> Result<&'static str, ApiError> {
    info!(subsystem = "api", task = %record.task(), "Received request to save classification");

    state
        .stores
        .classifications
        .save(record)
        .await
        .map_err(|e| {
            error!(subsystem = "api", op = "save_classification", error = %e, "Error saving classification");
            ApiError::Plain("Error saving classification".to_string())
        })?;
    Ok("Classification saved")
}

/// Report whether a task has been classified.
///
/// # Path Parameters
/// - `task`: task identifier (training file name)
///
/// # Returns
/// - 200 OK `{"message", "classification"}`, with `classification: null` on a miss
/// - 500 `{"message", "classification": null}` on store failure
pub async fn check_classification(
    State(state): State<AppState>,
    Path(task): Path<String>,
) -> Result<Json<CheckClassificationResponse>, ApiError> {
    let lookup = state
        .stores
        .classifications
        .check(&task)
        .await
        .map_err(|e| {
            error!(subsystem = "api", op = "check_classification", task = %task, error = %e, "Error reading classifications file");
            ApiError::Lookup("Error checking classification".to_string())
        })?;

    let response = if lookup.is_found() {
        CheckClassificationResponse {
            message: "This task has already been classified",
            classification: lookup.classification_value(),
        }
    } else {
        CheckClassificationResponse {
            message: "This task has not been classified",
            classification: JsonValue::Null,
        }
    };
    Ok(Json(response))
}
