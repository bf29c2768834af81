//! Category HTTP handlers.
//!
//! Categories are the labels offered in the classification dropdown. They
//! live in the settings store under `taskClasses`.

use axum::{extract::State, Json};
use tracing::{error, info};

use crate::{ApiError, AppState};
use tasklabel_core::{AddCategoryRequest, SettingsRepository};

/// List the category labels.
///
/// # Returns
/// - 200 OK with the `taskClasses` array
/// - 500 `{"message"}` if the settings store is missing or malformed
pub async fn dropdown_options(
    State(state): State<AppState>,
) -> Result<Json<Vec<String>>, ApiError> {
    let options = state.stores.settings.dropdown_options().await.map_err(|e| {
        error!(subsystem = "api", op = "dropdown_options", error = %e, "Error reading settings file");
        ApiError::Message("Error fetching dropdown options".to_string())
    })?;
    Ok(Json(options))
}

/// Add a category label.
///
/// # Request Body
/// `{"category": "<label>"}`. The label is stored exactly as sent.
///
/// # Returns
/// - 200 OK `Category added`
/// - 400 Bad Request `Category already exists`
/// - 500 `Error adding category` on store failure
pub async fn add_category(
    State(state): State<AppState>,
    Json(req): Json<AddCategoryRequest>,
) -> Result<&'static str, ApiError> {
    info!(subsystem = "api", category = %req.category, "Received request to add category");

    match state.stores.settings.add_category(&req.category).await {
        Ok(()) => Ok("Category added"),
        Err(e) if e.is_conflict() => Err(ApiError::Conflict("Category already exists".to_string())),
        Err(e) => {
            error!(subsystem = "api", op = "add_category", error = %e, "Error adding category");
            Err(ApiError::Plain("Error adding category".to_string()))
        }
    }
}
