//! Classification progress summary handler.

use axum::{extract::State, Json};
use tracing::error;

use crate::{ApiError, AppState};
use tasklabel_core::ClassificationSummary;
use tasklabel_store::{summarize, SummaryError};

/// Totals of classified and unclassified tasks with per-label counts.
///
/// # Returns
/// - 200 OK with the summary
/// - 500 `{"error"}` naming whichever input could not be read
pub async fn classification_summary(
    State(state): State<AppState>,
) -> Result<Json<ClassificationSummary>, ApiError> {
    let summary = summarize(&*state.stores.corpus, &*state.stores.classifications)
        .await
        .map_err(|e| {
            error!(subsystem = "api", op = "summarize", error = %e, "Error computing classification summary");
            match e {
                SummaryError::Corpus(_) => {
                    ApiError::Internal("Unable to read training directory".to_string())
                }
                SummaryError::Classifications(_) => {
                    ApiError::Internal("Unable to read classifications file".to_string())
                }
            }
        })?;
    Ok(Json(summary))
}
