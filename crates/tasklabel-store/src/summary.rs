//! Classification progress summary.

use tasklabel_core::{ClassificationRepository, ClassificationSummary, Error, TaskCorpus};
use thiserror::Error as ThisError;
use tracing::debug;

/// Which input of the summary could not be read.
#[derive(ThisError, Debug)]
pub enum SummaryError {
    #[error("Unable to read training directory: {0}")]
    Corpus(#[source] Error),

    #[error("Unable to read classifications file: {0}")]
    Classifications(#[source] Error),
}

/// Count corpus tasks, then tally the classification store in one pass.
///
/// The classification store is read as-is; a missing store is an error here.
pub async fn summarize(
    corpus: &dyn TaskCorpus,
    classifications: &dyn ClassificationRepository,
) -> Result<ClassificationSummary, SummaryError> {
    let total = corpus.count_tasks().await.map_err(SummaryError::Corpus)?;
    let records = classifications
        .list()
        .await
        .map_err(SummaryError::Classifications)?;

    let summary = ClassificationSummary::from_records(total, &records);
    debug!(
        subsystem = "store",
        op = "summarize",
        task_count = summary.total_tasks,
        record_count = summary.classified_tasks,
        "Summary computed"
    );
    Ok(summary)
}
