//! Core traits for tasklabel abstractions.
//!
//! These traits define the interfaces that concrete stores must satisfy,
//! so HTTP handlers can be given file-backed or in-memory implementations.

use async_trait::async_trait;

use crate::error::Result;
use crate::models::*;

// =============================================================================
// SETTINGS REPOSITORY
// =============================================================================

/// Access to the settings store (category labels).
#[async_trait]
pub trait SettingsRepository: Send + Sync {
    /// Current category list, in stored order.
    async fn dropdown_options(&self) -> Result<Vec<String>>;

    /// Append `name` to the category list.
    ///
    /// Returns [`crate::Error::Conflict`] and leaves the store untouched when
    /// `name` is already present (exact match).
    async fn add_category(&self, name: &str) -> Result<()>;
}

// =============================================================================
// CLASSIFICATION REPOSITORY
// =============================================================================

/// Access to the classification store.
#[async_trait]
pub trait ClassificationRepository: Send + Sync {
    /// Create the store as an empty list if it does not exist yet.
    async fn ensure_exists(&self) -> Result<()>;

    /// Insert `record`, or replace the record with the same task in place.
    async fn save(&self, record: ClassificationRecord) -> Result<()>;

    /// Look up the classification for `task`. A miss is `Ok(NotFound)`.
    async fn check(&self, task: &str) -> Result<ClassificationLookup>;

    /// All records in stored order. Does not create a missing store.
    async fn list(&self) -> Result<Vec<ClassificationRecord>>;
}

// =============================================================================
// TASK CORPUS
// =============================================================================

/// The training corpus whose files are the tasks being classified.
#[async_trait]
pub trait TaskCorpus: Send + Sync {
    /// Number of task files in the corpus.
    async fn count_tasks(&self) -> Result<usize>;
}
