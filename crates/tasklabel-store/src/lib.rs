//! # tasklabel-store
//!
//! Flat-file persistence for tasklabel.
//!
//! This crate provides:
//! - Atomic JSON document reads and writes ([`JsonFile`])
//! - The settings and classification repositories backed by JSON files
//! - Training corpus enumeration
//! - In-memory repositories with the same semantics
//! - The classification summary
//!
//! ## Example
//!
//! ```rust,ignore
//! use tasklabel_store::{StorePaths, Stores};
//!
//! let stores = Stores::open(&StorePaths::default());
//! stores.classifications.save(record).await?;
//! let summary = tasklabel_store::summarize(&*stores.corpus, &*stores.classifications).await?;
//! ```

pub mod classifications;
pub mod corpus;
pub mod json_file;
pub mod memory;
pub mod settings;
pub mod summary;

use std::path::PathBuf;
use std::sync::Arc;

// Re-export core types
pub use tasklabel_core::*;

pub use classifications::JsonClassificationRepository;
pub use corpus::DirectoryCorpus;
pub use json_file::JsonFile;
pub use memory::{FixedCorpus, MemoryClassificationRepository, MemorySettingsRepository};
pub use settings::JsonSettingsRepository;
pub use summary::{summarize, SummaryError};

/// Locations of the on-disk resources.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorePaths {
    pub settings_file: PathBuf,
    pub classifications_file: PathBuf,
    pub training_dir: PathBuf,
}

impl Default for StorePaths {
    fn default() -> Self {
        Self {
            settings_file: PathBuf::from(defaults::SETTINGS_FILE),
            classifications_file: PathBuf::from(defaults::CLASSIFICATIONS_FILE),
            training_dir: PathBuf::from(defaults::TRAINING_DIR),
        }
    }
}

/// The three collaborators every handler works against.
#[derive(Clone)]
pub struct Stores {
    pub settings: Arc<dyn SettingsRepository>,
    pub classifications: Arc<dyn ClassificationRepository>,
    pub corpus: Arc<dyn TaskCorpus>,
}

impl Stores {
    /// File-backed stores at `paths`. Nothing is touched on disk until the
    /// first request.
    pub fn open(paths: &StorePaths) -> Self {
        Self {
            settings: Arc::new(JsonSettingsRepository::new(&paths.settings_file)),
            classifications: Arc::new(JsonClassificationRepository::new(
                &paths.classifications_file,
            )),
            corpus: Arc::new(DirectoryCorpus::new(&paths.training_dir)),
        }
    }

    /// In-memory stores seeded with `settings` and a corpus of `task_count`
    /// tasks.
    pub fn in_memory(settings: Settings, task_count: usize) -> Self {
        Self {
            settings: Arc::new(MemorySettingsRepository::new(settings)),
            classifications: Arc::new(MemoryClassificationRepository::with_records(Vec::new())),
            corpus: Arc::new(FixedCorpus(task_count)),
        }
    }
}
