//! File-backed classification store.

use std::path::PathBuf;

use async_trait::async_trait;
use tasklabel_core::{
    lookup_record, upsert_record, ClassificationLookup, ClassificationRecord,
    ClassificationRepository, Result,
};
use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::json_file::JsonFile;

/// Classification repository backed by a JSON array on disk.
///
/// The file is created as `[]` on first save or check. Every save rewrites
/// the whole array under a per-store lock.
pub struct JsonClassificationRepository {
    file: JsonFile,
    write_lock: Mutex<()>,
}

impl JsonClassificationRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            file: JsonFile::new(path),
            write_lock: Mutex::new(()),
        }
    }

    async fn create_if_missing(&self) -> Result<()> {
        if self.file.exists().await? {
            return Ok(());
        }
        let _guard = self.write_lock.lock().await;
        self.create_if_missing_locked().await
    }

    async fn create_if_missing_locked(&self) -> Result<()> {
        let empty: [ClassificationRecord; 0] = [];
        if self.file.create_if_missing(&empty).await? {
            info!(
                subsystem = "store",
                path = %self.file.path().display(),
                "Classifications file created"
            );
        }
        Ok(())
    }
}

#[async_trait]
impl ClassificationRepository for JsonClassificationRepository {
    async fn ensure_exists(&self) -> Result<()> {
        self.create_if_missing().await
    }

    async fn save(&self, record: ClassificationRecord) -> Result<()> {
        let _guard = self.write_lock.lock().await;
        self.create_if_missing_locked().await?;

        let mut records: Vec<ClassificationRecord> = self.file.read().await?;
        let task = record.task().to_string();
        let replaced = upsert_record(&mut records, record);
        self.file.write(&records).await?;

        info!(
            subsystem = "store",
            op = "save_classification",
            task = %task,
            record_count = records.len(),
            "{}",
            if replaced {
                "Classification updated"
            } else {
                "Classification added"
            }
        );
        Ok(())
    }

    async fn check(&self, task: &str) -> Result<ClassificationLookup> {
        self.create_if_missing().await?;

        let records: Vec<ClassificationRecord> = self.file.read().await?;
        let lookup = lookup_record(&records, task);
        debug!(
            subsystem = "store",
            op = "check_classification",
            task = %task,
            found = lookup.is_found(),
            "Classification lookup"
        );
        Ok(lookup)
    }

    async fn list(&self) -> Result<Vec<ClassificationRecord>> {
        self.file.read().await
    }
}
