//! In-memory repositories.
//!
//! Same semantics as the file-backed stores without touching disk. Used by
//! the HTTP tests and handy for wiring a throwaway server.

use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use tasklabel_core::{
    lookup_record, upsert_record, ClassificationLookup, ClassificationRecord,
    ClassificationRepository, Error, Result, Settings, SettingsRepository, TaskCorpus,
};
use tokio::sync::RwLock;

/// Settings held in memory.
#[derive(Debug, Default)]
pub struct MemorySettingsRepository {
    settings: RwLock<Settings>,
}

impl MemorySettingsRepository {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings: RwLock::new(settings),
        }
    }

    pub async fn snapshot(&self) -> Settings {
        self.settings.read().await.clone()
    }
}

#[async_trait]
impl SettingsRepository for MemorySettingsRepository {
    async fn dropdown_options(&self) -> Result<Vec<String>> {
        Ok(self.settings.read().await.task_classes.clone())
    }

    async fn add_category(&self, name: &str) -> Result<()> {
        let mut settings = self.settings.write().await;
        if settings.push_category(name) {
            Ok(())
        } else {
            Err(Error::Conflict(format!("Category already exists: {}", name)))
        }
    }
}

/// Classification records held in memory.
///
/// `list` fails until the store has been "created" by `ensure_exists`,
/// `save`, `check`, or by constructing it with [`Self::with_records`],
/// mirroring a missing file on disk.
#[derive(Debug, Default)]
pub struct MemoryClassificationRepository {
    records: RwLock<Vec<ClassificationRecord>>,
    created: AtomicBool,
}

impl MemoryClassificationRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: Vec<ClassificationRecord>) -> Self {
        Self {
            records: RwLock::new(records),
            created: AtomicBool::new(true),
        }
    }

    pub async fn snapshot(&self) -> Vec<ClassificationRecord> {
        self.records.read().await.clone()
    }
}

#[async_trait]
impl ClassificationRepository for MemoryClassificationRepository {
    async fn ensure_exists(&self) -> Result<()> {
        self.created.store(true, Ordering::SeqCst);
        Ok(())
    }

    async fn save(&self, record: ClassificationRecord) -> Result<()> {
        self.ensure_exists().await?;
        upsert_record(&mut *self.records.write().await, record);
        Ok(())
    }

    async fn check(&self, task: &str) -> Result<ClassificationLookup> {
        self.ensure_exists().await?;
        Ok(lookup_record(&self.records.read().await, task))
    }

    async fn list(&self) -> Result<Vec<ClassificationRecord>> {
        if !self.created.load(Ordering::SeqCst) {
            return Err(Error::NotFound("classification store".to_string()));
        }
        Ok(self.snapshot().await)
    }
}

/// A corpus with a fixed task count.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedCorpus(pub usize);

#[async_trait]
impl TaskCorpus for FixedCorpus {
    async fn count_tasks(&self) -> Result<usize> {
        Ok(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_settings_conflict() {
        let repo = MemorySettingsRepository::new(Settings::with_categories(["a"]));
        assert!(repo.add_category("a").await.unwrap_err().is_conflict());
        repo.add_category("b").await.unwrap();
        assert_eq!(repo.dropdown_options().await.unwrap(), vec!["a", "b"]);
    }

    #[tokio::test]
    async fn test_memory_classifications_list_requires_creation() {
        let repo = MemoryClassificationRepository::new();
        assert!(repo.list().await.is_err());

        repo.check("t1").await.unwrap();
        assert!(repo.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_memory_classifications_upsert() {
        let repo = MemoryClassificationRepository::new();
        repo.save(ClassificationRecord::new("t1", "A")).await.unwrap();
        repo.save(ClassificationRecord::new("t1", "B")).await.unwrap();

        let records = repo.snapshot().await;
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].classification(), Some("B"));
    }
}
