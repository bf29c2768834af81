//! File-backed settings store.

use std::path::PathBuf;

use async_trait::async_trait;
use tasklabel_core::{Error, Result, Settings, SettingsRepository};
use tokio::sync::Mutex;
use tracing::{info, warn};

use crate::json_file::JsonFile;

/// Settings repository backed by a JSON file.
///
/// The file must already exist; it is never created here. Category additions
/// run under a per-store lock so concurrent requests in this process cannot
/// drop each other's appends.
pub struct JsonSettingsRepository {
    file: JsonFile,
    write_lock: Mutex<()>,
}

impl JsonSettingsRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            file: JsonFile::new(path),
            write_lock: Mutex::new(()),
        }
    }

    /// Read the full settings document.
    pub async fn load(&self) -> Result<Settings> {
        self.file.read().await
    }
}

#[async_trait]
impl SettingsRepository for JsonSettingsRepository {
    async fn dropdown_options(&self) -> Result<Vec<String>> {
        Ok(self.load().await?.task_classes)
    }

    async fn add_category(&self, name: &str) -> Result<()> {
        let _guard = self.write_lock.lock().await;

        let mut settings = self.load().await?;
        if !settings.push_category(name) {
            warn!(
                subsystem = "store",
                op = "add_category",
                category = %name,
                "Category already exists"
            );
            return Err(Error::Conflict(format!("Category already exists: {}", name)));
        }

        self.file.write(&settings).await?;
        info!(
            subsystem = "store",
            op = "add_category",
            category = %name,
            record_count = settings.task_classes.len(),
            "Category added"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::Arc;

    fn write_settings(dir: &std::path::Path, value: serde_json::Value) -> PathBuf {
        let path = dir.join("settings.json");
        std::fs::write(&path, serde_json::to_vec(&value).unwrap()).unwrap();
        path
    }

    #[tokio::test]
    async fn test_dropdown_options_returns_categories_in_order() {
        let temp = tempfile::tempdir().unwrap();
        let path = write_settings(temp.path(), json!({ "taskClasses": ["b", "a", "c"] }));
        let repo = JsonSettingsRepository::new(path);

        assert_eq!(repo.dropdown_options().await.unwrap(), vec!["b", "a", "c"]);
    }

    #[tokio::test]
    async fn test_dropdown_options_missing_file_fails() {
        let temp = tempfile::tempdir().unwrap();
        let repo = JsonSettingsRepository::new(temp.path().join("settings.json"));

        assert!(matches!(repo.dropdown_options().await, Err(Error::Io(_))));
    }

    #[tokio::test]
    async fn test_dropdown_options_malformed_file_fails() {
        let temp = tempfile::tempdir().unwrap();
        let path = write_settings(temp.path(), json!({ "taskClasses": "not-a-list" }));
        let repo = JsonSettingsRepository::new(path);

        assert!(matches!(
            repo.dropdown_options().await,
            Err(Error::Serialization(_))
        ));
    }

    #[tokio::test]
    async fn test_add_category_appends_and_persists() {
        let temp = tempfile::tempdir().unwrap();
        let path = write_settings(temp.path(), json!({ "taskClasses": ["a"], "owner": "me" }));
        let repo = JsonSettingsRepository::new(&path);

        repo.add_category("b").await.unwrap();

        let on_disk: serde_json::Value =
            serde_json::from_slice(&std::fs::read(&path).unwrap()).unwrap();
        assert_eq!(on_disk, json!({ "taskClasses": ["a", "b"], "owner": "me" }));
    }

    #[tokio::test]
    async fn test_add_duplicate_category_conflicts_and_leaves_file_untouched() {
        let temp = tempfile::tempdir().unwrap();
        let path = write_settings(temp.path(), json!({ "taskClasses": ["a"] }));
        let before = std::fs::read(&path).unwrap();
        let repo = JsonSettingsRepository::new(&path);

        let err = repo.add_category("a").await.unwrap_err();
        assert!(err.is_conflict());
        assert_eq!(std::fs::read(&path).unwrap(), before);
    }

    #[tokio::test]
    async fn test_concurrent_adds_are_not_lost() {
        let temp = tempfile::tempdir().unwrap();
        let path = write_settings(temp.path(), json!({ "taskClasses": [] }));
        let repo = Arc::new(JsonSettingsRepository::new(path));

        let mut handles = Vec::new();
        for i in 0..16 {
            let repo = Arc::clone(&repo);
            handles.push(tokio::spawn(async move {
                repo.add_category(&format!("cat-{}", i)).await
            }));
        }
        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        assert_eq!(repo.dropdown_options().await.unwrap().len(), 16);
    }
}
