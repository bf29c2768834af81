//! A single JSON document on local disk.
//!
//! Every write replaces the whole document: the new contents go to a sibling
//! `.tmp` file which is synced and then renamed over the target, so readers
//! never see a partially written file.

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use tasklabel_core::Result;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::{debug, warn};

/// Handle to a JSON file. Cheap to clone; holds no open descriptor.
#[derive(Debug, Clone)]
pub struct JsonFile {
    path: PathBuf,
}

impl JsonFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the file currently exists.
    pub async fn exists(&self) -> Result<bool> {
        Ok(fs::try_exists(&self.path).await?)
    }

    /// Read and deserialize the whole document.
    pub async fn read<T: DeserializeOwned>(&self) -> Result<T> {
        let bytes = fs::read(&self.path).await.map_err(|e| {
            warn!(path = %self.path.display(), error = %e, "json_file: read failed");
            e
        })?;
        let value = serde_json::from_slice(&bytes).map_err(|e| {
            warn!(path = %self.path.display(), error = %e, "json_file: parse failed");
            e
        })?;
        Ok(value)
    }

    /// Serialize `value` with two-space indentation and atomically replace
    /// the document.
    pub async fn write<T: Serialize + ?Sized>(&self, value: &T) -> Result<()> {
        let data = serde_json::to_vec_pretty(value)?;
        debug!(path = %self.path.display(), size = data.len(), "json_file: write");

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await.map_err(|e| {
                    warn!(parent = %parent.display(), error = %e, "json_file: create_dir_all failed");
                    e
                })?;
            }
        }

        let temp_path = self.temp_path();
        let mut file = fs::File::create(&temp_path).await.map_err(|e| {
            warn!(temp_path = %temp_path.display(), error = %e, "json_file: File::create failed");
            e
        })?;
        file.write_all(&data).await.map_err(|e| {
            warn!(error = %e, "json_file: write_all failed");
            e
        })?;
        file.sync_all().await?;
        drop(file);

        fs::rename(&temp_path, &self.path).await.map_err(|e| {
            warn!(from = %temp_path.display(), to = %self.path.display(), error = %e, "json_file: rename failed");
            e
        })?;

        Ok(())
    }

    /// Write `default` if the file is absent. Returns whether it was created.
    pub async fn create_if_missing<T: Serialize + ?Sized>(&self, default: &T) -> Result<bool> {
        if self.exists().await? {
            return Ok(false);
        }
        self.write(default).await?;
        Ok(true)
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}
