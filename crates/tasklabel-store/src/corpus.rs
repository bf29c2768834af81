//! Training corpus directory.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tasklabel_core::{defaults, Result, TaskCorpus};
use tokio::fs;
use tracing::{debug, warn};

/// A directory of per-task data files.
///
/// Only entries whose extension is the task file extension are counted;
/// file contents are never read.
#[derive(Debug, Clone)]
pub struct DirectoryCorpus {
    dir: PathBuf,
    extension: String,
}

impl DirectoryCorpus {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self::with_extension(dir, defaults::TASK_FILE_EXTENSION)
    }

    pub fn with_extension(dir: impl Into<PathBuf>, extension: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            extension: extension.into(),
        }
    }

    /// Task file names in directory order.
    pub async fn task_names(&self) -> Result<Vec<String>> {
        let mut entries = fs::read_dir(&self.dir).await.map_err(|e| {
            warn!(path = %self.dir.display(), error = %e, "corpus: read_dir failed");
            e
        })?;

        let mut names = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if has_extension(&path, &self.extension) {
                if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                    names.push(name.to_string());
                }
            }
        }
        Ok(names)
    }
}

fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some(extension)
}

#[async_trait]
impl TaskCorpus for DirectoryCorpus {
    async fn count_tasks(&self) -> Result<usize> {
        let count = self.task_names().await?.len();
        debug!(
            subsystem = "store",
            path = %self.dir.display(),
            task_count = count,
            "Counted corpus tasks"
        );
        Ok(count)
    }
}
