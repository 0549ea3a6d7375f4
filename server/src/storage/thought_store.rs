//! File-backed thought store
//!
//! The whole collection lives in one pretty-printed JSON document that is
//! re-read on every request and replaced in full on every append.
//! Appends are serialized through an in-process lock so concurrent
//! submissions cannot overwrite each other with stale snapshots.

use crate::config::MAX_ITEMS;
use crate::error::{AppError, Result};
use crate::models::{StoredItem, Thought, ThoughtsFile};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

/// JSON file store for thoughts
#[derive(Clone)]
pub struct ThoughtStore {
    path: PathBuf,
    write_lock: Arc<Mutex<()>>,
}

impl ThoughtStore {
    /// Create a store backed by the given file (not touched until first use)
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Read the backing file.
    ///
    /// Returns `Ok(None)` when the file does not exist yet, and an error when
    /// it exists but cannot be read or is not a `{"items": [...]}` document.
    pub async fn try_load(&self) -> Result<Option<ThoughtsFile>> {
        let content = match fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let file: ThoughtsFile = serde_json::from_str(&content)?;
        Ok(Some(file))
    }

    /// Read the collection, treating a missing or broken file as empty
    pub async fn load(&self) -> ThoughtsFile {
        match self.try_load().await {
            Ok(Some(file)) => file,
            Ok(None) => {
                tracing::debug!("Store file {:?} not found, starting empty", self.path);
                ThoughtsFile::default()
            }
            Err(e) => {
                tracing::warn!("Store file {:?} unusable, treating as empty: {}", self.path, e);
                ThoughtsFile::default()
            }
        }
    }

    /// Append a thought, keeping only the most recent [`MAX_ITEMS`]
    pub async fn append(&self, thought: Thought) -> Result<Thought> {
        let _guard = self.write_lock.lock().await;

        let mut file = self.load().await;
        file.items.push(StoredItem::from(thought.clone()));

        if file.items.len() > MAX_ITEMS {
            let excess = file.items.len() - MAX_ITEMS;
            file.items.drain(..excess);
            tracing::debug!("Dropped {} oldest thought(s)", excess);
        }

        self.save(&file).await?;

        tracing::debug!("Store now holds {} thought(s)", file.items.len());

        Ok(thought)
    }

    /// Replace the backing file with `file`
    async fn save(&self, file: &ThoughtsFile) -> Result<()> {
        let content = serde_json::to_string_pretty(file)?;

        self.write_atomic(content.as_bytes())
            .await
            .map_err(|e| AppError::Storage(format!("Failed to write {:?}: {}", self.path, e)))
    }

    async fn write_atomic(&self, data: &[u8]) -> std::io::Result<()> {
        // Create parent directories
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await?;
            }
        }

        // Write to temp file first, then rename over the target
        let temp_path = self.temp_path();
        let result = async {
            let mut temp = fs::File::create(&temp_path).await?;
            temp.write_all(data).await?;
            temp.sync_all().await?;
            fs::rename(&temp_path, &self.path).await
        }
        .await;

        if result.is_err() {
            let _ = fs::remove_file(&temp_path).await;
        }

        result
    }

    /// Sibling of the backing file with `.tmp` appended to its full name
    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }
}
