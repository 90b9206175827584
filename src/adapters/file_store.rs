use crate::ports::KeyValueStore;
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

/// Key-value store persisted as a single JSON object on disk.
///
/// A missing file reads as an empty store. Writes go to a fresh sibling
/// temporary file that is then renamed over the store file, so readers never
/// see half a file. Clones share one write lock; separately created handles
/// on the same path do not.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
    write_lock: Arc<Mutex<()>>,
}

#[derive(Error, Debug)]
pub enum FileStoreError {
    #[error("store file {} could not be accessed: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("store file {} is corrupted: {source}", .path.display())]
    Corrupted {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to serialize store entries: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> FileStoreError {
        FileStoreError::Io {
            path: self.path.clone(),
            source,
        }
    }

    fn temp_path(&self) -> PathBuf {
        let file_name = self
            .path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        let temp_name = format!(".{}.{}.tmp", file_name, uuid::Uuid::new_v4().simple());

        self.path.with_file_name(temp_name)
    }

    async fn load(&self) -> Result<BTreeMap<String, String>, FileStoreError> {
        let content = match tokio::fs::read(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => return Err(self.io_error(e)),
        };

        if content.iter().all(u8::is_ascii_whitespace) {
            return Ok(BTreeMap::new());
        }

        serde_json::from_slice(&content).map_err(|source| FileStoreError::Corrupted {
            path: self.path.clone(),
            source,
        })
    }

    async fn save(&self, entries: &BTreeMap<String, String>) -> Result<(), FileStoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| self.io_error(e))?;
        }

        let content = serde_json::to_vec_pretty(entries)?;
        let temp = self.temp_path();

        if let Err(e) = replace_with(&temp, &self.path, &content).await {
            let _ = tokio::fs::remove_file(&temp).await;
            return Err(self.io_error(e));
        }

        Ok(())
    }
}

async fn replace_with(temp: &Path, target: &Path, content: &[u8]) -> std::io::Result<()> {
    let mut file = tokio::fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(temp)
        .await?;
    file.write_all(content).await?;
    file.sync_all().await?;
    drop(file);

    tokio::fs::rename(temp, target).await
}

#[async_trait]
impl KeyValueStore for FileStore {
    type Error = FileStoreError;

    async fn get(&self, key: &str) -> Result<Option<String>, Self::Error> {
        let mut entries = self.load().await?;
        Ok(entries.remove(key))
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), Self::Error> {
        let _guard = self.write_lock.lock().await;

        let mut entries = self.load().await?;
        entries.insert(key.into(), value.into());
        self.save(&entries).await?;

        log::trace!("wrote `{}` to {}", key, self.path.display());
        Ok(())
    }
}
