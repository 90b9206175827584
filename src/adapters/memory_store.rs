use crate::ports::KeyValueStore;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::Mutex;

/// Process-local store. Clones share the same entries.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
    fail: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            entries: Arc::new(Mutex::new(HashMap::new())),
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            entries: Arc::new(Mutex::new(HashMap::new())),
            fail: true,
        }
    }

    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut entries = HashMap::new();
        entries.insert(key.to_string(), value.to_string());

        Self {
            entries: Arc::new(Mutex::new(entries)),
            fail: false,
        }
    }

    pub async fn len(&self) -> usize {
        self.entries.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.lock().await.is_empty()
    }
}

#[derive(Error, Debug)]
pub enum MemoryStoreError {
    #[error("failed to read `{0}` from memory store")]
    GetError(String),
    #[error("failed to write `{0}` to memory store")]
    SetError(String),
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    type Error = MemoryStoreError;

    async fn get(&self, key: &str) -> Result<Option<String>, Self::Error> {
        if self.fail {
            return Err(MemoryStoreError::GetError(key.into()));
        }

        let entries = self.entries.lock().await;
        Ok(entries.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), Self::Error> {
        if self.fail {
            return Err(MemoryStoreError::SetError(key.into()));
        }

        let mut entries = self.entries.lock().await;
        entries.insert(key.into(), value.into());
        Ok(())
    }
}
