use async_trait::async_trait;
use std::error::Error;

/// String to string storage that outlives a single call, e.g. local settings.
#[async_trait]
pub trait KeyValueStore {
    type Error: Error + Send + Sync + 'static;
    async fn get(&self, key: &str) -> Result<Option<String>, Self::Error>;
    async fn set(&self, key: &str, value: &str) -> Result<(), Self::Error>;
}
