use crate::ports::KeyValueStore;
use async_trait::async_trait;
use redis::{aio::Connection, Client, RedisError};
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct RedisStore {
    connection: Arc<Mutex<Connection>>,
}

impl RedisStore {
    pub async fn connect(url: &str) -> Result<Self, RedisError> {
        let client = Client::open(url)?;
        let connection = client.get_async_connection().await?;
        let connection = Arc::new(Mutex::new(connection));

        log::debug!("connected to redis at {}", without_credentials(url));
        Ok(Self { connection })
    }
}

/// `url` with any user info and query string removed, for logging.
fn without_credentials(url: &str) -> String {
    let url = url.split_once('?').map_or(url, |(base, _)| base);

    match url.split_once("://") {
        Some((scheme, rest)) => {
            let authority_end = rest.find('/').unwrap_or(rest.len());
            let (authority, path) = rest.split_at(authority_end);
            let host = authority.rsplit_once('@').map_or(authority, |(_, host)| host);
            format!("{}://{}{}", scheme, host, path)
        }
        None => url.to_string(),
    }
}

#[async_trait]
impl KeyValueStore for RedisStore {
    type Error = RedisError;

    async fn get(&self, key: &str) -> Result<Option<String>, Self::Error> {
        let mut connection = self.connection.lock().await;

        let value: Option<String> = redis::cmd("GET")
            .arg(key)
            .query_async(&mut *connection)
            .await?;

        Ok(value)
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), Self::Error> {
        let mut connection = self.connection.lock().await;

        let _: () = redis::cmd("SET")
            .arg(key)
            .arg(value)
            .query_async(&mut *connection)
            .await?;

        Ok(())
    }
}
