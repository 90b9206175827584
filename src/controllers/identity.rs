use crate::adapters::UuidGenerator;
use crate::ports::{IDGenerator, KeyValueStore};
use base64::{engine::general_purpose::STANDARD, Engine};

/// Store key the install identifier lives under.
pub const IDENTIFIER_KEY: &str = "key_uuid";

/// Returns the install identifier kept in `store`, creating it on first use.
///
/// A missing or blank entry is replaced by a fresh random UUID, base64
/// encoded. Store failures are returned as-is.
///
/// The read and the write are not atomic: two first calls racing on the same
/// store may both generate, and whichever write lands last is kept.
pub async fn get_or_create_identifier<S>(store: &S) -> Result<String, S::Error>
where
    S: KeyValueStore + ?Sized,
{
    get_or_create_identifier_with::<S, UuidGenerator>(store).await
}

pub async fn get_or_create_identifier_with<S, I>(store: &S) -> Result<String, S::Error>
where
    S: KeyValueStore + ?Sized,
    I: IDGenerator,
{
    let existing = store.get(IDENTIFIER_KEY).await?;

    match existing {
        Some(identifier) if !identifier.trim().is_empty() => {
            log::debug!("reusing stored install identifier");
            return Ok(identifier);
        }
        Some(_) => log::warn!("stored install identifier is blank, replacing it"),
        None => {}
    }

    let identifier = STANDARD.encode(I::generate().await);
    store.set(IDENTIFIER_KEY, &identifier).await?;

    log::info!("generated new install identifier");
    Ok(identifier)
}
