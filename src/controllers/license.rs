use crate::config::Config;
use crate::controllers::get_or_create_identifier;
use crate::models::{LicenseRegion, LicenseRequest, DEFAULT_LICENSE_DURATION};
use crate::ports::KeyValueStore;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LicenseError {
    #[error("no license url configured for region `{0}`")]
    MissingLicenseUrl(LicenseRegion),
    #[error("api key or api secret was not set at build time")]
    MissingCredentials,
    #[error("could not read install identifier: {0}")]
    Store(#[source] Box<dyn std::error::Error + Send + Sync + 'static>),
}

/// Collects everything the licensing SDK needs for `region`.
///
/// Nothing is sent. The install identifier is created in `store` if this is
/// its first use.
pub async fn prepare_license_request<S>(
    config: &Config,
    region: LicenseRegion,
    store: &S,
) -> Result<LicenseRequest, LicenseError>
where
    S: KeyValueStore + ?Sized,
{
    let url = config
        .license_url(region)
        .ok_or(LicenseError::MissingLicenseUrl(region))?;

    if !config.credentials.is_complete() {
        return Err(LicenseError::MissingCredentials);
    }

    let uuid = get_or_create_identifier(store)
        .await
        .map_err(|e| LicenseError::Store(Box::new(e)))?;

    log::debug!("prepared {} license request against {}", region, url);

    Ok(LicenseRequest {
        url: url.to_string(),
        uuid,
        api_key: config.credentials.api_key().to_string(),
        api_secret: Some(config.credentials.api_secret().to_string()),
        duration: DEFAULT_LICENSE_DURATION.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::MemoryStore;
    use crate::config::{Credentials, DEFAULT_CN_LICENSE_URL};
    use crate::controllers::IDENTIFIER_KEY;

    fn config() -> Config {
        Config {
            credentials: Credentials::new("key-123", "secret-456"),
            ..Config::default()
        }
    }

    #[tokio::test]
    async fn request_carries_identifier_and_credentials() {
        let store = MemoryStore::with_entry(IDENTIFIER_KEY, "abc123==");

        let request = prepare_license_request(&config(), LicenseRegion::Cn, &store)
            .await
            .unwrap();

        assert_eq!(
            request,
            LicenseRequest {
                url: DEFAULT_CN_LICENSE_URL.to_string(),
                uuid: "abc123==".to_string(),
                api_key: "key-123".to_string(),
                api_secret: Some("secret-456".to_string()),
                duration: "1".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn first_request_creates_identifier() {
        let store = MemoryStore::new();

        let request = prepare_license_request(&config(), LicenseRegion::Us, &store)
            .await
            .unwrap();

        assert_eq!(
            store.get(IDENTIFIER_KEY).await.unwrap(),
            Some(request.uuid)
        );
    }

    #[tokio::test]
    async fn test_region_has_no_url_by_default() {
        let store = MemoryStore::new();

        let result = prepare_license_request(&config(), LicenseRegion::Test, &store).await;

        assert!(matches!(
            result,
            Err(LicenseError::MissingLicenseUrl(LicenseRegion::Test))
        ));
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn missing_credentials_are_rejected() {
        let config = Config {
            credentials: Credentials::new("", ""),
            ..Config::default()
        };

        let result = prepare_license_request(&config, LicenseRegion::Cn, &MemoryStore::new()).await;

        assert!(matches!(result, Err(LicenseError::MissingCredentials)));
    }

    #[tokio::test]
    async fn store_failure_is_wrapped() {
        let result =
            prepare_license_request(&config(), LicenseRegion::Cn, &MemoryStore::failing()).await;

        match result {
            Err(LicenseError::Store(source)) => {
                assert!(source.to_string().contains(IDENTIFIER_KEY));
            }
            other => panic!("expected store error, got {:?}", other),
        }
    }

    #[test]
    fn redacted_request_omits_secret_in_json() {
        let request = LicenseRequest {
            url: "u".into(),
            uuid: "id".into(),
            api_key: "k".into(),
            api_secret: Some("s".into()),
            duration: "1".into(),
        }
        .redacted();

        let json = serde_json::to_value(&request).unwrap();
        assert!(json.get("api_secret").is_none());
        assert_eq!(json["uuid"], "id");
    }
}
