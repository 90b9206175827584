use crate::models::LicenseRegion;
use std::fmt;
use std::path::PathBuf;

/// API key, baked in at compile time via the FACEPP_API_KEY env var.
pub const DEFAULT_API_KEY: &str = match option_env!("FACEPP_API_KEY") {
    Some(key) => key,
    None => "",
};

/// API secret, baked in at compile time via the FACEPP_API_SECRET env var.
pub const DEFAULT_API_SECRET: &str = match option_env!("FACEPP_API_SECRET") {
    Some(secret) => secret,
    None => "",
};

pub const DEFAULT_CN_LICENSE_URL: &str = "https://api-cn.faceplusplus.com/sdk/v3/auth";
pub const DEFAULT_US_LICENSE_URL: &str = "https://api-us.faceplusplus.com/sdk/v3/auth";
pub const DEFAULT_TEST_LICENSE_URL: &str = "";

pub const DEFAULT_REDIS_URL: &str = "redis://localhost:6379";
pub const DEFAULT_STORE_PATH: &str = "faceflow-settings.json";

#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    api_key: String,
    api_secret: String,
}

impl Credentials {
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: api_secret.into(),
        }
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn api_secret(&self) -> &str {
        &self.api_secret
    }

    pub fn is_complete(&self) -> bool {
        !self.api_key.trim().is_empty() && !self.api_secret.trim().is_empty()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &self.api_key)
            .field("api_secret", &"<redacted>")
            .finish()
    }
}

impl Default for Credentials {
    fn default() -> Self {
        Self::new(DEFAULT_API_KEY, DEFAULT_API_SECRET)
    }
}

/// Read-only settings, assembled once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub credentials: Credentials,
    pub cn_license_url: String,
    pub us_license_url: String,
    pub test_license_url: String,
    pub redis_url: String,
    pub store_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            credentials: Credentials::default(),
            cn_license_url: DEFAULT_CN_LICENSE_URL.to_string(),
            us_license_url: DEFAULT_US_LICENSE_URL.to_string(),
            test_license_url: DEFAULT_TEST_LICENSE_URL.to_string(),
            redis_url: DEFAULT_REDIS_URL.to_string(),
            store_path: PathBuf::from(DEFAULT_STORE_PATH),
        }
    }
}

impl Config {
    /// Defaults, then overrides from the environment.
    pub fn new() -> Self {
        let mut config = Self::default();
        config.load_from_env(|name| std::env::var(name).ok());
        config
    }

    /// Credentials are compile-time only and are never taken from here.
    fn load_from_env(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(url) = var("FACEPP_LICENSE_URL_CN") {
            self.cn_license_url = url;
        }
        if let Some(url) = var("FACEPP_LICENSE_URL_US") {
            self.us_license_url = url;
        }
        if let Some(url) = var("FACEPP_LICENSE_URL_TEST") {
            self.test_license_url = url;
        }
        if let Some(url) = var("FACEFLOW_REDIS_URL") {
            self.redis_url = url;
        }
        if let Some(path) = var("FACEFLOW_STORE_PATH") {
            self.store_path = PathBuf::from(path);
        }
    }

    /// The licensing endpoint for `region`, or `None` when none is configured.
    pub fn license_url(&self, region: LicenseRegion) -> Option<&str> {
        let url = match region {
            LicenseRegion::Cn => &self.cn_license_url,
            LicenseRegion::Us => &self.us_license_url,
            LicenseRegion::Test => &self.test_license_url,
        };

        Some(url.trim()).filter(|url| !url.is_empty())
    }
}
