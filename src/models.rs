use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LicenseRegion {
    Cn,
    Us,
    Test,
}

impl fmt::Display for LicenseRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LicenseRegion::Cn => "cn",
            LicenseRegion::Us => "us",
            LicenseRegion::Test => "test",
        };
        f.write_str(name)
    }
}

pub const DEFAULT_LICENSE_DURATION: &str = "1";

/// Parameters handed to the licensing SDK when it fetches a license.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct LicenseRequest {
    pub url: String,
    pub uuid: String,
    pub api_key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_secret: Option<String>,
    pub duration: String,
}

impl LicenseRequest {
    /// Same request with the secret dropped, for printing.
    pub fn redacted(mut self) -> Self {
        self.api_secret = None;
        self
    }
}
