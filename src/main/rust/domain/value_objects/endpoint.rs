use std::fmt;

use crate::domain::errors::{DomainError, Result};

/// Collection endpoint used when no override is configured
pub const DEFAULT_BASE_URL: &str = "https://mircord.xyz/bot-stats";

/// Where snapshots are posted and how the request is authorized
#[derive(Clone, PartialEq, Eq)]
pub struct Endpoint {
    base_url: String,
    api_key: String,
}

impl Endpoint {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Result<Self> {
        let base_url = base_url.into();
        let api_key = api_key.into();

        Self::validate_url(&base_url)?;
        if api_key.trim().is_empty() {
            return Err(DomainError::MissingApiKey);
        }

        Ok(Self { base_url, api_key })
    }

    /// Endpoint on the public Mircord collector
    pub fn mircord(api_key: impl Into<String>) -> Result<Self> {
        Self::new(DEFAULT_BASE_URL, api_key)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Value sent verbatim in the `Authorization` header
    pub fn authorization(&self) -> &str {
        &self.api_key
    }

    fn validate_url(url: &str) -> Result<()> {
        if !url.starts_with("https://") && !url.starts_with("http://") {
            return Err(DomainError::InvalidEndpointUrl(url.to_string()));
        }
        Ok(())
    }
}

impl fmt::Debug for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Endpoint")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .finish()
    }
}
