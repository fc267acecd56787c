#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::domain::ports::ApiConfigProvider;
use crate::utils::validation::validate_url;
use std::env;

pub const BASE_URL_ENV: &str = "API_BASE_URL";

/// Connection settings handed to [`crate::SearchClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let config = Self {
            base_url: base_url.into(),
        };
        config.check();
        config
    }

    pub fn from_env() -> Self {
        Self::resolve(None, None)
    }

    /// Explicit value (CLI flag or `API_BASE_URL`) wins over the config file.
    /// A missing base URL is only logged; requests made with it fail later.
    pub fn resolve(explicit: Option<String>, file: Option<&toml_config::FileConfig>) -> Self {
        let base_url = explicit
            .filter(|url| !url.is_empty())
            .or_else(|| env::var(BASE_URL_ENV).ok().filter(|url| !url.is_empty()))
            .or_else(|| file.and_then(|f| f.base_url().map(str::to_string)))
            .unwrap_or_default();

        Self::new(base_url)
    }

    fn check(&self) {
        if self.base_url.is_empty() {
            tracing::error!(
                "API base URL is not configured (set {}, --base-url or [api] base_url)",
                BASE_URL_ENV
            );
            return;
        }
        if let Err(e) = validate_url("base_url", &self.base_url) {
            tracing::warn!("Base URL looks malformed: {}", e);
        }
    }
}

impl ApiConfigProvider for ClientConfig {
    fn base_url(&self) -> &str {
        &self.base_url
    }
}
