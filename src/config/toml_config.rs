use crate::domain::model::{DEFAULT_LIMIT, DEFAULT_OFFSET};
use crate::utils::error::Result;
use crate::utils::validation::{validate_range, validate_url, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FileConfig {
    pub api: Option<ApiSection>,
    pub search: Option<SearchSection>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiSection {
    pub base_url: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchSection {
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

impl FileConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        let config: FileConfig = toml::from_str(&content)?;
        tracing::debug!("Loaded config file: {}", path.as_ref().display());
        Ok(config)
    }

    pub fn base_url(&self) -> Option<&str> {
        self.api
            .as_ref()
            .and_then(|api| api.base_url.as_deref())
            .filter(|url| !url.is_empty())
    }

    pub fn default_limit(&self) -> u32 {
        self.search
            .as_ref()
            .and_then(|s| s.limit)
            .unwrap_or(DEFAULT_LIMIT)
    }

    pub fn default_offset(&self) -> u32 {
        self.search
            .as_ref()
            .and_then(|s| s.offset)
            .unwrap_or(DEFAULT_OFFSET)
    }
}

impl Validate for FileConfig {
    fn validate(&self) -> Result<()> {
        if let Some(url) = self.base_url() {
            validate_url("api.base_url", url)?;
        }
        validate_range("search.limit", self.default_limit(), 1, 100)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("operator-search.toml");
        std::fs::write(
            &path,
            r#"
[api]
base_url = "http://localhost:8000/api/v1"

[search]
limit = 50
"#,
        )
        .unwrap();

        let config = FileConfig::from_file(&path).unwrap();
        assert_eq!(config.base_url(), Some("http://localhost:8000/api/v1"));
        assert_eq!(config.default_limit(), 50);
        assert_eq!(config.default_offset(), 0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let config: FileConfig = toml::from_str("").unwrap();
        assert_eq!(config.base_url(), None);
        assert_eq!(config.default_limit(), 20);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_out_of_range_limit() {
        let config: FileConfig = toml::from_str("[search]\nlimit = 500\n").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = FileConfig::from_file("/nonexistent/operator-search.toml").unwrap_err();
        assert!(matches!(err, crate::utils::error::SearchError::IoError(_)));
    }
}
