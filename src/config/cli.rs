use crate::config::{toml_config::FileConfig, BASE_URL_ENV};
use crate::domain::model::SearchRequest;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_range, Validate};
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "operator-search")]
#[command(about = "Search registered health plan operators through the API")]
pub struct CliConfig {
    /// Search term (operator name, CNPJ, city or ANS registration)
    pub query: String,

    #[arg(long)]
    pub limit: Option<u32>,

    #[arg(long)]
    pub offset: Option<u32>,

    #[arg(long, env = BASE_URL_ENV)]
    pub base_url: Option<String>,

    #[arg(long, help = "TOML file with [api] and [search] tables")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Follow pagination until every match is fetched")]
    pub all: bool,

    #[arg(long, help = "Print results decoded as operator records")]
    pub typed: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}

impl CliConfig {
    pub fn file_config(&self) -> Result<Option<FileConfig>> {
        match &self.config {
            Some(path) => Ok(Some(FileConfig::from_file(path)?)),
            None => Ok(None),
        }
    }

    pub fn to_request(&self, file: Option<&FileConfig>) -> SearchRequest {
        let defaults = file.cloned().unwrap_or_default();
        SearchRequest::new(self.query.clone())
            .with_limit(self.limit.unwrap_or_else(|| defaults.default_limit()))
            .with_offset(self.offset.unwrap_or_else(|| defaults.default_offset()))
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("query", &self.query)?;
        if let Some(limit) = self.limit {
            validate_range("limit", limit, 1, 100)?;
        }
        Ok(())
    }
}
