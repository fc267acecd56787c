pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use config::{toml_config::FileConfig, ClientConfig};
pub use core::{
    client::SearchClient, OperatorRecord, OperatorSearch, SearchRequest, SearchResponse,
};
pub use utils::error::{Result, SearchError};
