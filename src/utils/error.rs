use thiserror::Error;

#[derive(Error, Debug)]
pub enum SearchError {
    #[error("API request failed with status {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Request error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Failed to parse response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Config file parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl SearchError {
    /// HTTP status of a non-2xx response, if that is what failed.
    pub fn status(&self) -> Option<u16> {
        match self {
            SearchError::Api { status, .. } => Some(*status),
            SearchError::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            SearchError::InvalidConfigValueError { .. }
            | SearchError::IoError(_)
            | SearchError::TomlError(_) => 1,
            SearchError::Api { .. } => 2,
            SearchError::Transport(_) | SearchError::Decode(_) => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, SearchError>;
