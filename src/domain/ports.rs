use crate::domain::model::{SearchRequest, SearchResponse};
use crate::utils::error::Result;
use async_trait::async_trait;

#[async_trait]
pub trait OperatorSearch: Send + Sync {
    async fn search(&self, request: &SearchRequest) -> Result<SearchResponse>;
}

pub trait ApiConfigProvider: Send + Sync {
    fn base_url(&self) -> &str;
}
