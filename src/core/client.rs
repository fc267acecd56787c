use crate::config::ClientConfig;
use crate::core::{ApiConfigProvider, OperatorSearch, Result, SearchRequest, SearchResponse};
use crate::utils::error::SearchError;
use reqwest::{Client, Response, StatusCode};
use url::form_urlencoded;

const SEARCH_PATH: &str = "/operators/search";

pub struct SearchClient {
    config: ClientConfig,
    client: Client,
}

impl SearchClient {
    pub fn new(config: ClientConfig) -> Self {
        Self::with_http_client(config, Client::new())
    }

    pub fn with_http_client(config: ClientConfig, client: Client) -> Self {
        Self { config, client }
    }

    /// Query pairs are form-encoded in the order `q`, `limit`, `offset`.
    pub fn search_url(&self, request: &SearchRequest) -> String {
        let query = form_urlencoded::Serializer::new(String::new())
            .append_pair("q", &request.query)
            .append_pair("limit", &request.limit.to_string())
            .append_pair("offset", &request.offset.to_string())
            .finish();

        let base = self.config.base_url();
        let base = base.strip_suffix('/').unwrap_or(base);
        format!("{}{}?{}", base, SEARCH_PATH, query)
    }

    pub async fn search_operators(
        &self,
        query: &str,
        limit: Option<u32>,
        offset: Option<u32>,
    ) -> Result<SearchResponse> {
        let mut request = SearchRequest::new(query);
        if let Some(limit) = limit {
            request = request.with_limit(limit);
        }
        if let Some(offset) = offset {
            request = request.with_offset(offset);
        }
        self.search(&request).await
    }

    /// Fetches the page for `request` and every page after it.
    pub async fn search_all(&self, request: &SearchRequest) -> Result<SearchResponse> {
        let mut combined = self.search(request).await?;
        let mut next = request.next_page(&combined);

        while let Some(page_request) = next {
            let page = self.search(&page_request).await?;
            if page.results.is_empty() {
                break;
            }
            next = page_request.next_page(&page);
            combined.total_count = page.total_count;
            combined.results.extend(page.results);
        }

        Ok(combined)
    }

    async fn fetch(&self, url: &str) -> Result<SearchResponse> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        tracing::debug!("API response status: {}", status);

        if !status.is_success() {
            return Err(error_from_response(status, response).await);
        }

        let body = response.text().await?;
        let data: SearchResponse = serde_json::from_str(&body)?;
        Ok(data)
    }
}

#[async_trait::async_trait]
impl OperatorSearch for SearchClient {
    async fn search(&self, request: &SearchRequest) -> Result<SearchResponse> {
        let url = self.search_url(request);
        tracing::debug!("Fetching: {}", url);

        match self.fetch(&url).await {
            Ok(data) => {
                tracing::debug!(
                    "Received {} of {} results",
                    data.results.len(),
                    data.total_count
                );
                Ok(data)
            }
            Err(e) => {
                tracing::error!("Error during API call: {}", e);
                Err(e)
            }
        }
    }
}

async fn error_from_response(status: StatusCode, response: Response) -> SearchError {
    // Body may be missing or not JSON; either way the status text is used.
    let error_data = match response.text().await {
        Ok(text) => serde_json::from_str::<serde_json::Value>(&text).ok(),
        Err(_) => None,
    };
    tracing::error!("API error response: {:?}", error_data);

    let message = error_data
        .as_ref()
        .and_then(extract_detail)
        .unwrap_or_else(|| status.canonical_reason().unwrap_or("").to_string());

    SearchError::Api {
        status: status.as_u16(),
        message,
    }
}

fn extract_detail(body: &serde_json::Value) -> Option<String> {
    match body.get("detail")? {
        serde_json::Value::String(s) if !s.is_empty() => Some(s.clone()),
        serde_json::Value::String(_) | serde_json::Value::Null | serde_json::Value::Bool(false) => {
            None
        }
        serde_json::Value::Number(n) if n.as_f64() == Some(0.0) => None,
        other => Some(other.to_string()),
    }
}
