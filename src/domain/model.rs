use crate::utils::error::Result;
use serde::{Deserialize, Serialize};

pub const DEFAULT_LIMIT: u32 = 20;
pub const DEFAULT_OFFSET: u32 = 0;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRequest {
    pub query: String,
    pub limit: u32,
    pub offset: u32,
}

impl SearchRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            limit: DEFAULT_LIMIT,
            offset: DEFAULT_OFFSET,
        }
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    pub fn with_offset(mut self, offset: u32) -> Self {
        self.offset = offset;
        self
    }

    /// Request for the page after `response`, or `None` once every match has been covered.
    pub fn next_page(&self, response: &SearchResponse) -> Option<SearchRequest> {
        if self.limit == 0 {
            return None;
        }
        let next_offset = self.offset.checked_add(self.limit)?;
        if i64::from(next_offset) >= response.total_count {
            return None;
        }
        Some(self.clone().with_offset(next_offset))
    }
}

/// Body of a successful search. Keys other than `total_count` and `results`
/// are kept in `extra` so the value serializes back to what the server sent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    pub total_count: i64,
    pub results: Vec<serde_json::Value>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl SearchResponse {
    pub fn operators(&self) -> Result<Vec<OperatorRecord>> {
        let operators = self
            .results
            .iter()
            .cloned()
            .map(serde_json::from_value)
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(operators)
    }
}

/// A registered health plan operator as returned by the search endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperatorRecord {
    pub registro_ans: i64,
    pub cnpj: Option<String>,
    pub razao_social: String,
    pub nome_fantasia: Option<String>,
    pub modalidade: Option<String>,
    pub cidade: Option<String>,
    pub uf: Option<String>,
    // full-text relevance
    pub rank: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn response(total_count: i64) -> SearchResponse {
        serde_json::from_value(json!({ "total_count": total_count, "results": [] })).unwrap()
    }

    #[test]
    fn test_request_defaults() {
        let request = SearchRequest::new("foo");
        assert_eq!(request.limit, 20);
        assert_eq!(request.offset, 0);
    }

    #[test]
    fn test_next_page_advances_by_limit() {
        let request = SearchRequest::new("saude").with_limit(10);
        let next = request.next_page(&response(25)).unwrap();
        assert_eq!(next.offset, 10);
        assert_eq!(next.limit, 10);

        let last = next.next_page(&response(25)).unwrap();
        assert_eq!(last.offset, 20);
        assert!(last.next_page(&response(25)).is_none());
    }

    #[test]
    fn test_next_page_stops_on_exact_boundary() {
        let request = SearchRequest::new("saude").with_limit(10).with_offset(10);
        assert!(request.next_page(&response(20)).is_none());
        assert!(SearchRequest::new("x").next_page(&response(0)).is_none());
    }

    #[test]
    fn test_response_keeps_unknown_keys() {
        let body = json!({
            "total_count": 1,
            "results": [{ "registro_ans": 1 }],
            "took_ms": 3
        });
        let parsed: SearchResponse = serde_json::from_value(body.clone()).unwrap();
        assert_eq!(parsed.extra.get("took_ms"), Some(&json!(3)));
        assert_eq!(serde_json::to_value(&parsed).unwrap(), body);
    }

    #[test]
    fn test_operators_decodes_records() {
        let parsed: SearchResponse = serde_json::from_value(json!({
            "total_count": 1,
            "results": [{
                "registro_ans": 326305,
                "cnpj": "29309127000179",
                "razao_social": "AMIL ASSISTENCIA MEDICA INTERNACIONAL S.A.",
                "nome_fantasia": null,
                "modalidade": "Medicina de Grupo",
                "cidade": "Barueri",
                "uf": "SP",
                "rank": 0.42
            }]
        }))
        .unwrap();

        let operators = parsed.operators().unwrap();
        assert_eq!(operators.len(), 1);
        assert_eq!(operators[0].registro_ans, 326305);
        assert_eq!(operators[0].uf.as_deref(), Some("SP"));
        assert_eq!(operators[0].nome_fantasia, None);
    }

    #[test]
    fn test_operators_rejects_malformed_records() {
        let parsed: SearchResponse =
            serde_json::from_value(json!({ "total_count": 1, "results": [{ "cnpj": "x" }] }))
                .unwrap();
        assert!(parsed.operators().is_err());
    }
}
