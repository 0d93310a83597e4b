use std::future::Future;

use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, StatusCode};
use thiserror::Error;

use crate::models::QueryResponse;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("API request failed: {status} - {body}")]
    Status { status: StatusCode, body: String },
    #[error("Failed to parse response: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Anything the page can send a query to.
pub trait QueryService {
    fn query_laws(
        &self,
        query: &str,
    ) -> impl Future<Output = Result<QueryResponse, ApiError>> + Send;
}

#[derive(Clone)]
pub struct LawsClient {
    client: Client,
    base_url: String,
}

impl LawsClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn fetch(&self, query: &str) -> Result<QueryResponse, ApiError> {
        let url = format!("{}/query", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[("query", query)])
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(ApiError::Status { status, body });
        }

        Ok(serde_json::from_str(&body)?)
    }
}

impl QueryService for LawsClient {
    async fn query_laws(&self, query: &str) -> Result<QueryResponse, ApiError> {
        tracing::debug!(base_url = %self.base_url, "sending query");
        let result = self.fetch(query).await;
        if let Err(e) = &result {
            tracing::error!(error = %e, "error querying API");
        }
        result
    }
}
