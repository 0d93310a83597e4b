use crate::api::{ApiError, QueryService};
use crate::models::QueryResponse;

pub const GENERIC_ERROR: &str = "Failed to get a response. Please try again.";

/// What the page currently shows, in display order.
#[derive(Debug, PartialEq, Eq)]
pub struct View<'a> {
    pub error: Option<&'a str>,
    pub loading: bool,
    pub result: Option<&'a QueryResponse>,
}

/// State behind the query page.
#[derive(Debug, Default)]
pub struct Page {
    query: String,
    loading: bool,
    result: Option<QueryResponse>,
    error: String,
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_query(&mut self, text: impl Into<String>) {
        self.query = text.into();
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn result(&self) -> Option<&QueryResponse> {
        self.result.as_ref()
    }

    pub fn error(&self) -> &str {
        &self.error
    }

    /// Returns the text to send, or `None` for a blank query.
    pub fn begin_submit(&mut self) -> Option<String> {
        if self.query.trim().is_empty() {
            return None;
        }
        self.loading = true;
        self.error.clear();
        Some(self.query.clone())
    }

    /// A failed request keeps whatever result was shown before.
    pub fn finish_submit(&mut self, outcome: Result<QueryResponse, ApiError>) {
        match outcome {
            Ok(response) => self.result = Some(response),
            Err(_) => self.error = GENERIC_ERROR.to_string(),
        }
        self.loading = false;
    }

    /// Returns `false` when nothing was sent.
    pub async fn submit<S: QueryService>(&mut self, service: &S) -> bool {
        let Some(query) = self.begin_submit() else {
            return false;
        };
        let outcome = service.query_laws(&query).await;
        self.finish_submit(outcome);
        true
    }

    pub fn search_label(&self) -> &'static str {
        if self.loading {
            "Searching"
        } else {
            "Search"
        }
    }

    pub fn view(&self) -> View<'_> {
        View {
            error: (!self.error.is_empty()).then_some(self.error.as_str()),
            loading: self.loading,
            result: self.result.as_ref().filter(|_| !self.loading),
        }
    }
}
