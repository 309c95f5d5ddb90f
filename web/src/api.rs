use clueboard_core::{Category, CategoryId, CategorySummary, TriviaSource};
use gloo::net::http::Request;
use thiserror::Error;

pub(crate) const DEFAULT_API_URL: &str = "https://jservice.io/api";

#[derive(Error, Debug)]
pub(crate) enum ApiError {
    #[error("network error: {0}")]
    Network(#[from] gloo::net::Error),
    #[error("{url} answered with status {status}")]
    Status { url: String, status: u16 },
    #[error("unexpected payload: {0}")]
    Decode(#[from] serde_json::Error),
}

/// [`TriviaSource`] backed by a jService compatible HTTP API.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct HttpSource {
    base_url: String,
}

impl HttpSource {
    pub(crate) fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path)
    }

    async fn get_text(&self, path: &str, query: (&str, &str)) -> Result<String, ApiError> {
        let url = self.endpoint(path);
        log::trace!("GET {}?{}={}", url, query.0, query.1);

        let response = Request::get(&url).query([query]).send().await?;
        if !response.ok() {
            return Err(ApiError::Status {
                url,
                status: response.status(),
            });
        }
        Ok(response.text().await?)
    }
}

impl TriviaSource for HttpSource {
    type Error = ApiError;

    async fn list_categories(&self, count: u32) -> Result<Vec<CategorySummary>, ApiError> {
        let count = count.to_string();
        let body = self.get_text("categories", ("count", &count)).await?;
        Ok(clueboard_protocol::decode_listing(&body)?)
    }

    async fn category(&self, id: CategoryId) -> Result<Category, ApiError> {
        let id = id.to_string();
        let body = self.get_text("category", ("id", &id)).await?;
        Ok(clueboard_protocol::decode_category(&body)?)
    }
}
