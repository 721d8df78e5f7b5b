use std::time::Duration;

use ui_logging::ui_debug;

use crate::{ApiError, Content, ErrorBody, ProcessRequest, ProcessResponse};

/// Connection settings for the backend client.
#[derive(Debug, Clone)]
pub struct ClientSettings {
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

/// Seam between the UI and the backend REST API.
#[async_trait::async_trait]
pub trait ContentApi: Send + Sync {
    /// `POST /api/content/process` with one or many URLs.
    async fn process_urls(&self, urls: &[String]) -> Result<Vec<Content>, ApiError>;

    /// `GET /api/search/content?query=...`. The wildcard `*` enumerates all
    /// stored content.
    async fn search(&self, query: &str) -> Result<Vec<Content>, ApiError>;
}

/// `reqwest`-backed implementation of [`ContentApi`].
#[derive(Debug, Clone)]
pub struct HttpContentApi {
    http: reqwest::Client,
    base_url: String,
}

impl HttpContentApi {
    pub fn new(base_url: impl Into<String>, settings: ClientSettings) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { http, base_url })
    }
}

#[async_trait::async_trait]
impl ContentApi for HttpContentApi {
    async fn process_urls(&self, urls: &[String]) -> Result<Vec<Content>, ApiError> {
        ui_debug!("POST /api/content/process with {} url(s)", urls.len());
        let response = self
            .http
            .post(format!("{}/api/content/process", self.base_url))
            .json(&ProcessRequest::from_urls(urls))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            // The backend puts its message in a `detail` field; fall back to
            // the status line when the body is missing or not JSON.
            let detail = response
                .json::<ErrorBody>()
                .await
                .ok()
                .and_then(|body| body.detail);
            return Err(ApiError::Backend(
                detail.unwrap_or_else(|| format!("Error: {}", status_text(status))),
            ));
        }

        let payload = response
            .json::<ProcessResponse>()
            .await
            .map_err(ApiError::Decode)?;
        Ok(payload.into_vec())
    }

    async fn search(&self, query: &str) -> Result<Vec<Content>, ApiError> {
        ui_debug!("GET /api/search/content query={:?}", query);
        let response = self
            .http
            .get(format!("{}/api/search/content", self.base_url))
            .query(&[("query", query)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            // The search endpoint has no structured error body.
            return Err(ApiError::Backend(format!(
                "Error: {}",
                status_text(status)
            )));
        }

        response
            .json::<Vec<Content>>()
            .await
            .map_err(ApiError::Decode)
    }
}

fn status_text(status: reqwest::StatusCode) -> String {
    status
        .canonical_reason()
        .map(ToOwned::to_owned)
        .unwrap_or_else(|| status.as_str().to_string())
}
