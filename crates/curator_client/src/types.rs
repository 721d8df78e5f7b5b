use serde::{Deserialize, Serialize};

/// Content record returned by the backend for both processing and search.
///
/// Mirrors the backend's content model; analysis fields are defaulted so a
/// sparse record still deserializes.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Content {
    pub url: String,
    pub title: String,
    pub source: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub topics: Vec<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default = "default_sentiment")]
    pub sentiment: String,
    #[serde(default)]
    pub reading_time: u32,
}

fn default_language() -> String {
    "en".to_string()
}

fn default_sentiment() -> String {
    "neutral".to_string()
}

/// Body for the process endpoint: a bare `{url}` for exactly one URL,
/// `{urls: [...]}` otherwise. The backend rejects bodies carrying both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ProcessRequest {
    Single { url: String },
    Batch { urls: Vec<String> },
}

impl ProcessRequest {
    /// Input order is preserved in the batch form.
    pub fn from_urls(urls: &[String]) -> Self {
        match urls {
            [only] => ProcessRequest::Single { url: only.clone() },
            many => ProcessRequest::Batch {
                urls: many.to_vec(),
            },
        }
    }
}

/// The process endpoint answers with one object for a single URL and an
/// array otherwise; both normalize to a `Vec`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ProcessResponse {
    Many(Vec<Content>),
    One(Box<Content>),
}

impl ProcessResponse {
    pub fn into_vec(self) -> Vec<Content> {
        match self {
            ProcessResponse::Many(items) => items,
            ProcessResponse::One(item) => vec![*item],
        }
    }
}

/// FastAPI-style error body.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<String>,
}
