use thiserror::Error;

/// Failures talking to the backend. The `Display` text is what the UI shows
/// inline, so each variant formats a complete user-facing message.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Non-2xx answer; the message is the error-body `detail` when present,
    /// otherwise `Error: <status text>`.
    #[error("{0}")]
    Backend(String),
    /// Connection, TLS or timeout problems before a status line arrived.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// A 2xx answer whose body was not the expected JSON shape.
    #[error("malformed response: {0}")]
    Decode(#[source] reqwest::Error),
}
