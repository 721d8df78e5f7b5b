//! Curator client: typed HTTP access to the content-processing backend.
mod api;
mod error;
mod types;

pub use api::{ClientSettings, ContentApi, HttpContentApi};
pub use error::ApiError;
pub use types::{Content, ErrorBody, ProcessRequest, ProcessResponse};
