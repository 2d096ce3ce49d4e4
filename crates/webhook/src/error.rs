use thiserror::Error;

use crate::http::HttpError;

#[derive(Debug, Error)]
pub enum Error {
    #[error("HTTP client error: {0}")]
    Http(HttpError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
