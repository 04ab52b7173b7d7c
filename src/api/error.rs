use thiserror::Error;

/// Ways the one dashboard fetch can fail.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("server returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("invalid url: {0}")]
    Url(#[from] url::ParseError),

    #[error("invalid payload: {0}")]
    InvalidPayload(String),

    #[error("failed to start async runtime: {0}")]
    Runtime(String),

    #[error("fetch worker stopped without a result")]
    WorkerGone,
}
