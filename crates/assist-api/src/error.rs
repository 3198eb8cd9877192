use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("invalid response body: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid endpoint url: {0}")]
    Url(#[from] url::ParseError),
    #[error("backend returned HTTP {0}")]
    Status(u16),
    /// The backend answered with `success: false`.
    #[error("{0}")]
    Server(String),
}

impl ApiError {
    pub fn is_server_failure(&self) -> bool {
        matches!(self, Self::Server(_))
    }
}
