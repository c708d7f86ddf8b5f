use thiserror::Error;

/// Anything that can go wrong talking to a remote service.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("server returned status {0}")]
    Status(u16),

    #[error("could not decode response: {0}")]
    Decode(#[from] serde_json::Error),
}
