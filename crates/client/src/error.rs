#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("server responded with status {status}: {message}")]
    Status { status: u16, message: String },
    #[error("failed to read joke cache: {0}")]
    CacheRead(std::io::Error),
    #[error("failed to write joke cache: {0}")]
    CacheWrite(std::io::Error),
    #[error("joke cache is corrupt: {0}")]
    CacheFormat(serde_json::Error),
}

pub type ClientResult<T> = std::result::Result<T, ClientError>;
