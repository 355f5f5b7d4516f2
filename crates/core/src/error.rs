#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("missing required field: {0}")]
    MissingField(&'static str),
    #[error("{field} must be a number, got {value:?}")]
    InvalidNumber { field: &'static str, value: String },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("failed to connect to document store: {0}")]
    StorageConnect(Box<dyn std::error::Error + Send + Sync>),
    #[error("failed to insert document: {0}")]
    StorageInsert(Box<dyn std::error::Error + Send + Sync>),
    #[error("failed to read documents: {0}")]
    StorageRead(Box<dyn std::error::Error + Send + Sync>),

    #[error("joke provider request failed: {0}")]
    UpstreamRequest(#[from] reqwest::Error),
    #[error("joke provider responded with status {0}")]
    UpstreamStatus(u16),
    #[error("joke provider reported an error: {0}")]
    UpstreamRejected(String),
}

impl CoreError {
    /// True for failures caused by the caller's payload rather than by the service.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            CoreError::MissingField(_) | CoreError::InvalidNumber { .. }
        )
    }
}

pub type CoreResult<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_payload_failures_are_invalid_input() {
        assert!(CoreError::MissingField("name").is_invalid_input());
        assert!(CoreError::InvalidNumber {
            field: "marks",
            value: "abc".into(),
        }
        .is_invalid_input());

        assert!(!CoreError::InvalidConfig("MONGO_URI".into()).is_invalid_input());
        assert!(!CoreError::StorageInsert("offline".into()).is_invalid_input());
        assert!(!CoreError::UpstreamStatus(503).is_invalid_input());
    }
}
