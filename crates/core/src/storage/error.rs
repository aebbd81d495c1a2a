use thiserror::Error;

/// Errors that can occur during repository operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("{entity_type} not found: {id}")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Query failed: {0}")]
    QueryFailed(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

impl RepositoryError {
    /// The underlying backend message, without the variant's prefix.
    pub fn raw_message(&self) -> String {
        match self {
            RepositoryError::NotFound { .. } => self.to_string(),
            RepositoryError::ConnectionFailed(message)
            | RepositoryError::QueryFailed(message)
            | RepositoryError::Serialization(message)
            | RepositoryError::InvalidData(message) => message.clone(),
        }
    }
}

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, RepositoryError>;
