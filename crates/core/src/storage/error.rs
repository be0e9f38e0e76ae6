use thiserror::Error;

/// Errors that can occur during repository operations.
///
/// The repository recovers from nothing: exactly one store condition ("item
/// absent on point lookup") is translated into [`RepositoryError::NotFound`];
/// everything else passes through with the underlying diagnostic preserved.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// The requested transaction does not exist.
    ///
    /// This is a sentinel: a unit variant with stable identity, so callers
    /// test for it with `==` or `matches!`, never by message text.
    #[error("Transaction not found")]
    NotFound,
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Query failed: {0}")]
    QueryFailed(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, RepositoryError>;
