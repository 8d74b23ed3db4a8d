use crate::errors::repository::RepositoryError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// The targeted row does not exist or fails the operation's predicate.
    #[error("{0}")]
    NotFound(String),

    #[error("{message}: {source}")]
    Repo {
        message: String,
        #[source]
        source: RepositoryError,
    },
}

impl ServiceError {
    pub fn not_found(message: impl Into<String>) -> Self {
        ServiceError::NotFound(message.into())
    }

    pub fn repo(message: impl Into<String>, source: RepositoryError) -> Self {
        ServiceError::Repo {
            message: message.into(),
            source,
        }
    }
}
