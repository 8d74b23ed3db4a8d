use sqlx::Error as SqlxError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    Sqlx(#[from] SqlxError),

    #[error("Custom: {0}")]
    Custom(String),
}

impl RepositoryError {
    /// Text reported to clients in the `error` field of a 500 response.
    ///
    /// Database errors surface the server's own message, everything else
    /// falls back to the display form.
    pub fn detail(&self) -> String {
        match self {
            RepositoryError::Sqlx(SqlxError::Database(db)) => db.message().to_string(),
            RepositoryError::Sqlx(err) => err.to_string(),
            other => other.to_string(),
        }
    }
}
