use crate::errors::{error::ErrorResponse, service::ServiceError};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

#[derive(Debug)]
pub enum HttpError {
    BadRequest { message: String, error: String },
    NotFound(String),
    Internal { message: String, error: String },
}

impl HttpError {
    pub fn status(&self) -> StatusCode {
        match self {
            HttpError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            HttpError::NotFound(_) => StatusCode::NOT_FOUND,
            HttpError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ServiceError> for HttpError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::NotFound(message) => HttpError::NotFound(message),
            ServiceError::Repo { message, source } => HttpError::Internal {
                message,
                error: source.detail(),
            },
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let status = self.status();

        let body = match self {
            HttpError::NotFound(message) => ErrorResponse {
                message,
                error: None,
            },
            HttpError::BadRequest { message, error }
            | HttpError::Internal { message, error } => ErrorResponse {
                message,
                error: Some(error),
            },
        };

        (status, Json(body)).into_response()
    }
}
