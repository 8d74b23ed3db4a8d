use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::{HeaderMap, header::CONTENT_TYPE},
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use shared::errors::HttpError;

/// Request body read the way a permissive JSON body parser reads it.
///
/// Bodies not declared as JSON, empty bodies and JSON that is not an object
/// all yield `T::default()`, so every field binds as `NULL`. Only bytes that
/// claim to be JSON and fail to parse are rejected.
pub struct JsonBody<T>(pub T);

fn is_json(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok()) else {
        return false;
    };

    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    essence == "application/json"
        || (essence.starts_with("application/") && essence.ends_with("+json"))
}

fn invalid_json(error: impl ToString) -> HttpError {
    HttpError::BadRequest {
        message: "Invalid JSON".into(),
        error: error.to_string(),
    }
}

impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned + Default + Send,
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if !is_json(req.headers()) {
            return Ok(Self(T::default()));
        }

        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| invalid_json(rejection.body_text()))?;

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self(T::default()));
        }

        match serde_json::from_slice::<Value>(&bytes).map_err(invalid_json)? {
            value @ Value::Object(_) => serde_json::from_value(value)
                .map(Self)
                .map_err(invalid_json),
            _ => Ok(Self(T::default())),
        }
    }
}
