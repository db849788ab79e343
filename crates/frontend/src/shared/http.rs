//! Thin layer over `gloo-net` shared by every REST call of the app.
//!
//! All requests go through [`authorized`] so that the bearer token stored by
//! the session ends up in the `Authorization` header.

use gloo_net::http::{RequestBuilder, Response};
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::system::auth::storage::stored_token;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),

    #[error("server responded with HTTP {0}")]
    Status(u16),

    #[error("failed to decode response: {0}")]
    Decode(String),

    #[error("failed to encode request: {0}")]
    Encode(String),

    #[error("browser API failure: {0}")]
    Browser(String),
}

impl ApiError {
    pub fn browser(err: impl std::fmt::Debug) -> Self {
        ApiError::Browser(format!("{:?}", err))
    }
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => ApiError::Decode(e.to_string()),
            other => ApiError::Network(other.to_string()),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Encode(err.to_string())
    }
}

/// Adds `Authorization: Bearer <token>` when a session token exists
pub fn authorized(builder: RequestBuilder) -> RequestBuilder {
    match stored_token() {
        Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
        None => builder,
    }
}

/// Fails with [`ApiError::Status`] for any non-2xx response
pub fn ensure_ok(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        Ok(response)
    } else {
        Err(ApiError::Status(response.status()))
    }
}

pub async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let response = ensure_ok(response)?;
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

pub async fn read_bytes(response: Response) -> Result<Vec<u8>, ApiError> {
    let response = ensure_ok(response)?;
    Ok(response.binary().await?)
}
