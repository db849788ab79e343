use contracts::system::auth::{LoginRequest, LoginResponse};
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;
use crate::shared::http::{read_json, ApiError};

/// Login with email and password (`POST /api/usuarios/login`)
pub async fn login(email: String, password: String) -> Result<LoginResponse, ApiError> {
    let request = LoginRequest { email, password };

    let response = Request::post(&api_url("/api/usuarios/login"))
        .json(&request)?
        .send()
        .await?;

    let body: LoginResponse = read_json(response).await?;
    if !body.success || body.token.is_empty() {
        log::warn!("Login rechazado: {}", body.message);
        return Err(ApiError::Status(401));
    }
    Ok(body)
}
