use contracts::system::auth::{LoginRequest, LoginResponse, RegisterRequest};
use contracts::system::roles::Role;
use gloo_net::http::Request;

use crate::shared::api_utils::{api_url, error_message};

/// Login with username and password
pub async fn login(username: String, password: String) -> Result<LoginResponse, String> {
    let request = LoginRequest { username, password };

    let response = Request::post(&api_url("/api/auth/login"))
        .json(&request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(error_message(response, "Login").await);
    }

    response
        .json::<LoginResponse>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Create an account. The backend answers with a message only; the user
/// signs in afterwards.
pub async fn register(
    username: String,
    email: String,
    password: String,
    role: Role,
) -> Result<(), String> {
    let request = RegisterRequest {
        username,
        email,
        password,
        role,
    };

    let response = Request::post(&api_url("/api/auth/register"))
        .json(&request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(error_message(response, "Registration").await);
    }

    Ok(())
}
