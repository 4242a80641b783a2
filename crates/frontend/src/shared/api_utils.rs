//! Helpers for talking to the backend.
//!
//! The backend runs on the same host as the page, port 3000.

use contracts::system::auth::ErrorResponse;
use gloo_net::http::{Request, Response};

/// Get the base URL for API requests
///
/// Returns e.g. "http://localhost:3000", or an empty string outside a browser.
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

/// Build a full API URL from a path starting with "/api/".
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

pub fn bearer(token: &str) -> String {
    format!("Bearer {}", token)
}

/// Protected endpoints are not even attempted without a token.
pub fn require_token(token: Option<String>) -> Result<String, String> {
    token
        .filter(|t| !t.is_empty())
        .ok_or_else(|| "Not authenticated".to_string())
}

/// Message for a non-2xx response: the backend's `{error}` when it sent one,
/// otherwise "<operation> failed: <status>".
pub async fn error_message(response: Response, operation: &str) -> String {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    let message =
        backend_error(&body).unwrap_or_else(|| format!("{} failed: {}", operation, status));
    log::error!("{}", message);
    message
}

/// GET with a bearer token; `operation` names the call in error messages.
pub async fn fetch_with_auth<T>(path: &str, token: &str, operation: &str) -> Result<T, String>
where
    T: for<'de> serde::Deserialize<'de>,
{
    let response = Request::get(&api_url(path))
        .header("Authorization", &bearer(token))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(error_message(response, operation).await);
    }

    response
        .json::<T>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

fn backend_error(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorResponse>(body)
        .ok()
        .map(|e| e.error)
        .filter(|e| !e.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_token_short_circuits() {
        assert_eq!(require_token(None), Err("Not authenticated".to_string()));
        assert_eq!(require_token(Some(String::new())), Err("Not authenticated".to_string()));
        assert_eq!(require_token(Some("abc".into())), Ok("abc".to_string()));
        assert_eq!(bearer("abc"), "Bearer abc");
    }

    #[test]
    fn backend_error_body_is_surfaced() {
        assert_eq!(
            backend_error(r#"{"error":"Insufficient stock"}"#).as_deref(),
            Some("Insufficient stock")
        );
        assert_eq!(backend_error("<html>502</html>"), None);
        assert_eq!(backend_error(r#"{"error":""}"#), None);
    }
}
