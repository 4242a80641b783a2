use contracts::domain::requests::{DispatchResponse, EquipmentRequest, NewEquipmentRequest};
use gloo_net::http::Request;

use crate::shared::api_utils::{api_url, bearer, error_message, fetch_with_auth};

fn request_path(id: &str, action: Option<&str>) -> String {
    let id = urlencoding::encode(id);
    match action {
        Some(action) => format!("/api/requests/{}/{}", id, action),
        None => format!("/api/requests/{}", id),
    }
}

/// Requests waiting for department-head approval.
pub async fn fetch_pending(token: &str) -> Result<Vec<EquipmentRequest>, String> {
    fetch_with_auth("/api/requests/pending", token, "Fetch pending requests").await
}

/// Approved requests, dispatched or not.
pub async fn fetch_approved(token: &str) -> Result<Vec<EquipmentRequest>, String> {
    fetch_with_auth("/api/requests/approved", token, "Fetch approved requests").await
}

pub async fn submit_request(token: &str, body: &NewEquipmentRequest) -> Result<(), String> {
    let response = Request::post(&api_url("/api/requests"))
        .header("Authorization", &bearer(token))
        .json(body)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(error_message(response, "Submit request").await);
    }
    Ok(())
}

pub async fn approve_request(token: &str, id: &str) -> Result<(), String> {
    let response = Request::patch(&api_url(&request_path(id, Some("approve"))))
        .header("Authorization", &bearer(token))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(error_message(response, "Approve request").await);
    }
    Ok(())
}

/// Rejecting deletes the request.
pub async fn reject_request(token: &str, id: &str) -> Result<(), String> {
    let response = Request::delete(&api_url(&request_path(id, None)))
        .header("Authorization", &bearer(token))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(error_message(response, "Reject request").await);
    }
    Ok(())
}

/// Dispatches an approved request. The error side carries the formatted
/// summary of the backend's `{error, backordered}` body when it sent one.
pub async fn dispatch_request(token: &str, id: &str) -> Result<DispatchResponse, String> {
    let response = Request::post(&api_url(&request_path(id, Some("dispatch"))))
        .header("Authorization", &bearer(token))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        let message = dispatch_failure(&body, status);
        log::error!("dispatch of {} failed: {}", id, message);
        return Err(message);
    }

    response
        .json::<DispatchResponse>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

fn dispatch_failure(body: &str, status: u16) -> String {
    match serde_json::from_str::<DispatchResponse>(body) {
        Ok(parsed) if parsed.error.is_some() => parsed.summary(),
        _ => format!("Dispatch failed: {}", status),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_escaped_in_paths() {
        assert_eq!(request_path("abc", None), "/api/requests/abc");
        assert_eq!(request_path("a/b", Some("approve")), "/api/requests/a%2Fb/approve");
    }

    #[test]
    fn dispatch_failure_lists_unavailable_items() {
        let body = r#"{"error":"Insufficient stock","backordered":[{"name":"Relay","requested":4,"available":0}]}"#;
        assert_eq!(
            dispatch_failure(body, 400),
            "Insufficient stock\n\nUnavailable Items:\n- Relay (Requested: 4, Available: 0)"
        );
        assert_eq!(dispatch_failure("oops", 502), "Dispatch failed: 502");
        assert_eq!(dispatch_failure(r#"{"message":"x"}"#, 500), "Dispatch failed: 500");
    }
}
