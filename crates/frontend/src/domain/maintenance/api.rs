use contracts::domain::maintenance::{MaintenanceRecord, NewMaintenanceRecord};
use gloo_net::http::Request;

use crate::shared::api_utils::{api_url, bearer, error_message, fetch_with_auth};

pub async fn fetch_maintenance(token: &str) -> Result<Vec<MaintenanceRecord>, String> {
    fetch_with_auth("/api/maintenance", token, "Fetch maintenance").await
}

pub async fn create_maintenance(token: &str, record: &NewMaintenanceRecord) -> Result<(), String> {
    let response = Request::post(&api_url("/api/maintenance"))
        .header("Authorization", &bearer(token))
        .json(record)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(error_message(response, "Save maintenance record").await);
    }
    Ok(())
}
