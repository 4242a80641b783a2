use contracts::domain::inventory::{InventoryPage, InventoryQuery, NewInventoryItem};
use gloo_net::http::Request;

use crate::shared::api_utils::{api_url, bearer, error_message, fetch_with_auth};

fn inventory_path(query: &InventoryQuery) -> String {
    match serde_qs::to_string(query) {
        Ok(qs) if !qs.is_empty() => format!("/api/inventory?{}", qs),
        Ok(_) => "/api/inventory".to_string(),
        Err(e) => {
            log::warn!("could not encode inventory query: {}", e);
            "/api/inventory".to_string()
        }
    }
}

pub async fn fetch_inventory(token: &str, query: &InventoryQuery) -> Result<InventoryPage, String> {
    fetch_with_auth(&inventory_path(query), token, "Fetch inventory").await
}

pub async fn create_item(token: &str, item: &NewInventoryItem) -> Result<(), String> {
    let response = Request::post(&api_url("/api/inventory"))
        .header("Authorization", &bearer(token))
        .json(item)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(error_message(response, "Add item").await);
    }
    Ok(())
}

pub async fn update_item(token: &str, id: &str, item: &NewInventoryItem) -> Result<(), String> {
    let path = format!("/api/inventory/{}", urlencoding::encode(id));
    let response = Request::put(&api_url(&path))
        .header("Authorization", &bearer(token))
        .json(item)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(error_message(response, "Update item").await);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_is_encoded_without_empty_filters() {
        assert_eq!(inventory_path(&InventoryQuery::default()), "/api/inventory");

        let query = InventoryQuery {
            search: Some("op amp".into()),
            kind: Some("component".into()),
            page: Some(2),
            limit: Some(10),
            ..InventoryQuery::default()
        };
        let path = inventory_path(&query);
        assert!(path.starts_with("/api/inventory?"));
        assert!(path.contains("search=op+amp") || path.contains("search=op%20amp"));
        assert!(path.contains("type=component"));
        assert!(path.contains("page=2"));
        assert!(path.contains("limit=10"));
        assert!(!path.contains("model="));
    }
}
