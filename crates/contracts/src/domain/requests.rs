use serde::{Deserialize, Serialize};

use crate::system::roles::Role;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductRef {
    #[serde(rename = "_id", alias = "id", default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub model: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestedComponent {
    /// Populated product document; absent when the product was deleted.
    #[serde(default)]
    pub product_id: Option<ProductRef>,
    pub quantity: u32,
}

impl RequestedComponent {
    pub fn label(&self) -> String {
        match &self.product_id {
            Some(p) if !p.model.is_empty() => format!("{} ({})", p.name, p.model),
            Some(p) => p.name.clone(),
            None => "Unknown".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Requester {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

impl Requester {
    pub fn display(&self) -> String {
        self.name
            .clone()
            .or_else(|| self.username.clone())
            .unwrap_or_else(|| "Unknown".to_string())
    }

    pub fn role(&self) -> Option<Role> {
        self.role.as_deref().and_then(Role::parse)
    }
}

/// A component/equipment request as listed by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EquipmentRequest {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(default)]
    pub requested_by: Option<Requester>,
    #[serde(default)]
    pub student_name: Option<String>,
    #[serde(default)]
    pub student_id: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub course_code: Option<String>,
    #[serde(default)]
    pub course_name: Option<String>,
    #[serde(default)]
    pub instructor: Option<String>,
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub pickup_date: Option<String>,
    #[serde(default)]
    pub components: Vec<RequestedComponent>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub approved: bool,
    #[serde(default)]
    pub dispatched: bool,
}

impl EquipmentRequest {
    pub fn requester_name(&self) -> String {
        self.student_name
            .clone()
            .filter(|s| !s.trim().is_empty())
            .or_else(|| self.requested_by.as_ref().map(|r| r.display()))
            .unwrap_or_else(|| "Unknown".to_string())
    }

    pub fn course(&self) -> String {
        match (&self.course_code, &self.course_name) {
            (Some(code), Some(name)) => format!("{} - {}", code, name),
            (Some(code), None) => code.clone(),
            (None, Some(name)) => name.clone(),
            (None, None) => "-".to_string(),
        }
    }

    /// Submitted by a lecturer or (S)ARA rather than a student.
    pub fn is_from_staff(&self) -> bool {
        self.requested_by
            .as_ref()
            .and_then(|r| r.role())
            .map(|r| r.is_staff())
            .unwrap_or(false)
    }
}

/// Undispatched requests first, otherwise keeping backend order.
pub fn sort_for_dispatch(requests: &mut [EquipmentRequest]) {
    requests.sort_by_key(|r| r.dispatched);
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentLine {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub model: String,
    pub quantity: u32,
}

/// Body of `POST /api/requests`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEquipmentRequest {
    pub student_name: String,
    pub student_id: String,
    pub department: String,
    pub course_code: String,
    pub course_name: String,
    pub instructor: String,
    pub reason: String,
    pub pickup_date: String,
    pub components: Vec<ComponentLine>,
}

impl NewEquipmentRequest {
    pub fn validate(&self) -> Result<(), String> {
        if self.components.is_empty() {
            return Err("Please select at least one component.".into());
        }
        let required = [
            &self.student_name,
            &self.student_id,
            &self.department,
            &self.course_code,
            &self.course_name,
            &self.instructor,
            &self.pickup_date,
        ];
        if required.iter().any(|v| v.trim().is_empty()) {
            return Err("All fields are required.".into());
        }
        Ok(())
    }
}

/// Clamps a requested quantity to `1..=available` (at least 1 even when
/// nothing is in stock, the backend backorders the rest).
pub fn clamp_quantity(requested: i64, available: i64) -> u32 {
    let upper = available.max(1);
    requested.clamp(1, upper) as u32
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackorderedLine {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub requested: u32,
    #[serde(default)]
    pub available: u32,
}

/// Result of `POST /api/requests/{id}/dispatch`. On failure the backend
/// sends `{error, backordered}` with the same line shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DispatchResponse {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub dispatched: Vec<RequestedComponent>,
    #[serde(default)]
    pub backordered: Vec<BackorderedLine>,
    #[serde(default)]
    pub error: Option<String>,
}

impl DispatchResponse {
    /// Multi-line summary shown to the store manager after a dispatch attempt.
    pub fn summary(&self) -> String {
        let mut out = match &self.error {
            Some(error) => error.clone(),
            None => self.message.clone(),
        };
        if !self.dispatched.is_empty() {
            out.push_str("\n\nDispatched Items:");
            for line in &self.dispatched {
                out.push_str(&format!("\n- {} (x{})", line.label(), line.quantity));
            }
        }
        if !self.backordered.is_empty() {
            out.push_str(if self.error.is_some() {
                "\n\nUnavailable Items:"
            } else {
                "\n\nBackordered Items:"
            });
            for line in &self.backordered {
                out.push_str(&format!(
                    "\n- {} (Requested: {}, Available: {})",
                    line.name, line.requested, line.available
                ));
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(id: &str, dispatched: bool) -> EquipmentRequest {
        serde_json::from_value(serde_json::json!({
            "_id": id,
            "dispatched": dispatched,
            "components": [],
        }))
        .unwrap()
    }

    #[test]
    fn undispatched_requests_sort_first_and_keep_order() {
        let mut list = vec![
            request("a", true),
            request("b", false),
            request("c", true),
            request("d", false),
        ];
        sort_for_dispatch(&mut list);
        let ids: Vec<_> = list.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "d", "a", "c"]);
    }

    #[test]
    fn quantity_is_clamped_to_stock() {
        assert_eq!(clamp_quantity(0, 5), 1);
        assert_eq!(clamp_quantity(3, 5), 3);
        assert_eq!(clamp_quantity(9, 5), 5);
        assert_eq!(clamp_quantity(4, 0), 1);
    }

    #[test]
    fn staff_detection_uses_requester_role() {
        let mut r = request("x", false);
        assert!(!r.is_from_staff());
        r.requested_by = Some(Requester {
            name: None,
            username: Some("lect".into()),
            role: Some("Lecturer".into()),
        });
        assert!(r.is_from_staff());
        assert_eq!(r.requester_name(), "lect");
    }

    #[test]
    fn new_request_requires_components_then_fields() {
        let mut body = NewEquipmentRequest::default();
        assert_eq!(
            body.validate(),
            Err("Please select at least one component.".to_string())
        );
        body.components.push(ComponentLine {
            id: "c1".into(),
            name: "LED".into(),
            model: "L5".into(),
            quantity: 2,
        });
        assert_eq!(body.validate(), Err("All fields are required.".to_string()));
    }

    #[test]
    fn dispatch_summary_lists_backorders() {
        let resp: DispatchResponse = serde_json::from_value(serde_json::json!({
            "message": "Dispatched",
            "dispatched": [{"productId": {"_id": "p", "name": "LED", "model": ""}, "quantity": 3}],
            "backordered": [{"name": "Relay", "requested": 4, "available": 1}]
        }))
        .unwrap();
        assert_eq!(
            resp.summary(),
            "Dispatched\n\nDispatched Items:\n- LED (x3)\n\nBackordered Items:\n- Relay (Requested: 4, Available: 1)"
        );
    }
}
