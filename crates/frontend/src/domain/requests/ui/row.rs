use contracts::domain::requests::EquipmentRequest;

use crate::shared::date_utils::{format_date, format_datetime};

/// Display values of one request table row, each owned separately so every
/// cell of a row view can take its own.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestRow {
    pub requester: String,
    /// The submitting account, whatever name the form carried.
    pub account: String,
    pub student_id: String,
    pub requester_role: &'static str,
    pub course: String,
    pub instructor: String,
    pub lines: Vec<String>,
    pub created: String,
    pub pickup: String,
    pub approved: bool,
    pub dispatched: bool,
}

impl RequestRow {
    pub fn new(req: &EquipmentRequest) -> Self {
        Self {
            requester: req.requester_name(),
            account: req
                .requested_by
                .as_ref()
                .map(|r| r.display())
                .unwrap_or_else(|| "Unknown".to_string()),
            student_id: req.student_id.clone().unwrap_or_default(),
            requester_role: req
                .requested_by
                .as_ref()
                .and_then(|r| r.role())
                .map(|r| r.display_name())
                .unwrap_or("-"),
            course: req.course(),
            instructor: req.instructor.clone().unwrap_or_default(),
            lines: req
                .components
                .iter()
                .map(|c| format!("{} x{}", c.label(), c.quantity))
                .collect(),
            created: req
                .created_at
                .as_deref()
                .map(format_datetime)
                .unwrap_or_else(|| "-".to_string()),
            pickup: req
                .pickup_date
                .as_deref()
                .map(format_date)
                .unwrap_or_else(|| "-".to_string()),
            approved: req.approved,
            dispatched: req.dispatched,
        }
    }

    pub fn status(&self) -> (&'static str, &'static str) {
        if self.approved {
            ("Approved", "badge badge--success")
        } else {
            ("Pending", "badge badge--info")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(value: serde_json::Value) -> EquipmentRequest {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn row_carries_every_cell_of_a_staff_request() {
        let req = request(serde_json::json!({
            "_id": "r1",
            "requestedBy": {"name": "Abebe", "role": "Lecturer"},
            "components": [
                {"productId": {"_id": "p1", "name": "LED", "model": "L5"}, "quantity": 3},
                {"productId": null, "quantity": 1}
            ],
            "createdAt": "2024-03-15T14:02:26Z",
            "approved": true
        }));
        let row = RequestRow::new(&req);
        assert_eq!(row.requester, "Abebe");
        assert_eq!(row.account, "Abebe");
        assert_eq!(row.requester_role, "Lecturer");
        assert_eq!(row.lines, vec!["LED (L5) x3", "Unknown x1"]);
        assert_eq!(row.created, "15 Mar 2024 14:02");
        assert_eq!(row.status(), ("Approved", "badge badge--success"));
    }

    #[test]
    fn student_row_uses_form_fields_and_placeholders() {
        let req = request(serde_json::json!({
            "_id": "r2",
            "studentName": "Sara",
            "studentId": "ugr/1234/14",
            "courseCode": "ECE-301",
            "courseName": "Electronics",
            "instructor": "Dr. Kebede",
            "pickupDate": "2024-04-01"
        }));
        let row = RequestRow::new(&req);
        assert_eq!(row.requester, "Sara");
        assert_eq!(row.account, "Unknown");
        assert_eq!(row.student_id, "ugr/1234/14");
        assert_eq!(row.course, "ECE-301 - Electronics");
        assert_eq!(row.instructor, "Dr. Kebede");
        assert_eq!(row.pickup, "01 Apr 2024");
        assert_eq!(row.created, "-");
        assert_eq!(row.requester_role, "-");
        assert!(row.lines.is_empty());
        assert_eq!(row.status(), ("Pending", "badge badge--info"));
    }
}
