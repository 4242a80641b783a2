use serde::{Deserialize, Serialize};

use super::requests::ProductRef;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MaintenanceStatus {
    Scheduled,
    Completed,
}

impl MaintenanceStatus {
    pub const ALL: [MaintenanceStatus; 2] =
        [MaintenanceStatus::Scheduled, MaintenanceStatus::Completed];

    pub fn as_str(&self) -> &'static str {
        match self {
            MaintenanceStatus::Scheduled => "Scheduled",
            MaintenanceStatus::Completed => "Completed",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == value)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaintenanceRecord {
    #[serde(rename = "_id", alias = "id", default)]
    pub id: String,
    #[serde(default)]
    pub item: Option<ProductRef>,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub last: String,
    #[serde(default)]
    pub next: String,
    /// Free text on the wire; known values map to [`MaintenanceStatus`].
    #[serde(default)]
    pub actions: String,
}

impl MaintenanceRecord {
    pub fn status(&self) -> Option<MaintenanceStatus> {
        MaintenanceStatus::parse(&self.actions)
    }

    /// Case-insensitive match on item name or model plus an optional status filter.
    pub fn matches(&self, search: &str, status: Option<MaintenanceStatus>) -> bool {
        let needle = search.trim().to_lowercase();
        let text_ok = needle.is_empty()
            || self
                .item
                .as_ref()
                .map(|i| {
                    i.name.to_lowercase().contains(&needle)
                        || i.model.to_lowercase().contains(&needle)
                })
                .unwrap_or(false);
        let status_ok = status.map(|s| self.status() == Some(s)).unwrap_or(true);
        text_ok && status_ok
    }
}

/// Body of `POST /api/maintenance`; `item` is the inventory id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewMaintenanceRecord {
    pub item: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub last: String,
    pub next: String,
    pub actions: MaintenanceStatus,
}

impl NewMaintenanceRecord {
    pub fn validate(&self) -> Result<(), String> {
        if [&self.item, &self.kind, &self.last, &self.next]
            .iter()
            .any(|v| v.trim().is_empty())
        {
            return Err("All fields are required.".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, model: &str, actions: &str) -> MaintenanceRecord {
        MaintenanceRecord {
            id: String::new(),
            item: Some(ProductRef {
                id: "i".into(),
                name: name.into(),
                model: model.into(),
            }),
            kind: "Calibration".into(),
            last: "2025-05-01".into(),
            next: "2025-11-01".into(),
            actions: actions.into(),
        }
    }

    #[test]
    fn filter_by_text_and_status() {
        let r = record("Signal Generator", "AFG-2225", "Completed");
        assert!(r.matches("", None));
        assert!(r.matches("afg", None));
        assert!(r.matches("signal", Some(MaintenanceStatus::Completed)));
        assert!(!r.matches("signal", Some(MaintenanceStatus::Scheduled)));
        assert!(!r.matches("multimeter", None));
    }

    #[test]
    fn record_without_item_only_matches_empty_search() {
        let mut r = record("x", "y", "Scheduled");
        r.item = None;
        assert!(r.matches("  ", Some(MaintenanceStatus::Scheduled)));
        assert!(!r.matches("x", None));
    }

    #[test]
    fn new_record_serialises_status_and_type() {
        let body = NewMaintenanceRecord {
            item: "inv1".into(),
            kind: "Repair".into(),
            last: "2025-01-01".into(),
            next: "2025-02-01".into(),
            actions: MaintenanceStatus::Scheduled,
        };
        assert_eq!(body.validate(), Ok(()));
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["type"], "Repair");
        assert_eq!(json["actions"], "Scheduled");
    }
}
