use serde::{Deserialize, Serialize};

/// Where an item is kept. Older records store a free-text location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemLocation {
    Shelf {
        #[serde(default)]
        building: String,
        #[serde(default)]
        room: String,
        #[serde(default)]
        shelf: String,
    },
    Text(String),
}

impl Default for ItemLocation {
    fn default() -> Self {
        ItemLocation::Text(String::new())
    }
}

impl ItemLocation {
    /// `building / room / shelf`, skipping blank parts.
    pub fn display(&self) -> String {
        match self {
            ItemLocation::Shelf {
                building,
                room,
                shelf,
            } => [building, room, shelf]
                .iter()
                .filter(|s| !s.trim().is_empty())
                .map(|s| s.as_str())
                .collect::<Vec<_>>()
                .join(" / "),
            ItemLocation::Text(text) => text.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub model: String,
    #[serde(default)]
    pub total: i64,
    #[serde(default)]
    pub available: i64,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub condition: String,
    #[serde(default)]
    pub location: ItemLocation,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_maintenance: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl InventoryItem {
    pub fn is_available(&self) -> bool {
        self.available > 0
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InventoryPage {
    #[serde(default)]
    pub items: Vec<InventoryItem>,
    #[serde(default)]
    pub total: u64,
}

/// Filters understood by `GET /api/inventory`. `None` fields are omitted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InventoryQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub place: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

/// Body of `POST /api/inventory` and `PUT /api/inventory/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewInventoryItem {
    pub name: String,
    pub model: String,
    pub total: i64,
    pub available: i64,
    #[serde(rename = "type")]
    pub kind: String,
    pub condition: String,
    pub location: ItemLocation,
    pub description: String,
    pub last_maintenance: String,
    pub image_url: String,
}

impl Default for NewInventoryItem {
    fn default() -> Self {
        Self {
            name: String::new(),
            model: String::new(),
            total: 0,
            available: 0,
            kind: String::new(),
            condition: String::new(),
            location: ItemLocation::Shelf {
                building: String::new(),
                room: String::new(),
                shelf: String::new(),
            },
            description: String::new(),
            last_maintenance: String::new(),
            image_url: String::new(),
        }
    }
}

impl NewInventoryItem {
    /// Field-level problems, in form order. Empty means valid.
    pub fn field_errors(&self) -> Vec<(&'static str, &'static str)> {
        let mut errors = Vec::new();
        if self.name.trim().is_empty() {
            errors.push(("name", "Name is required."));
        }
        if self.model.trim().is_empty() {
            errors.push(("model", "Model is required."));
        }
        if self.total < 0 {
            errors.push(("total", "Total must be a non-negative number."));
        }
        if self.available < 0 {
            errors.push(("available", "Available must be a non-negative number."));
        }
        if self.kind.trim().is_empty() {
            errors.push(("type", "Type is required."));
        }
        if self.condition.trim().is_empty() {
            errors.push(("condition", "Condition is required."));
        }
        errors
    }

    pub fn validate(&self) -> Result<(), String> {
        match self.field_errors().first() {
            Some((_, message)) => Err((*message).to_string()),
            None => Ok(()),
        }
    }
}

impl From<&InventoryItem> for NewInventoryItem {
    fn from(item: &InventoryItem) -> Self {
        Self {
            name: item.name.clone(),
            model: item.model.clone(),
            total: item.total,
            available: item.available,
            kind: item.kind.clone(),
            condition: item.condition.clone(),
            location: item.location.clone(),
            description: item.description.clone(),
            last_maintenance: item.last_maintenance.clone().unwrap_or_default(),
            image_url: item.image_url.clone().unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn location_accepts_object_or_string() {
        let shelf: ItemLocation =
            serde_json::from_str(r#"{"building":"B9","room":"","shelf":"S2"}"#).unwrap();
        assert_eq!(shelf.display(), "B9 / S2");

        let text: ItemLocation = serde_json::from_str(r#""Lab 1""#).unwrap();
        assert_eq!(text.display(), "Lab 1");
    }

    #[test]
    fn item_reads_backend_shape() {
        let json = r#"{
            "_id": "a1", "name": "Oscilloscope", "model": "DS1054Z",
            "total": 4, "available": 0, "type": "equipment",
            "condition": "Good", "location": "Lab 2", "description": ""
        }"#;
        let item: InventoryItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.kind, "equipment");
        assert!(!item.is_available());
        assert_eq!(item.last_maintenance, None);
    }

    #[test]
    fn query_omits_unset_filters() {
        let query = InventoryQuery {
            search: Some("led".into()),
            kind: Some("component".into()),
            ..Default::default()
        };
        let json = serde_json::to_value(&query).unwrap();
        assert_eq!(json, serde_json::json!({"search": "led", "type": "component"}));
    }

    #[test]
    fn validation_reports_fields_in_form_order() {
        let mut form = NewInventoryItem::default();
        form.total = -1;
        let fields: Vec<_> = form.field_errors().into_iter().map(|(f, _)| f).collect();
        assert_eq!(fields, vec!["name", "model", "total", "type", "condition"]);
        assert_eq!(form.validate(), Err("Name is required.".to_string()));

        form.name = "Resistor".into();
        form.model = "R-100".into();
        form.total = 10;
        form.available = 10;
        form.kind = "component".into();
        form.condition = "New".into();
        assert_eq!(form.validate(), Ok(()));
    }
}
