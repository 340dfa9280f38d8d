//! Database rows as returned by `POST databases/{id}/query`.

use super::properties::{parse_property_map, PropertyMap};
use crate::types::PageId;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// One row of the posts database.
///
/// `properties` is `None` when the row carries no properties object at all;
/// such rows are not posts and the assembler skips them.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RowRecord {
    pub id: PageId,
    #[serde(default, deserialize_with = "lenient_string")]
    pub created_time: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub last_edited_time: Option<String>,
    #[serde(default, deserialize_with = "lenient_properties")]
    pub properties: Option<PropertyMap>,
}

impl RowRecord {
    /// Parses one element of a query `results` array; `None` if it has no usable `id`.
    pub fn from_value(value: Value) -> Option<Self> {
        match serde_json::from_value(value) {
            Ok(row) => Some(row),
            Err(e) => {
                log::debug!("Dropping database row without a usable id: {}", e);
                None
            }
        }
    }
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => Some(s),
        _ => None,
    })
}

fn lenient_properties<'de, D>(deserializer: D) -> Result<Option<PropertyMap>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Object(map)) => Some(parse_property_map(map)),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_row_with_properties() {
        let row = RowRecord::from_value(json!({
            "object": "page",
            "id": "550e8400-e29b-41d4-a716-446655440000",
            "created_time": "2023-01-01T00:00:00Z",
            "last_edited_time": "2023-01-02T00:00:00Z",
            "properties": {
                "published": {"type": "checkbox", "checkbox": true}
            }
        }))
        .unwrap();

        assert_eq!(row.id.as_str(), "550e8400e29b41d4a716446655440000");
        assert_eq!(row.created_time.as_deref(), Some("2023-01-01T00:00:00Z"));
        assert_eq!(row.properties.map(|p| p.len()), Some(1));
    }

    #[test]
    fn missing_or_non_object_properties_become_none() {
        let row = RowRecord::from_value(json!({"id": "row-1"})).unwrap();
        assert!(row.properties.is_none());

        let row = RowRecord::from_value(json!({"id": "row-2", "properties": []})).unwrap();
        assert!(row.properties.is_none());
    }

    #[test]
    fn mistyped_timestamps_become_none() {
        let row =
            RowRecord::from_value(json!({"id": "row-3", "created_time": 1700000000})).unwrap();
        assert!(row.created_time.is_none());
    }

    #[test]
    fn row_without_id_is_dropped() {
        assert!(RowRecord::from_value(json!({"properties": {}})).is_none());
    }
}
