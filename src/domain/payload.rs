use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

use super::catalog::SchemaOption;

/// One `{field_value: field_label}` pair in the submitted schema list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaEntry {
    pub value: String,
    pub label: String,
}

impl From<&SchemaOption> for SchemaEntry {
    fn from(option: &SchemaOption) -> Self {
        Self {
            value: option.value.to_string(),
            label: option.label.to_string(),
        }
    }
}

impl Serialize for SchemaEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.value, &self.label)?;
        map.end()
    }
}

/// Body of the outbound segment request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SegmentPayload {
    pub segment_name: String,
    pub schema: Vec<SchemaEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog;

    #[test]
    fn test_entry_serializes_as_single_key_object() {
        let entry = SchemaEntry::from(catalog::find("age").unwrap());
        assert_eq!(serde_json::to_string(&entry).unwrap(), r#"{"age":"Age"}"#);
    }

    #[test]
    fn test_payload_wire_shape() {
        let payload = SegmentPayload {
            segment_name: "Returning buyers".to_string(),
            schema: vec![
                SchemaEntry::from(catalog::find("state").unwrap()),
                SchemaEntry::from(catalog::find("last_name").unwrap()),
            ],
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "segment_name": "Returning buyers",
                "schema": [{"state": "State"}, {"last_name": "Last Name"}]
            })
        );
    }
}
