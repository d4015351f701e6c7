use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One selectable datastore backend type offered by the server.
///
/// Only `name` and `isEnabled` carry meaning for the loader; everything else the
/// server sends, `id` included, is kept as-is and written back out untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatastoreTypeRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    pub name: String,
    #[serde(rename = "isEnabled")]
    pub is_enabled: bool,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl DatastoreTypeRecord {
    pub fn new(name: impl Into<String>, is_enabled: bool) -> Self {
        Self {
            id: None,
            name: name.into(),
            is_enabled,
            extra: Map::new(),
        }
    }

    /// The identifier as display text: strings unquoted, anything else as JSON.
    pub fn id_label(&self) -> Option<String> {
        match self.id.as_ref()? {
            Value::String(id) => Some(id.clone()),
            other => Some(other.to_string()),
        }
    }

    pub fn state_label(&self) -> &'static str {
        if self.is_enabled { "enabled" } else { "disabled" }
    }
}
