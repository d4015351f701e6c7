use serde::Deserialize;
use serde_json::Value;

use crate::error::StoretypesError;
use crate::model::{DatastoreTypeRecord, ReadResponse};

/// Maps a remote `result` object onto records.
///
/// The property names mirror the console store's reader settings.
#[derive(Debug, Clone)]
pub struct JsonReader {
    pub root_property: String,
    pub success_property: String,
    pub message_property: String,
}

impl Default for JsonReader {
    fn default() -> Self {
        Self {
            root_property: "data".to_string(),
            success_property: "success".to_string(),
            message_property: "message".to_string(),
        }
    }
}

impl JsonReader {
    /// Check the response shape and parse every record.
    ///
    /// Either all records parse or the whole response is rejected.
    pub fn read(&self, result: &Value) -> Result<ReadResponse, StoretypesError> {
        let object = result
            .as_object()
            .ok_or_else(|| StoretypesError::malformed("result is not an object"))?;

        let success = object
            .get(&self.success_property)
            .ok_or_else(|| {
                StoretypesError::malformed(format!("missing '{}'", self.success_property))
            })?
            .as_bool()
            .ok_or_else(|| {
                StoretypesError::malformed(format!("'{}' is not a boolean", self.success_property))
            })?;

        let message = object
            .get(&self.message_property)
            .and_then(Value::as_str)
            .map(str::to_string);

        if !success {
            return Ok(ReadResponse {
                success,
                data: Vec::new(),
                message,
            });
        }

        let rows = object
            .get(&self.root_property)
            .ok_or_else(|| StoretypesError::malformed(format!("missing '{}'", self.root_property)))?
            .as_array()
            .ok_or_else(|| {
                StoretypesError::malformed(format!("'{}' is not an array", self.root_property))
            })?;

        let data = rows
            .iter()
            .enumerate()
            .map(|(index, row)| {
                DatastoreTypeRecord::deserialize(row).map_err(|e| {
                    StoretypesError::malformed(format!("record {index}: {e}"))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(ReadResponse {
            success,
            data,
            message,
        })
    }
}
