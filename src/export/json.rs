use crate::error::ExportError;
use crate::model::Record;

/// Renders a record as indented JSON, fields in insertion order.
pub fn to_json(record: &Record) -> Result<String, ExportError> {
    Ok(serde_json::to_string_pretty(record)?)
}
