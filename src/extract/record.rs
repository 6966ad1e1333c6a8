use super::classify::ClassificationOutcome;
use crate::model::{Record, SelectedObject};

pub const UNKNOWN_CATEGORY: &str = "Unknown Category";

/// Host category name, or the `Unknown Category` sentinel.
#[must_use]
pub fn category_name(obj: &dyn SelectedObject) -> &str {
    obj.category()
        .map_or(UNKNOWN_CATEGORY, |c| c.name.as_str())
}

/// Combines identity fields, the kind label and harvested attributes.
///
/// Returns the record and whether classification succeeded. Attributes
/// are only folded in for classified objects; a name collision with any
/// earlier field silently replaces its value.
#[must_use]
pub fn build_record(
    obj: &dyn SelectedObject,
    outcome: &ClassificationOutcome,
    attributes: Vec<(String, String)>,
) -> (Record, bool) {
    let mut record = Record::new();
    record.insert("Name", obj.name());
    record.insert("ID", obj.id().to_string());
    record.insert("Category", category_name(obj));

    if let Some(matched) = &outcome.matched {
        record.insert(matched.rule.field(), matched.label.as_str());
        for (name, value) in attributes {
            record.insert(name, value);
        }
    }

    (record, outcome.succeeded())
}
