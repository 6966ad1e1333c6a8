use crate::model::Attribute;

/// Harvests `(name, value)` pairs in source order.
///
/// The formatted display string is preferred, then the raw string. An
/// attribute with neither is dropped rather than kept with an empty value.
#[must_use]
pub fn read_attributes(attributes: &[Attribute]) -> Vec<(String, String)> {
    attributes
        .iter()
        .filter_map(|attr| match attribute_value(attr) {
            Some(value) => Some((attr.name.clone(), value.to_string())),
            None => {
                tracing::debug!(attribute = %attr.name, "dropping attribute without a value");
                None
            }
        })
        .collect()
}

fn attribute_value(attr: &Attribute) -> Option<&str> {
    non_empty(attr.display.as_deref()).or_else(|| non_empty(attr.raw.as_deref()))
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
