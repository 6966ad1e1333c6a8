use serde::ser::{Serialize, SerializeMap, Serializer};

/// Ordered string map built for one object.
///
/// Keys keep the position of their first insertion; inserting an existing
/// key replaces its value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    fields: Vec<(String, String)>,
}

impl Record {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = value,
            None => self.fields.push((key, value)),
        }
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    #[must_use]
    pub fn keys(&self) -> Vec<&str> {
        self.fields.iter().map(|(k, _)| k.as_str()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// `Key: Value` lines, one per field.
    #[must_use]
    pub fn display_lines(&self) -> String {
        self.iter().fold(String::new(), |mut out, (k, v)| {
            out.push_str(k);
            out.push_str(": ");
            out.push_str(v);
            out.push('\n');
            out
        })
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (k, v) in &self.fields {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn overwrite_keeps_first_position() {
        let mut record = Record::new();
        record.insert("Name", "Basic Wall");
        record.insert("ID", "42");
        record.insert("Name", "Renamed");
        assert_eq!(record.keys(), vec!["Name", "ID"]);
        assert_eq!(record.get("Name"), Some("Renamed"));
        assert_eq!(record.len(), 2);
    }

    #[test]
    fn display_lines_follow_insertion_order() {
        let mut record = Record::new();
        record.insert("Name", "Door");
        record.insert("Category", "Doors");
        assert_eq!(record.display_lines(), "Name: Door\nCategory: Doors\n");
    }
}
