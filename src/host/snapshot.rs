use crate::error::HostError;
use crate::model::{
    Attribute, AttributeSource, Category, CategoryId, ObjectId, SelectedObject, StructuralKind,
};
use serde::Deserialize;
use std::path::Path;

/// A host selection captured as JSON.
///
/// ```json
/// { "objects": [ { "name": "Basic Wall", "id": 42,
///     "category": { "id": -2000011, "name": "Walls" },
///     "kind": { "type": "wall" },
///     "attributes": [ { "name": "Length", "display": "5000", "raw": "5.0" } ] } ] }
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Selection {
    #[serde(default)]
    pub objects: Vec<ObjectSnapshot>,
}

impl Selection {
    /// Reads a selection snapshot from disk.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, HostError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| HostError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| HostError::InvalidSnapshot {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Objects in selection order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn SelectedObject> {
        self.objects.iter().map(|o| o as &dyn SelectedObject)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

/// Defining type of a composite instance; only its attributes are read.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TypeSnapshot {
    #[serde(default)]
    pub attributes: Vec<Attribute>,
}

impl TypeSnapshot {
    #[must_use]
    pub fn with_attribute(mut self, attribute: Attribute) -> Self {
        self.attributes.push(attribute);
        self
    }
}

impl AttributeSource for TypeSnapshot {
    fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ObjectSnapshot {
    pub name: String,
    pub id: ObjectId,
    #[serde(default)]
    pub category: Option<Category>,
    pub kind: StructuralKind,
    #[serde(default)]
    pub attributes: Vec<Attribute>,
    #[serde(default)]
    pub defining_type: Option<TypeSnapshot>,
}

impl ObjectSnapshot {
    pub fn new(name: impl Into<String>, id: i64, kind: StructuralKind) -> Self {
        Self {
            name: name.into(),
            id: ObjectId(id),
            category: None,
            kind,
            attributes: Vec::new(),
            defining_type: None,
        }
    }

    #[must_use]
    pub fn with_category(mut self, id: i64, name: impl Into<String>) -> Self {
        self.category = Some(Category {
            id: CategoryId(id),
            name: name.into(),
        });
        self
    }

    #[must_use]
    pub fn with_attribute(mut self, attribute: Attribute) -> Self {
        self.attributes.push(attribute);
        self
    }

    #[must_use]
    pub fn with_defining_type(mut self, defining_type: TypeSnapshot) -> Self {
        self.defining_type = Some(defining_type);
        self
    }
}

impl AttributeSource for ObjectSnapshot {
    fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }
}

impl SelectedObject for ObjectSnapshot {
    fn name(&self) -> &str {
        &self.name
    }

    fn id(&self) -> ObjectId {
        self.id
    }

    fn category(&self) -> Option<&Category> {
        self.category.as_ref()
    }

    fn kind(&self) -> &StructuralKind {
        &self.kind
    }

    fn defining_type(&self) -> Option<&dyn AttributeSource> {
        self.defining_type
            .as_ref()
            .map(|t| t as &dyn AttributeSource)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const SNAPSHOT: &str = r#"{
  "objects": [
    {
      "name": "Basic Wall",
      "id": 42,
      "category": { "id": -2000011, "name": "Walls" },
      "kind": { "type": "wall" },
      "attributes": [
        { "name": "Length", "display": "5000", "raw": "5.0" },
        { "name": "Comments" }
      ]
    },
    {
      "name": "Desk",
      "id": 43,
      "kind": { "type": "family_instance", "family_name": "Office Desk" },
      "defining_type": { "attributes": [ { "name": "Height", "display": "10" } ] }
    }
  ]
}"#;

    #[test]
    fn parses_objects_in_order() {
        let selection: Selection = serde_json::from_str(SNAPSHOT).unwrap();
        assert_eq!(selection.len(), 2);

        let ids: Vec<ObjectId> = selection.iter().map(|o| o.id()).collect();
        assert_eq!(ids, vec![ObjectId(42), ObjectId(43)]);

        let wall = &selection.objects[0];
        assert_eq!(wall.category.as_ref().unwrap().name, "Walls");
        assert_eq!(wall.attributes[1], Attribute::new("Comments"));

        let desk = &selection.objects[1];
        assert!(desk.category.is_none());
        let type_attrs = desk.defining_type().unwrap().attributes();
        assert_eq!(type_attrs[0].display.as_deref(), Some("10"));
    }

    #[test]
    fn load_reports_invalid_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("selection.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = Selection::load(&path).unwrap_err();
        assert!(matches!(err, HostError::InvalidSnapshot { .. }));
    }

    #[test]
    fn load_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Selection::load(dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, HostError::FileRead { .. }));
    }
}
