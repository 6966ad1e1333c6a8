use serde::Deserialize;
use std::fmt;

/// Host element id. Its `Display` is the canonical form written to `ID`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(transparent)]
pub struct ObjectId(pub i64);

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Host category id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(pub i64);

impl CategoryId {
    /// Built-in category of free-standing railings.
    pub const RAILINGS: Self = Self(-2_000_126);
    /// Built-in category of railings hosted on stairs.
    pub const STAIRS_RAILING: Self = Self(-2_000_127);

    #[must_use]
    pub fn is_railing(self) -> bool {
        self == Self::RAILINGS || self == Self::STAIRS_RAILING
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
}

/// Structural kind of a selected object, as reported by the host.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StructuralKind {
    /// Placed instance of a loadable family; attributes live on its type.
    FamilyInstance { family_name: String },
    Wall,
    Floor,
    Ceiling,
    Stairs,
    /// Anything else; `class_name` is the host's own type name.
    Other {
        #[serde(default)]
        class_name: String,
    },
}

impl StructuralKind {
    /// Host type name of the object.
    #[must_use]
    pub fn class_name(&self) -> &str {
        match self {
            StructuralKind::FamilyInstance { .. } => "FamilyInstance",
            StructuralKind::Wall => "Wall",
            StructuralKind::Floor => "Floor",
            StructuralKind::Ceiling => "Ceiling",
            StructuralKind::Stairs => "Stairs",
            StructuralKind::Other { class_name } => class_name,
        }
    }
}

/// A named descriptive value with a formatted and/or raw string form.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Attribute {
    pub name: String,
    #[serde(default)]
    pub display: Option<String>,
    #[serde(default)]
    pub raw: Option<String>,
}

impl Attribute {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            display: None,
            raw: None,
        }
    }

    #[must_use]
    pub fn with_display(mut self, value: impl Into<String>) -> Self {
        self.display = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_raw(mut self, value: impl Into<String>) -> Self {
        self.raw = Some(value.into());
        self
    }
}

/// Anything that carries an ordered attribute list, in host enumeration order.
pub trait AttributeSource {
    fn attributes(&self) -> &[Attribute];
}

/// Read-only view of one object chosen in the host application.
///
/// The concrete binding lives with the host; the extraction pipeline
/// only goes through these accessors and never mutates the object.
pub trait SelectedObject: AttributeSource {
    fn name(&self) -> &str;

    fn id(&self) -> ObjectId;

    fn category(&self) -> Option<&Category>;

    fn kind(&self) -> &StructuralKind;

    /// Type definition backing a composite instance, if the host can resolve one.
    fn defining_type(&self) -> Option<&dyn AttributeSource>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn object_id_renders_as_plain_integer() {
        assert_eq!(ObjectId(42).to_string(), "42");
        assert_eq!(ObjectId(-7).to_string(), "-7");
    }

    #[test]
    fn only_the_two_railing_categories_are_railings() {
        assert!(CategoryId::RAILINGS.is_railing());
        assert!(CategoryId::STAIRS_RAILING.is_railing());
        assert!(!CategoryId(-2_000_011).is_railing());
    }

    #[test]
    fn class_name_covers_every_kind() {
        assert_eq!(StructuralKind::Wall.class_name(), "Wall");
        assert_eq!(StructuralKind::Stairs.class_name(), "Stairs");
        assert_eq!(
            StructuralKind::FamilyInstance {
                family_name: "Desk".to_string()
            }
            .class_name(),
            "FamilyInstance"
        );
        assert_eq!(
            StructuralKind::Other {
                class_name: "Grid".to_string()
            }
            .class_name(),
            "Grid"
        );
    }

    #[test]
    fn kind_deserializes_from_tagged_json() {
        let kind: StructuralKind =
            serde_json::from_str(r#"{"type":"family_instance","family_name":"Desk"}"#).unwrap();
        assert_eq!(
            kind,
            StructuralKind::FamilyInstance {
                family_name: "Desk".to_string()
            }
        );
        let kind: StructuralKind = serde_json::from_str(r#"{"type":"other"}"#).unwrap();
        assert_eq!(
            kind,
            StructuralKind::Other {
                class_name: String::new()
            }
        );
    }
}
