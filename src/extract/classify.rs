use crate::model::{SelectedObject, StructuralKind};

const RAILING_LABEL: &str = "Handrail/Railing";

/// Recognized kinds, in the priority order they are tested.
const RULES: &[KindRule] = &[
    KindRule::FamilyInstance,
    KindRule::Wall,
    KindRule::Floor,
    KindRule::Ceiling,
    KindRule::Stairs,
    KindRule::Railing,
];

/// Where the harvested attributes of a classified object come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeOrigin {
    /// The object's own attribute list.
    Own,
    /// The attribute list of the object's defining type.
    DefiningType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KindRule {
    FamilyInstance,
    Wall,
    Floor,
    Ceiling,
    Stairs,
    Railing,
}

impl KindRule {
    /// Record field that carries the kind label.
    #[must_use]
    pub fn field(self) -> &'static str {
        match self {
            KindRule::FamilyInstance => "Family",
            KindRule::Wall => "Wall Type",
            KindRule::Floor => "Floor Type",
            KindRule::Ceiling => "Ceiling Type",
            KindRule::Stairs => "Stairs Type",
            KindRule::Railing => "Type",
        }
    }

    #[must_use]
    pub fn origin(self) -> AttributeOrigin {
        match self {
            KindRule::FamilyInstance => AttributeOrigin::DefiningType,
            _ => AttributeOrigin::Own,
        }
    }

    /// Label value when `obj` satisfies this rule.
    fn label_for(self, obj: &dyn SelectedObject) -> Option<String> {
        match (self, obj.kind()) {
            (KindRule::FamilyInstance, StructuralKind::FamilyInstance { family_name }) => {
                Some(family_name.clone())
            }
            (KindRule::Wall, kind @ StructuralKind::Wall)
            | (KindRule::Floor, kind @ StructuralKind::Floor)
            | (KindRule::Ceiling, kind @ StructuralKind::Ceiling)
            | (KindRule::Stairs, kind @ StructuralKind::Stairs) => {
                Some(kind.class_name().to_string())
            }
            (KindRule::Railing, _) => obj
                .category()
                .filter(|c| c.id.is_railing())
                .map(|_| RAILING_LABEL.to_string()),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchedKind {
    pub rule: KindRule,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ClassificationOutcome {
    pub matched: Option<MatchedKind>,
}

impl ClassificationOutcome {
    #[must_use]
    pub fn succeeded(&self) -> bool {
        self.matched.is_some()
    }
}

/// Tests `obj` against the rule table; the first matching rule wins.
#[must_use]
pub fn classify(obj: &dyn SelectedObject) -> ClassificationOutcome {
    let matched = RULES.iter().find_map(|&rule| {
        rule.label_for(obj)
            .map(|label| MatchedKind { rule, label })
    });
    ClassificationOutcome { matched }
}
