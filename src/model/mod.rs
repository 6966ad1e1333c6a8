pub mod object;
pub mod record;

pub use object::{
    Attribute, AttributeSource, Category, CategoryId, ObjectId, SelectedObject, StructuralKind,
};
pub use record::Record;
