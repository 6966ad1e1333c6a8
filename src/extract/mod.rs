pub mod attributes;
pub mod classify;
pub mod extractor;
pub mod record;

pub use attributes::read_attributes;
pub use classify::{classify, AttributeOrigin, ClassificationOutcome, KindRule, MatchedKind};
pub use extractor::{Extractor, ObjectFailure, ObjectOutcome, RunSummary};
pub use record::{build_record, category_name, UNKNOWN_CATEGORY};
