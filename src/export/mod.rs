pub mod json;
pub mod path;
pub mod report;
pub mod writer;

pub use crate::error::ExportError;
pub use json::to_json;
pub use path::{file_name, sanitize_category, PathResolver};
pub use report::write_report;
pub use writer::write_text;
