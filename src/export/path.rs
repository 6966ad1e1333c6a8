use crate::model::Record;
use std::path::PathBuf;

const FORBIDDEN: &[char] = &['<', '>', ':', '"', '/', '\\', '|', '?', '*'];
const FAIL_PREFIX: &str = "Fail(X)_";

/// Replaces every character that is not allowed in file names with `_`.
#[must_use]
pub fn sanitize_category(category: &str) -> String {
    category
        .chars()
        .map(|c| if FORBIDDEN.contains(&c) { '_' } else { c })
        .collect()
}

/// `["Fail(X)_"] sanitizedCategory "__" id ".json"`
#[must_use]
pub fn file_name(record: &Record, has_kind: bool) -> String {
    let category = sanitize_category(record.get("Category").unwrap_or_default());
    let id = record.get("ID").unwrap_or_default();
    let prefix = if has_kind { "" } else { FAIL_PREFIX };
    format!("{prefix}{category}__{id}.json")
}

/// Maps records to files under a fixed output root.
///
/// Two records with the same category and `ID` resolve to the same path;
/// the later write replaces the earlier file.
///
/// Only the category is sanitized. An attribute named `ID` replaces the
/// identifier in the record, and its value goes into the file name as is,
/// so a value containing separators (`../x`) can point outside the root.
#[derive(Debug, Clone)]
pub struct PathResolver {
    root: PathBuf,
}

impl PathResolver {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[must_use]
    pub fn resolve(&self, record: &Record, has_kind: bool) -> PathBuf {
        self.root.join(file_name(record, has_kind))
    }
}
