//! Export configuration.
//!
//! The output root and the batch failure policy are injected rather than
//! embedded. They come from an optional TOML file and can be overridden
//! from the command line.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

const DEFAULT_OUTPUT_DIR: &str = "exports";

/// What the orchestrator does when one object fails to export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicy {
    /// Stop at the first failure; remaining objects are not processed.
    #[default]
    Abort,
    /// Record the failure and move on to the next object.
    Continue,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Directory that receives one JSON file per object.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    #[serde(default)]
    pub on_error: FailurePolicy,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_DIR)
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            on_error: FailurePolicy::default(),
        }
    }
}

impl ExportConfig {
    #[must_use]
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_policy(mut self, on_error: FailurePolicy) -> Self {
        self.on_error = on_error;
        self
    }

    /// Load config from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content).map_err(|message| ConfigError::Parse {
            path: path.to_path_buf(),
            message,
        })
    }

    fn from_toml(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_file_uses_defaults() {
        let config = ExportConfig::from_toml("").unwrap();
        assert_eq!(config, ExportConfig::default());
        assert_eq!(config.output_dir, PathBuf::from("exports"));
        assert_eq!(config.on_error, FailurePolicy::Abort);
    }

    #[test]
    fn parses_both_keys() {
        let config = ExportConfig::from_toml(
            r#"
output_dir = "/data/revit"
on_error = "continue"
"#,
        )
        .unwrap();
        assert_eq!(config.output_dir, PathBuf::from("/data/revit"));
        assert_eq!(config.on_error, FailurePolicy::Continue);
    }

    #[test]
    fn rejects_unknown_policy() {
        assert!(ExportConfig::from_toml("on_error = \"retry\"").is_err());
    }

    #[test]
    fn load_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = ExportConfig::load(dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::FileRead { .. }));
    }
}
