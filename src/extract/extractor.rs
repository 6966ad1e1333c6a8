use std::path::PathBuf;
use std::time::{Duration, Instant};

use super::attributes::read_attributes;
use super::classify::{classify, AttributeOrigin};
use super::record::{build_record, category_name};
use crate::config::{ExportConfig, FailurePolicy};
use crate::error::ExportError;
use crate::export::{to_json, write_text, PathResolver};
use crate::host::{LogNotifier, Notifier};
use crate::model::{ObjectId, SelectedObject};

/// Result of exporting one object.
///
/// `category` is the host category, even when an attribute named
/// `Category` replaced it in the written record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectOutcome {
    pub id: ObjectId,
    pub category: String,
    pub has_kind: bool,
    pub path: PathBuf,
}

/// An object whose export failed under [`FailurePolicy::Continue`].
#[derive(Debug)]
pub struct ObjectFailure {
    pub id: ObjectId,
    pub category: String,
    pub error: ExportError,
}

#[derive(Debug, Default)]
pub struct RunSummary {
    pub elapsed: Duration,
    pub written: Vec<ObjectOutcome>,
    pub failures: Vec<ObjectFailure>,
}

impl RunSummary {
    #[must_use]
    pub fn completion_message(&self) -> String {
        format!("Execution time: {} seconds", self.elapsed.as_secs_f64())
    }

    #[must_use]
    pub fn unclassified(&self) -> usize {
        self.written.iter().filter(|o| !o.has_kind).count()
    }
}

/// Drives the per-object pipeline over a host selection.
pub struct Extractor {
    resolver: PathResolver,
    policy: FailurePolicy,
    notifier: Box<dyn Notifier>,
}

impl Extractor {
    #[must_use]
    pub fn new(config: ExportConfig) -> Self {
        Self {
            resolver: PathResolver::new(config.output_dir),
            policy: config.on_error,
            notifier: Box::new(LogNotifier),
        }
    }

    #[must_use]
    pub fn with_notifier(mut self, notifier: Box<dyn Notifier>) -> Self {
        self.notifier = notifier;
        self
    }

    /// Classify, extract, serialize and write a single object.
    pub fn process(&self, obj: &dyn SelectedObject) -> Result<ObjectOutcome, ExportError> {
        let outcome = classify(obj);

        let attributes = match outcome.matched.as_ref().map(|m| m.rule.origin()) {
            Some(AttributeOrigin::Own) => read_attributes(obj.attributes()),
            Some(AttributeOrigin::DefiningType) => obj
                .defining_type()
                .map(|t| read_attributes(t.attributes()))
                .unwrap_or_default(),
            None => {
                tracing::warn!(
                    id = %obj.id(),
                    name = obj.name(),
                    class = obj.kind().class_name(),
                    "object kind not recognized"
                );
                Vec::new()
            }
        };

        let (record, has_kind) = build_record(obj, &outcome, attributes);
        tracing::debug!(id = %obj.id(), "record:\n{}", record.display_lines());

        let json = to_json(&record)?;
        let path = self.resolver.resolve(&record, has_kind);
        write_text(&path, &json)?;
        tracing::info!(id = %obj.id(), path = %path.display(), "wrote object record");

        Ok(ObjectOutcome {
            id: obj.id(),
            category: category_name(obj).to_string(),
            has_kind,
            path,
        })
    }

    /// Processes `selection` strictly in order and reports the elapsed time.
    ///
    /// Under [`FailurePolicy::Abort`] the first failure is returned and the
    /// remaining objects are skipped, with no completion notice.
    pub fn run<'a, I>(&self, selection: I) -> Result<RunSummary, ExportError>
    where
        I: IntoIterator<Item = &'a dyn SelectedObject>,
    {
        let start = Instant::now();
        let mut summary = RunSummary::default();

        for obj in selection {
            match self.process(obj) {
                Ok(outcome) => summary.written.push(outcome),
                Err(error) => match self.policy {
                    FailurePolicy::Abort => return Err(error),
                    FailurePolicy::Continue => {
                        tracing::warn!(id = %obj.id(), %error, "object export failed, continuing");
                        summary.failures.push(ObjectFailure {
                            id: obj.id(),
                            category: category_name(obj).to_string(),
                            error,
                        });
                    }
                },
            }
        }

        summary.elapsed = start.elapsed();
        tracing::info!(
            written = summary.written.len(),
            unclassified = summary.unclassified(),
            failed = summary.failures.len(),
            "batch complete"
        );
        self.notifier.notify(&summary.completion_message());
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::{ObjectSnapshot, TypeSnapshot};
    use crate::model::{Attribute, StructuralKind};
    use std::cell::RefCell;
    use std::fs;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct Recorder(Rc<RefCell<Vec<String>>>);

    impl Notifier for Recorder {
        fn notify(&self, message: &str) {
            self.0.borrow_mut().push(message.to_string());
        }
    }

    fn desk() -> ObjectSnapshot {
        ObjectSnapshot::new(
            "Desk 1",
            11,
            StructuralKind::FamilyInstance {
                family_name: "Office Desk".to_string(),
            },
        )
        .with_category(-2_000_080, "Furniture")
        .with_attribute(Attribute::new("Instance Only").with_raw("x"))
        .with_defining_type(
            TypeSnapshot::default()
                .with_attribute(Attribute::new("Height").with_display("10"))
                .with_attribute(Attribute::new("Width").with_display("")),
        )
    }

    #[test]
    fn family_instance_reads_type_attributes_only() {
        let dir = tempfile::tempdir().unwrap();
        let extractor = Extractor::new(ExportConfig::new(dir.path()));

        let outcome = extractor.process(&desk()).unwrap();
        assert!(outcome.has_kind);
        assert_eq!(outcome.path, dir.path().join("Furniture__11.json"));

        let json: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&outcome.path).unwrap()).unwrap();
        assert_eq!(json["Family"], "Office Desk");
        assert_eq!(json["Height"], "10");
        assert!(json.get("Width").is_none());
        assert!(json.get("Instance Only").is_none());
    }

    #[test]
    fn family_instance_without_type_still_classifies() {
        let dir = tempfile::tempdir().unwrap();
        let extractor = Extractor::new(ExportConfig::new(dir.path()));
        let obj = ObjectSnapshot::new(
            "Orphan",
            12,
            StructuralKind::FamilyInstance {
                family_name: "Chair".to_string(),
            },
        )
        .with_category(-2_000_080, "Furniture");

        let outcome = extractor.process(&obj).unwrap();
        assert!(outcome.has_kind);
        let text = fs::read_to_string(&outcome.path).unwrap();
        assert!(text.contains("\"Family\": \"Chair\""));
    }

    #[test]
    fn outcome_category_ignores_attribute_override() {
        let dir = tempfile::tempdir().unwrap();
        let extractor = Extractor::new(ExportConfig::new(dir.path()));
        let obj = ObjectSnapshot::new("Basic Wall", 13, StructuralKind::Wall)
            .with_category(-2_000_011, "Walls")
            .with_attribute(Attribute::new("Category").with_display("Walls/Interior"));

        let outcome = extractor.process(&obj).unwrap();
        assert_eq!(outcome.category, "Walls");
        assert_eq!(outcome.path, dir.path().join("Walls_Interior__13.json"));
    }

    #[test]
    fn run_notifies_elapsed_time() {
        let dir = tempfile::tempdir().unwrap();
        let recorder = Recorder::default();
        let extractor =
            Extractor::new(ExportConfig::new(dir.path())).with_notifier(Box::new(recorder.clone()));

        let objects = [desk()];
        let summary = extractor
            .run(objects.iter().map(|o| o as &dyn SelectedObject))
            .unwrap();

        assert_eq!(summary.written.len(), 1);
        let messages = recorder.0.borrow();
        assert_eq!(messages.len(), 1);
        assert!(messages[0].starts_with("Execution time: "));
        assert!(messages[0].ends_with(" seconds"));
    }

    #[test]
    fn empty_selection_still_reports() {
        let dir = tempfile::tempdir().unwrap();
        let recorder = Recorder::default();
        let extractor =
            Extractor::new(ExportConfig::new(dir.path())).with_notifier(Box::new(recorder.clone()));

        let summary = extractor.run(std::iter::empty()).unwrap();
        assert!(summary.written.is_empty());
        assert_eq!(recorder.0.borrow().len(), 1);
    }
}
