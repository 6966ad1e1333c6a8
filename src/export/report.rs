use crate::error::ExportError;
use crate::extract::RunSummary;
use std::fs::File;
use std::path::Path;

/// Writes one CSV row per processed object: written files first, then failures.
pub fn write_report<P: AsRef<Path>>(summary: &RunSummary, path: P) -> Result<(), ExportError> {
    let path_ref = path.as_ref();
    let file = File::create(path_ref).map_err(|source| ExportError::FileCreate {
        path: path_ref.to_path_buf(),
        source,
    })?;

    let mut writer = csv::Writer::from_writer(file);

    writer.write_record(["ID", "Category", "Classified", "Status", "Detail"])?;

    for outcome in &summary.written {
        writer.write_record([
            outcome.id.to_string().as_str(),
            outcome.category.as_str(),
            if outcome.has_kind { "Yes" } else { "No" },
            "Written",
            outcome.path.display().to_string().as_str(),
        ])?;
    }

    for failure in &summary.failures {
        writer.write_record([
            failure.id.to_string().as_str(),
            failure.category.as_str(),
            "-",
            "Failed",
            failure.error.to_string().as_str(),
        ])?;
    }

    writer.flush().map_err(|source| ExportError::FileWrite {
        path: path_ref.to_path_buf(),
        source,
    })?;

    Ok(())
}
