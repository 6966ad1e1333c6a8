use crate::error::ExportError;
use std::fs;
use std::path::Path;

/// Writes `text` as the whole content of `path`, creating missing parent
/// directories first. An existing file is truncated.
pub fn write_text<P: AsRef<Path>>(path: P, text: &str) -> Result<(), ExportError> {
    let path_ref = path.as_ref();

    if let Some(parent) = path_ref.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| ExportError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    fs::write(path_ref, text).map_err(|source| ExportError::FileWrite {
        path: path_ref.to_path_buf(),
        source,
    })
}
