use std::ffi::OsString;
use std::path::Path;

use walkdir::WalkDir;

use crate::error::{ConvertError, Result};

/// Lists the top level of `source` and keeps entries whose extension,
/// lower-cased, equals `from_ext`. Directories are listed too; the order is
/// whatever the filesystem returns.
pub fn select_candidates(source: &Path, from_ext: &str) -> Result<Vec<OsString>> {
    if source.as_os_str().is_empty() {
        return Err(ConvertError::EmptyPath("source"));
    }
    if source.exists() && !source.is_dir() {
        return Err(ConvertError::NotADirectory(source.to_path_buf()));
    }

    let wanted = from_ext.to_lowercase();
    let mut candidates = Vec::new();

    for entry in WalkDir::new(source).min_depth(1).max_depth(1) {
        let entry = entry.map_err(|source_err| ConvertError::SourceDir {
            path: source.to_path_buf(),
            source: source_err,
        })?;

        let name = entry.file_name();
        if extension_matches(Path::new(name), &wanted) {
            candidates.push(name.to_os_string());
        } else {
            tracing::trace!(entry = %name.to_string_lossy(), "skipping");
        }
    }

    Ok(candidates)
}

fn extension_matches(name: &Path, wanted: &str) -> bool {
    name.extension()
        .is_some_and(|ext| ext.to_string_lossy().to_lowercase() == wanted)
}
