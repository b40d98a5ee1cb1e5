use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ConvertError, Result};

/// Removes every `"` from a pasted path, not only a wrapping pair.
pub fn strip_quotes(raw: &str) -> String {
    raw.replace('"', "")
}

pub fn prepare_destination(dest: &Path) -> Result<()> {
    if dest.as_os_str().is_empty() {
        return Err(ConvertError::EmptyPath("destination"));
    }
    if dest.exists() {
        return Ok(());
    }

    tracing::debug!(dest = %dest.display(), "creating destination folder");
    fs::create_dir_all(dest).map_err(|source| ConvertError::CreateDest {
        path: dest.to_path_buf(),
        source,
    })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionTask {
    pub file_name: OsString,
    pub input_path: PathBuf,
    pub output_name: OsString,
    pub output_path: PathBuf,
}

impl ConversionTask {
    /// `name.ext` in `source` becomes `name.<to_ext>` in `dest`.
    pub fn new(source: &Path, dest: &Path, file_name: &OsString, to_ext: &str) -> Self {
        let stem = Path::new(file_name)
            .file_stem()
            .map(|s| s.to_os_string())
            .unwrap_or_else(|| file_name.clone());

        let mut output_name = stem;
        output_name.push(".");
        output_name.push(to_ext);

        Self {
            file_name: file_name.clone(),
            input_path: source.join(file_name),
            output_path: dest.join(&output_name),
            output_name,
        }
    }

    pub fn display_name(&self) -> String {
        self.file_name.to_string_lossy().into_owned()
    }

    pub fn display_output(&self) -> String {
        self.output_name.to_string_lossy().into_owned()
    }
}
