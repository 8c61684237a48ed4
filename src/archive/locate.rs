//! Archive discovery inside the target folder

use crate::error::{RepackError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// List regular files directly inside `folder` whose extension matches
/// `extension` (case-insensitive, without the leading dot), sorted by path.
pub fn list_archives(folder: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(folder).map_err(|e| RepackError::filesystem(folder, e))?;

    let mut archives = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| RepackError::filesystem(folder, e))?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let matches = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case(extension));
        if matches {
            archives.push(path);
        }
    }
    archives.sort();
    Ok(archives)
}

/// Return the only archive in `folder`, failing when there are none or several.
pub fn find_single_archive(folder: &Path, extension: &str) -> Result<PathBuf> {
    let mut archives = list_archives(folder, extension)?;
    tracing::debug!("Found {} .{} file(s) in {}", archives.len(), extension, folder.display());

    if archives.len() != 1 {
        return Err(RepackError::InvalidInput {
            folder: folder.to_path_buf(),
            extension: extension.to_string(),
            found: archives.len(),
        });
    }
    Ok(archives.remove(0))
}
