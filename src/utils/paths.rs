//! Path normalization

use std::path::{Component, Path};

pub fn normalize_path(path: &str) -> String {
    // Convert backslashes to forward slashes and normalize
    path.replace('\\', "/")
}

/// Normalize a manifest-relative path (e.g. an icon) to `/`-separated
/// components with `.` and `..` folded away.
///
/// Returns `None` for absolute paths, for paths that climb above their
/// starting point through `..`, and for paths that name no file at all.
pub fn normalize_relative(relative: &str) -> Option<String> {
    let normalized = normalize_path(relative);
    let mut parts: Vec<&str> = Vec::new();

    for component in Path::new(&normalized).components() {
        match component {
            Component::Normal(part) => parts.push(part.to_str()?),
            Component::CurDir => {}
            Component::ParentDir => {
                parts.pop()?;
            }
            Component::RootDir | Component::Prefix(_) => return None,
        }
    }

    (!parts.is_empty()).then(|| parts.join("/"))
}
