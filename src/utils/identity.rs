//! Packager identity lookup

/// Login name of the user running the tool.
///
/// Reads `USER`, then `LOGNAME`, then `USERNAME` (Windows); falls back to
/// `"unknown"` when none is set.
pub fn login_name() -> String {
    ["USER", "LOGNAME", "USERNAME"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .map(|name| name.trim().to_string())
        .find(|name| !name.is_empty())
        .unwrap_or_else(|| "unknown".to_string())
}
