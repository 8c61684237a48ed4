//! Repack settings with built-in defaults

use serde::Deserialize;

pub const DEFAULT_ARCHIVE_EXTENSION: &str = "vsix";
pub const DEFAULT_ENTRY_PREFIX: &str = "extension";
pub const DEFAULT_DISPLAY_NAME_SUFFIX: &str = " - VSC repacked extension";
pub const DEFAULT_PUBLISH_COMMAND: &str = "npm publish .";

/// Tunables for a repack run. Every field falls back to its default when
/// omitted from a config file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Extension (without dot) of the archive to look for.
    pub archive_extension: String,
    /// Directory inside the archive that holds `package.json` and assets.
    pub entry_prefix: String,
    pub display_name_suffix: String,
    /// Command printed for the operator after a successful run.
    pub publish_command: String,
    /// Name recorded as "packaged by"; the login name when unset.
    pub packager: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            archive_extension: DEFAULT_ARCHIVE_EXTENSION.to_string(),
            entry_prefix: DEFAULT_ENTRY_PREFIX.to_string(),
            display_name_suffix: DEFAULT_DISPLAY_NAME_SUFFIX.to_string(),
            publish_command: DEFAULT_PUBLISH_COMMAND.to_string(),
            packager: None,
        }
    }
}

impl Settings {
    /// Archive-internal path of `relative` under the entry prefix.
    pub fn entry_path(&self, relative: &str) -> String {
        let prefix = self.entry_prefix.trim_end_matches('/');
        if prefix.is_empty() {
            relative.to_string()
        } else {
            format!("{prefix}/{relative}")
        }
    }
}
