//! Config file loading

use crate::domain::Settings;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_CANDIDATES: [&str; 5] = [
    "vsix-repack.toml",
    ".vsix-repack.toml",
    "vsix-repack.yml",
    "vsix-repack.yaml",
    ".vsix-repack.yml",
];

/// Load settings from `config_path`, or from a config file discovered in
/// `search_dir` when no path is given.
///
/// An explicitly requested file must parse; a broken auto-discovered file is
/// reported with a warning and the defaults are used instead.
pub fn load_config(search_dir: &Path, config_path: Option<&Path>) -> Result<Settings> {
    let config_path_provided = config_path.is_some();

    let discovered = match config_path {
        Some(path) => Some(path.to_path_buf()),
        None => discover_config(search_dir),
    };

    let Some(config_file) = discovered else {
        return Ok(Settings::default());
    };
    tracing::debug!("Loading settings from {}", config_file.display());

    let parsed = fs::read_to_string(&config_file)
        .with_context(|| format!("Failed reading config file: {}", config_file.display()))
        .and_then(|content| parse_config(&content, &config_file));

    match parsed {
        Ok(settings) => Ok(settings),
        Err(e) if config_path_provided => Err(e),
        Err(e) => {
            tracing::warn!("Ignoring auto-discovered config {}: {:#}", config_file.display(), e);
            Ok(Settings::default())
        }
    }
}

fn parse_config(content: &str, config_file: &Path) -> Result<Settings> {
    let ext = config_file.extension().and_then(|e| e.to_str()).unwrap_or("").to_ascii_lowercase();
    match ext.as_str() {
        "toml" => parse_toml_config(content, config_file),
        "yaml" | "yml" => parse_yaml_config(content, config_file),
        other => anyhow::bail!(
            "Unsupported config extension '.{}' for file {}",
            other,
            config_file.display()
        ),
    }
}

/// Parse TOML settings, either top-level or nested in a [vsix-repack] table.
fn parse_toml_config(content: &str, config_file: &Path) -> Result<Settings> {
    let raw: toml::Value = toml::from_str(content)
        .with_context(|| format!("Invalid TOML syntax: {}", config_file.display()))?;

    let config_val = match raw.get("vsix-repack") {
        Some(nested) => nested.clone(),
        None => raw,
    };

    config_val.try_into().with_context(|| format!("Invalid TOML config: {}", config_file.display()))
}

/// Parse YAML settings, either top-level or nested under a vsix-repack key.
fn parse_yaml_config(content: &str, config_file: &Path) -> Result<Settings> {
    let raw: serde_yaml::Value = serde_yaml::from_str(content)
        .with_context(|| format!("Invalid YAML syntax: {}", config_file.display()))?;

    let config_val = match raw.get("vsix-repack") {
        Some(nested) => nested.clone(),
        None => raw,
    };

    serde_yaml::from_value(config_val)
        .with_context(|| format!("Invalid YAML config: {}", config_file.display()))
}

fn discover_config(search_dir: &Path) -> Option<PathBuf> {
    CONFIG_CANDIDATES.iter().map(|candidate| search_dir.join(candidate)).find(|path| path.is_file())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_config_defaults_when_missing() {
        let tmp = TempDir::new().expect("tmp");
        let cfg = load_config(tmp.path(), None).expect("config");
        assert_eq!(cfg, Settings::default());
        assert_eq!(cfg.archive_extension, "vsix");
        assert_eq!(cfg.display_name_suffix, " - VSC repacked extension");
    }

    #[test]
    fn test_load_toml_config() {
        let tmp = TempDir::new().expect("tmp");
        fs::write(
            tmp.path().join("vsix-repack.toml"),
            "display_name_suffix = ' (mirror)'\npackager = 'ci-bot'\n",
        )
        .expect("write");

        let cfg = load_config(tmp.path(), None).expect("config");
        assert_eq!(cfg.display_name_suffix, " (mirror)");
        assert_eq!(cfg.packager.as_deref(), Some("ci-bot"));
        // Untouched keys keep their defaults
        assert_eq!(cfg.publish_command, "npm publish .");
    }

    #[test]
    fn test_load_nested_toml_section() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("tools.toml");
        fs::write(&path, "[vsix-repack]\narchive_extension = 'zip'\n").expect("write");

        let cfg = load_config(tmp.path(), Some(&path)).expect("config");
        assert_eq!(cfg.archive_extension, "zip");
    }

    #[test]
    fn test_load_yaml_config() {
        let tmp = TempDir::new().expect("tmp");
        fs::write(
            tmp.path().join("vsix-repack.yml"),
            "publish_command: npm publish --access restricted .\n",
        )
        .expect("write");

        let cfg = load_config(tmp.path(), None).expect("config");
        assert_eq!(cfg.publish_command, "npm publish --access restricted .");
    }

    #[test]
    fn test_explicit_config_invalid_type_returns_err() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("bad.toml");
        fs::write(&path, "archive_extension = 123\n").expect("write");

        let result = load_config(tmp.path(), Some(&path));
        assert!(result.is_err(), "explicit config with invalid type should return Err");
    }

    #[test]
    fn test_explicit_config_unknown_key_returns_err() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("bad.yaml");
        fs::write(&path, "registry: https://example.com\n").expect("write");

        assert!(load_config(tmp.path(), Some(&path)).is_err());
    }

    #[test]
    fn test_explicit_config_unsupported_extension_returns_err() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("settings.json");
        fs::write(&path, "{}").expect("write");

        let err = load_config(tmp.path(), Some(&path)).expect_err("json is unsupported");
        assert!(err.to_string().contains("Unsupported config extension"));
    }

    #[test]
    fn test_explicit_config_missing_file_returns_err() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("absent.toml");

        assert!(load_config(tmp.path(), Some(&path)).is_err());
    }

    #[test]
    fn test_auto_discovered_invalid_config_returns_default() {
        let tmp = TempDir::new().expect("tmp");
        fs::write(tmp.path().join("vsix-repack.toml"), "archive_extension = [1, 2]\n")
            .expect("write");

        let cfg = load_config(tmp.path(), None).expect("should not error on auto-discovery");
        assert_eq!(cfg, Settings::default());
    }
}
