//! Repackaging of a single extension folder
//!
//! Every path is resolved against the explicit folder handed to
//! [`repack_folder`]; the process working directory is never changed.

use crate::archive::{find_single_archive, ExtensionArchive};
use crate::domain::{
    parse_manifest, ExtensionManifest, PublishConfig, RepackedManifest, Settings, MANIFEST_FILE,
    README_FILE,
};
use crate::error::{RepackError, Result};
use crate::render::{write_manifest, write_readme, Provenance};
use crate::utils::normalize_relative;
use std::path::{Path, PathBuf};

/// What a successful run produced.
#[derive(Debug, Clone)]
pub struct RepackOutcome {
    pub archive: PathBuf,
    pub manifest_path: PathBuf,
    pub readme_path: PathBuf,
    pub icon_path: Option<PathBuf>,
    pub manifest: RepackedManifest,
}

/// Derive the publishable descriptor from the original manifest.
///
/// Only `files`, `displayName`, `publishConfig` and the whitelisted keys
/// survive; optional keys are copied only when present.
pub fn build_manifest(
    original: &ExtensionManifest,
    registry: &str,
    settings: &Settings,
) -> RepackedManifest {
    let mut files = vec![original.archive_file_name(&settings.archive_extension)];
    if let Some(icon) = &original.icon {
        files.push(icon.clone());
    }

    RepackedManifest {
        files,
        display_name: format!("{}{}", original.display_name, settings.display_name_suffix),
        publish_config: PublishConfig { registry: registry.to_string() },
        icon: original.icon.clone(),
        name: original.name.clone(),
        version: original.version.clone(),
        publisher: original.publisher.clone(),
        description: original.description.clone(),
        repository: original.repository.clone(),
        engines: original.engines.clone(),
        author: original.author.clone(),
        keywords: original.keywords.clone(),
    }
}

/// Repackage the single archive in `folder` for publishing to `registry`.
///
/// Nothing is written until the archive and its manifest have been read and
/// validated; the icon (if any) is relocated before `package.json` and
/// `README.md` are overwritten.
pub fn repack_folder(
    folder: &Path,
    registry: &str,
    settings: &Settings,
    provenance: &Provenance,
) -> Result<RepackOutcome> {
    let archive_path = find_single_archive(folder, &settings.archive_extension)?;
    tracing::info!("Repackaging {}", archive_path.display());

    let mut archive = ExtensionArchive::open(&archive_path)?;
    let raw = archive.read_entry(&settings.entry_path(MANIFEST_FILE))?;
    let original = parse_manifest(&raw)?;
    tracing::debug!(
        "Read manifest for {}.{}@{}",
        original.publisher,
        original.name,
        original.version
    );

    let icon_path = match &original.icon {
        Some(icon) => Some(relocate_icon(&mut archive, folder, icon, settings)?),
        None => None,
    };

    let manifest = build_manifest(&original, registry, settings);

    let manifest_path = folder.join(MANIFEST_FILE);
    write_manifest(&manifest_path, &manifest)?;

    let readme_path = folder.join(README_FILE);
    write_readme(&readme_path, &original, provenance)?;

    Ok(RepackOutcome { archive: archive_path, manifest_path, readme_path, icon_path, manifest })
}

/// Copy the icon entry out of the archive to `<folder>/<icon>`.
///
/// The destination may not coincide with the source archive or with either
/// output file.
fn relocate_icon(
    archive: &mut ExtensionArchive,
    folder: &Path,
    icon: &str,
    settings: &Settings,
) -> Result<PathBuf> {
    let invalid = || RepackError::InvalidIconPath { icon: icon.to_string() };

    let normalized = normalize_relative(icon).ok_or_else(invalid)?;
    let dest = folder.join(&normalized);

    let reserved =
        [archive.path().to_path_buf(), folder.join(MANIFEST_FILE), folder.join(README_FILE)];
    if reserved.iter().any(|path| same_file_name(path, &dest)) {
        return Err(invalid());
    }

    let entry = settings.entry_path(&normalized);
    archive.extract_entry(&entry, &dest)?;

    tracing::debug!("Relocated icon {} from {}", dest.display(), archive.path().display());
    Ok(dest)
}

/// Path equality that ignores ASCII case in the final component, since the
/// archive itself is matched case-insensitively.
fn same_file_name(a: &Path, b: &Path) -> bool {
    if a == b {
        return true;
    }
    let names = (a.file_name().and_then(|n| n.to_str()), b.file_name().and_then(|n| n.to_str()));
    match names {
        (Some(x), Some(y)) => a.parent() == b.parent() && x.eq_ignore_ascii_case(y),
        _ => false,
    }
}
