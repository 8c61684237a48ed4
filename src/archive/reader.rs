//! Reading named entries out of a zip-based extension archive

use crate::error::{RepackError, Result};
use std::fs::{self, File};
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use zip::result::ZipError;
use zip::ZipArchive;

/// Upper bound on the buffer reserved up front from an entry's declared size.
const MAX_PREALLOC: u64 = 1 << 20;

/// An opened `.vsix` archive.
pub struct ExtensionArchive {
    path: PathBuf,
    zip: ZipArchive<File>,
}

impl ExtensionArchive {
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| RepackError::filesystem(path, e))?;
        let zip = ZipArchive::new(file)
            .map_err(|source| RepackError::Archive { archive: path.to_path_buf(), source })?;
        Ok(Self { path: path.to_path_buf(), zip })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the full contents of `entry` into memory.
    pub fn read_entry(&mut self, entry: &str) -> Result<Vec<u8>> {
        let archive = &self.path;
        let mut file = self.zip.by_name(entry).map_err(|e| entry_error(archive, entry, e))?;

        let mut buf = Vec::with_capacity(initial_capacity(file.size()));
        file.read_to_end(&mut buf).map_err(|source| RepackError::Archive {
            archive: archive.clone(),
            source: ZipError::Io(source),
        })?;
        Ok(buf)
    }

    /// Copy `entry` to `dest`, creating missing parent directories and
    /// replacing any existing file. Returns the number of bytes written.
    pub fn extract_entry(&mut self, entry: &str, dest: &Path) -> Result<u64> {
        let archive = &self.path;
        let mut file = self.zip.by_name(entry).map_err(|e| entry_error(archive, entry, e))?;

        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent).map_err(|e| RepackError::filesystem(parent, e))?;
        }
        let mut out = File::create(dest).map_err(|e| RepackError::filesystem(dest, e))?;
        let written = io::copy(&mut file, &mut out).map_err(|e| RepackError::filesystem(dest, e))?;

        tracing::debug!("Extracted {} ({} bytes) to {}", entry, written, dest.display());
        Ok(written)
    }
}

/// The declared size comes from the archive header and is not trusted.
fn initial_capacity(declared: u64) -> usize {
    declared.min(MAX_PREALLOC) as usize
}

fn entry_error(archive: &Path, entry: &str, err: ZipError) -> RepackError {
    match err {
        ZipError::FileNotFound => {
            RepackError::Extraction { archive: archive.to_path_buf(), entry: entry.to_string() }
        }
        source => RepackError::Archive { archive: archive.to_path_buf(), source },
    }
}
