//! Error types for repackaging

use std::path::PathBuf;

/// Result type for repackaging operations
pub type Result<T> = std::result::Result<T, RepackError>;

/// Errors that abort a repack run
#[derive(Debug, thiserror::Error)]
pub enum RepackError {
    #[error("Exactly one .{extension} file must exist in {folder}, found {found}")]
    InvalidInput { folder: PathBuf, extension: String, found: usize },

    #[error("Archive {archive} has no entry '{entry}'")]
    Extraction { archive: PathBuf, entry: String },

    #[error("Failed to read archive {archive}: {source}")]
    Archive {
        archive: PathBuf,
        #[source]
        source: zip::result::ZipError,
    },

    #[error("Extension metadata is missing required key '{key}'")]
    MissingKey { key: String },

    #[error("Malformed extension metadata: {message}")]
    MalformedMetadata { message: String },

    #[error(
        "Icon path '{icon}' must be relative, stay inside the extension folder and not \
         replace the archive, package.json or README.md"
    )]
    InvalidIconPath { icon: String },

    #[error("Failed to serialize package.json: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Filesystem error at {path}: {source}")]
    Filesystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl RepackError {
    pub fn filesystem(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Filesystem { path: path.into(), source }
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedMetadata { message: message.into() }
    }
}
