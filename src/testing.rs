//! Fixture builders for unit tests

use serde_json::{json, Value};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Write a zip archive named `name` into `dir` containing `files`.
pub fn write_vsix(dir: &Path, name: &str, files: &[(&str, &[u8])]) -> PathBuf {
    let path = dir.join(name);
    let file = fs::File::create(&path).expect("create archive");
    let mut writer = zip::ZipWriter::new(file);
    let options =
        zip::write::SimpleFileOptions::default().compression_method(zip::CompressionMethod::Stored);

    for (entry_name, content) in files {
        writer.start_file(entry_name.to_string(), options).expect("start entry");
        writer.write_all(content).expect("write entry");
    }
    writer.finish().expect("finish archive");
    path
}

/// A manifest with every required key for `acme.tool@1.2.3`.
pub fn acme_manifest() -> Value {
    json!({
        "publisher": "acme",
        "name": "tool",
        "version": "1.2.3",
        "displayName": "ACME Tool",
        "description": "Does tool things",
        "repository": {"type": "git", "url": "https://example.com/acme/tool.git"},
        "engines": {"vscode": "^1.80.0"}
    })
}
