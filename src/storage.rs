//! Filesystem helpers for persisting rendered documents.

use crate::render::Document;
use anyhow::{Context, Result};
use sha2::{Digest, Sha256};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Result returned after writing a rendered document.
#[derive(Debug, Clone)]
pub struct WrittenDocument {
    pub path: PathBuf,
    pub bytes: usize,
    pub hash: String,
}

/// Writes `document` to `path` via a staging file renamed into place, so the
/// destination is either the previous content or the complete new page.
pub fn write_document<P: AsRef<Path>>(path: P, document: &Document) -> Result<WrittenDocument> {
    let path = path.as_ref();
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    fs::create_dir_all(&parent)
        .with_context(|| format!("Failed creating output directory {:?}", parent))?;

    let file_name = path
        .file_name()
        .with_context(|| format!("Output path {:?} has no file name", path))?;
    let staged_path = parent.join(format!(
        ".{}.{}.staging",
        file_name.to_string_lossy(),
        Uuid::new_v4()
    ));

    let payload = document.as_str().as_bytes();
    if let Err(err) = stage(&staged_path, payload) {
        let _ = fs::remove_file(&staged_path);
        return Err(err);
    }
    if let Err(err) = fs::rename(&staged_path, path) {
        let _ = fs::remove_file(&staged_path);
        return Err(err).with_context(|| {
            format!(
                "Failed moving {} into place at {}",
                staged_path.display(),
                path.display()
            )
        });
    }

    Ok(WrittenDocument {
        path: path.to_path_buf(),
        bytes: payload.len(),
        hash: compute_hash(payload),
    })
}

fn stage(staged_path: &Path, payload: &[u8]) -> Result<()> {
    let mut file = fs::File::create(staged_path)
        .with_context(|| format!("Failed opening staging file {:?}", staged_path))?;
    file.write_all(payload)
        .with_context(|| format!("Failed writing staging file {:?}", staged_path))?;
    file.sync_all()
        .with_context(|| format!("Failed flushing staging file {:?}", staged_path))?;
    Ok(())
}

/// Computes a lowercase hex SHA-256 hash of the provided bytes.
pub fn compute_hash(bytes: &[u8]) -> String {
    let digest = Sha256::digest(bytes);
    format!("{:x}", digest)
}
