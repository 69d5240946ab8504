//! Profile data contract and the JSON loader that produces it.
//!
//! Persisted profiles are parsed into loose draft types first and then
//! validated into [`ProfileRecord`], whose required fields are plain
//! `String`s and whose optional fields are `Option`s.

pub mod error;
pub mod model;

pub use error::ProfileError;
pub use model::{Contact, ExperienceEntry, ProfileRecord};

use std::fs;
use std::path::Path;

/// Loads and validates a profile from a JSON file.
pub fn load_profile<P: AsRef<Path>>(path: P) -> Result<ProfileRecord, ProfileError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(ProfileError::SourceNotFound(path.to_path_buf()));
    }
    let data = fs::read(path).map_err(|source| ProfileError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    model::parse_profile(&data, &path.display().to_string())
}
