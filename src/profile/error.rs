use std::path::PathBuf;
use thiserror::Error;

/// Failures raised while turning persisted input into a [`super::ProfileRecord`].
#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("Profile source not found: {}", .0.display())]
    SourceNotFound(PathBuf),

    #[error("Failed reading profile source {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed profile source {origin}: {source}")]
    Malformed {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Missing required field `{field}`")]
    MissingRequiredField { field: String },
}

impl ProfileError {
    pub(crate) fn missing(field: impl Into<String>) -> Self {
        Self::MissingRequiredField {
            field: field.into(),
        }
    }

    /// Dotted path of the absent field, if this is a missing-field error.
    pub fn missing_field(&self) -> Option<&str> {
        match self {
            Self::MissingRequiredField { field } => Some(field),
            _ => None,
        }
    }
}
