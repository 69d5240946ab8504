//! End-to-end generation: load the profile, render it, write the page.

use crate::config::AppConfig;
use crate::profile::{load_profile, ProfileError, ProfileRecord};
use crate::render::{render_with, Document, RenderOptions};
use crate::storage::write_document;
use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateRequest {
    pub input: PathBuf,
    pub output: PathBuf,
    pub script: Option<PathBuf>,
    pub lang: String,
}

impl From<&AppConfig> for GenerateRequest {
    fn from(config: &AppConfig) -> Self {
        Self {
            input: config.paths.input.clone(),
            output: config.paths.output.clone(),
            script: config.render.script.clone(),
            lang: config.render.lang.clone(),
        }
    }
}

impl Default for GenerateRequest {
    fn default() -> Self {
        Self::from(&AppConfig::default())
    }
}

#[derive(Debug, Clone)]
pub struct GenerateOutcome {
    pub output: PathBuf,
    pub bytes: usize,
    pub hash: String,
    pub specialties: usize,
    pub experience: usize,
}

/// Loads, renders and writes the page described by `request`.
///
/// A missing source surfaces as [`ProfileError::SourceNotFound`] (reachable
/// through `downcast_ref`) and nothing is written in that case or on any
/// other load failure.
pub fn generate(request: &GenerateRequest) -> Result<GenerateOutcome> {
    info!(input = %request.input.display(), output = %request.output.display(), "Generating profile page");
    let (profile, document) = prepare(request)?;

    if request.output.exists() {
        warn!(output = %request.output.display(), "Replacing existing output");
    }
    let written = write_document(&request.output, &document)?;
    info!(
        output = %written.path.display(),
        bytes = written.bytes,
        hash = %written.hash,
        "Profile page written"
    );

    Ok(GenerateOutcome {
        output: written.path,
        bytes: written.bytes,
        hash: written.hash,
        specialties: profile.specialties.len(),
        experience: profile.experience.len(),
    })
}

/// Same as [`generate`] without writing anything.
pub fn generate_to_string(request: &GenerateRequest) -> Result<Document> {
    let (_, document) = prepare(request)?;
    Ok(document)
}

fn prepare(request: &GenerateRequest) -> Result<(ProfileRecord, Document)> {
    let profile = load_profile(&request.input).map_err(|err| match err {
        ProfileError::SourceNotFound(_) => anyhow::Error::new(err),
        other => anyhow::Error::new(other)
            .context(format!("Invalid profile {}", request.input.display())),
    })?;
    debug!(
        specialties = profile.specialties.len(),
        experience = profile.experience.len(),
        "Profile loaded"
    );

    let inline_script = match &request.script {
        Some(path) => Some(
            fs::read_to_string(path)
                .with_context(|| format!("Failed reading script {}", path.display()))?,
        ),
        None => None,
    };
    let options = RenderOptions {
        lang: request.lang.clone(),
        inline_script,
    };

    let document = render_with(&profile, &options);
    debug!(bytes = document.len(), "Profile rendered");
    Ok((profile, document))
}

/// Returns the missing source path if `err` is a not-found failure.
pub fn source_not_found(err: &anyhow::Error) -> Option<&PathBuf> {
    match err.downcast_ref::<ProfileError>() {
        Some(ProfileError::SourceNotFound(path)) => Some(path),
        _ => None,
    }
}

/// Returns the missing field path if `err` stems from an incomplete record.
pub fn missing_field(err: &anyhow::Error) -> Option<&str> {
    err.chain()
        .find_map(|cause| cause.downcast_ref::<ProfileError>())
        .and_then(ProfileError::missing_field)
}
