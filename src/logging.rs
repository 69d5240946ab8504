//! Structured logging via `tracing`.
//!
//! Logs always go to stderr so stdout stays free for `--stdout` output.

use crate::config::LoggingSettings;
use anyhow::{bail, Context, Result};
use std::io::IsTerminal;
use tracing_subscriber::fmt::time::ChronoUtc;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

/// Filter directive override, e.g. `PROFILEPAGE_LOG=profilepage=debug`.
pub const LOG_ENV_VAR: &str = "PROFILEPAGE_LOG";

/// Output format override (`text` or `json`).
pub const LOG_FORMAT_ENV_VAR: &str = "PROFILEPAGE_LOG_FORMAT";

/// Installs the global subscriber. Calling it again after a subscriber is
/// already installed leaves the existing one in place.
pub fn init_logging(settings: &LoggingSettings) -> Result<()> {
    let env_directive = std::env::var(LOG_ENV_VAR).ok();
    let (filter, rejected) = build_env_filter(env_directive.as_deref(), settings)?;
    let format = determine_format(settings)?;
    let base_subscriber = Registry::default().with(filter);

    let installed = if format == "json" {
        base_subscriber
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_writer(std::io::stderr),
            )
            .try_init()
    } else {
        base_subscriber
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_ansi(std::io::stderr().is_terminal())
                    .with_writer(std::io::stderr),
            )
            .try_init()
    };

    if installed.is_err() {
        tracing::debug!("Logging already initialized; keeping existing subscriber");
    }
    if let Some(directive) = rejected {
        tracing::warn!(
            directive = %directive,
            level = %settings.level,
            "Ignoring invalid {LOG_ENV_VAR}; using configured level"
        );
    }
    Ok(())
}

/// Builds the filter from the env override when it parses, otherwise from the
/// configured level. An override that failed to parse is handed back so it can
/// be reported once the subscriber is installed.
fn build_env_filter(
    env_directive: Option<&str>,
    settings: &LoggingSettings,
) -> Result<(EnvFilter, Option<String>)> {
    let mut rejected = None;
    if let Some(directive) = env_directive.filter(|d| !d.trim().is_empty()) {
        match EnvFilter::try_new(directive) {
            Ok(filter) => return Ok((filter, None)),
            Err(_) => rejected = Some(directive.to_string()),
        }
    }
    let filter = EnvFilter::try_new(&settings.level)
        .with_context(|| format!("Invalid log level '{}'", settings.level))?;
    Ok((filter, rejected))
}

fn determine_format(settings: &LoggingSettings) -> Result<String> {
    if let Ok(format) = std::env::var(LOG_FORMAT_ENV_VAR) {
        if format == "json" || format == "text" {
            return Ok(format);
        }
    }
    match settings.format.as_str() {
        "json" | "text" => Ok(settings.format.clone()),
        other => bail!("Invalid log format '{other}' (expected 'text' or 'json')"),
    }
}
