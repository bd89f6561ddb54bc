// Diagnostics for the logger itself, kept apart from the JSON records.
use thiserror::Error;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Environment variable holding `tracing` directives for diagnostics.
pub const DIAGNOSTICS_ENV: &str = "RUST_LOG";

// Off unless asked for, so stderr carries nothing but records.
const DEFAULT_DIAGNOSTICS_FILTER: &str = "off";

#[derive(Error, Debug)]
pub enum DiagnosticsError {
    #[error("Invalid diagnostics filter '{filter}'")]
    InvalidFilter {
        filter: String,
        #[source]
        source: tracing_subscriber::filter::ParseError,
    },

    #[error("Diagnostics initialization failed: {details}")]
    InitFailed {
        details: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// Builds the diagnostics filter from `directives`, falling back to "off".
pub fn build_filter(directives: Option<&str>) -> Result<EnvFilter, DiagnosticsError> {
    let filter = directives
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .unwrap_or(DEFAULT_DIAGNOSTICS_FILTER);

    EnvFilter::try_new(filter).map_err(|source| DiagnosticsError::InvalidFilter {
        filter: filter.to_string(),
        source,
    })
}

/// Installs a compact `tracing` subscriber on stderr driven by `RUST_LOG`.
pub fn setup_diagnostics() -> Result<(), DiagnosticsError> {
    let directives = std::env::var(DIAGNOSTICS_ENV).ok();
    let filter = build_filter(directives.as_deref())?;

    let subscriber = tracing_subscriber::registry().with(filter).with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_level(true)
            .compact(),
    );

    tracing::subscriber::set_global_default(subscriber).map_err(|e| {
        DiagnosticsError::InitFailed {
            details: "Failed to set global tracing subscriber".to_string(),
            source: Box::new(e),
        }
    })
}
