use thiserror::Error;

/// Errors surfaced by the logging core.
///
/// Only construction can fail. Emission never returns an error to the
/// caller; see `Emission` for the fatal signal.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoggerError {
    #[error("Invalid log level '{input}'. Valid levels: {valid_levels:?}")]
    InvalidLevel {
        input: String,
        valid_levels: Vec<String>,
    },
}
