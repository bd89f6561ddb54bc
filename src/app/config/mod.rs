mod cli;
mod validation;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("Invalid fields: {0}")]
    InvalidFields(String),
    #[error("Parse error: {0}")]
    ParseError(#[from] serde_json::Error),
    #[error("Argument error: {0}")]
    ArgumentError(#[from] clap::Error),
}

pub use cli::Config;
