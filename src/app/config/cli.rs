use super::ConfigError;
use crate::domain::{Fields, Level};
use clap::Parser;
use serde_json::Value;
use std::ffi::OsString;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "Write structured JSON log lines to stderr", long_about = None)]
pub struct Config {
    /// Logger name embedded in every record
    #[arg(long, env = "LOG_NAME", default_value = "rask-logger")]
    pub name: String,

    /// Minimum level to emit: trace, debug, warn, error or fatal (default: error)
    #[arg(long = "level", env = "LOG_LEVEL")]
    pub log_level: Option<OsString>,

    /// Level the messages are emitted at
    #[arg(long, default_value = "error")]
    pub at: Level,

    /// JSON object attached to every record as `fields`
    #[arg(long)]
    pub fields: Option<String>,

    /// Parse each message as JSON, keeping it as a string when it is not valid JSON
    #[arg(long)]
    pub json: bool,

    /// Messages to emit. Reads one message per stdin line when empty.
    pub messages: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            name: "rask-logger".to_string(),
            log_level: None,
            at: Level::Error,
            fields: None,
            json: false,
            messages: Vec::new(),
        }
    }
}

impl Config {
    pub fn from_args_and_env<I, T>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        // clap reads LOG_NAME and LOG_LEVEL itself through the `env` feature
        let config = Config::try_parse_from(args)?;
        config.validate()?;
        Ok(config)
    }

    /// The configured threshold name. Non-UTF-8 input is decoded lossily so
    /// the bootstrap reports it as an unknown level.
    pub fn configured_level(&self) -> Option<String> {
        self.log_level
            .as_ref()
            .map(|raw| raw.to_string_lossy().into_owned())
    }

    /// Decodes `--fields`, which must be a JSON object.
    pub fn parsed_fields(&self) -> Result<Option<Fields>, ConfigError> {
        let Some(raw) = &self.fields else {
            return Ok(None);
        };

        match serde_json::from_str::<Value>(raw)? {
            Value::Object(map) => Ok(Some(map)),
            other => Err(ConfigError::InvalidFields(format!(
                "expected a JSON object, got '{other}'"
            ))),
        }
    }

    pub fn message_value(&self, raw: &str) -> Value {
        if self.json {
            serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
        } else {
            Value::String(raw.to_string())
        }
    }
}
