pub mod bootstrap;
pub mod config;
pub mod logging_system;

pub use bootstrap::{
    FATAL_EXIT_CODE, LOG_LEVEL_ENV, build_or_exit, configured_level_from_env, exit_on_fatal,
    logger_from_env, report_misconfiguration,
};
pub use config::{Config, ConfigError};
pub use logging_system::{DiagnosticsError, setup_diagnostics};

use crate::domain::Fields;
use crate::logger::{Emission, Logger};
use std::borrow::Cow;
use std::io::BufRead;
use std::process;
use tracing::{debug, error};

/// Command-line front end: emits each message (or stdin line) as one record.
pub struct App {
    config: Config,
    fields: Option<Fields>,
    logger: Logger,
}

impl App {
    /// Parses arguments and builds the logger. Exits the process when
    /// `LOG_LEVEL` is not a known level.
    pub fn from_args<I, T>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let config = Config::from_args_and_env(args)?;
        let logger = build_or_exit(&config.name, config.configured_level().as_deref());
        Self::new(config, logger)
    }

    pub fn new(config: Config, logger: Logger) -> Result<Self, ConfigError> {
        let fields = config.parsed_fields()?;
        Ok(Self {
            config,
            fields,
            logger,
        })
    }

    /// Emits one record for `raw`. Fatal emissions are returned, not acted on.
    pub fn emit(&self, raw: &str) -> Emission {
        let message = self.config.message_value(raw);
        self.logger.log(self.config.at, self.fields.as_ref(), &message)
    }

    /// Emits every message argument, or every stdin line when there are none.
    /// Stops at the first fatal emission and returns it.
    pub fn run<R: BufRead>(&self, mut stdin: R) -> Result<Emission, std::io::Error> {
        debug!(
            logger = self.logger.name(),
            threshold = %self.logger.threshold(),
            at = %self.config.at,
            "rask-logger starting"
        );

        let mut last = Emission::Filtered;
        if self.config.messages.is_empty() {
            let mut raw = Vec::new();
            loop {
                raw.clear();
                if stdin.read_until(b'\n', &mut raw)? == 0 {
                    break;
                }
                last = self.emit(&decode_line(&raw));
                if last.is_fatal() {
                    break;
                }
            }
        } else {
            for message in &self.config.messages {
                last = self.emit(message);
                if last.is_fatal() {
                    break;
                }
            }
        }
        Ok(last)
    }
}

// Invalid UTF-8 is replaced rather than ending the run.
fn decode_line(raw: &[u8]) -> Cow<'_, str> {
    let line = raw.strip_suffix(b"\n").unwrap_or(raw);
    let line = line.strip_suffix(b"\r").unwrap_or(line);
    let decoded = String::from_utf8_lossy(line);
    if let Cow::Owned(_) = decoded {
        debug!(bytes = line.len(), "stdin line is not valid UTF-8, decoded lossily");
    }
    decoded
}

// Main entry point for the binary
pub fn main() -> anyhow::Result<()> {
    if let Err(e) = setup_diagnostics() {
        eprintln!("Warning: {e}, diagnostics disabled");
    }

    let app = match App::from_args(std::env::args_os()) {
        Ok(app) => app,
        Err(ConfigError::ArgumentError(e)) => e.exit(),
        Err(e) => {
            error!("Configuration error: {}", e);
            eprintln!("rask-logger: {e}");
            process::exit(2);
        }
    };

    let emission = app.run(std::io::stdin().lock())?;
    exit_on_fatal(emission);
    Ok(())
}
