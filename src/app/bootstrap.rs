//! Process-facing glue around the logging core.
//!
//! The core never reads the environment and never exits. This module does
//! both: it resolves `LOG_LEVEL`, reports a bad value as one structured
//! fatal line, and turns `Emission::Fatal` into a process exit.

use crate::domain::{Fields, Level, LoggerError};
use crate::logger::{Emission, Logger, stderr_sink};
use serde_json::{Value, json};
use std::io::Write;
use std::process;

pub const LOG_LEVEL_ENV: &str = "LOG_LEVEL";

/// Exit status used for fatal emissions and misconfiguration.
pub const FATAL_EXIT_CODE: i32 = 1;

pub const MISCONFIGURATION_MESSAGE: &str = "Bad LOG_LEVEL";

/// Reads `LOG_LEVEL`. A non-UTF-8 value is passed through lossily so that it
/// is reported as unrecognized instead of being ignored.
pub fn configured_level_from_env() -> Option<String> {
    std::env::var_os(LOG_LEVEL_ENV).map(|raw| raw.to_string_lossy().into_owned())
}

/// Builds a logger named `name` from `LOG_LEVEL`, exiting the process when
/// the value is not a known level.
pub fn logger_from_env(name: &str) -> Logger {
    build_or_exit(name, configured_level_from_env().as_deref())
}

pub fn build_or_exit(name: &str, configured_level: Option<&str>) -> Logger {
    match Logger::new(name, configured_level) {
        Ok(logger) => logger,
        Err(e) => {
            let _ = report_misconfiguration(name, &e, stderr_sink());
            process::exit(FATAL_EXIT_CODE)
        }
    }
}

/// Writes the misconfiguration line through a separate logger whose
/// threshold is known (`fatal`), so the failure is reported in the same wire
/// format as everything else.
pub fn report_misconfiguration<W: Write + Send + 'static>(
    name: &str,
    error: &LoggerError,
    sink: W,
) -> Emission {
    tracing::debug!(error = %error, logger = name, "logger misconfigured");

    let reporter = Logger::with_level(name, Level::Fatal).with_sink(sink);
    let fields = misconfiguration_fields(error);
    reporter.fatal_with(Some(&fields), MISCONFIGURATION_MESSAGE)
}

fn misconfiguration_fields(error: &LoggerError) -> Fields {
    let LoggerError::InvalidLevel {
        input,
        valid_levels,
    } = error;

    let mut fields = Fields::new();
    fields.insert(LOG_LEVEL_ENV.to_string(), Value::String(input.clone()));
    fields.insert("valid_levels".to_string(), json!(valid_levels));
    fields
}

/// Terminates the process with `FATAL_EXIT_CODE` when `emission` is fatal.
pub fn exit_on_fatal(emission: Emission) {
    if emission.is_fatal() {
        process::exit(FATAL_EXIT_CODE);
    }
}
