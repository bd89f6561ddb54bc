//! Domain layer for rask-logger.
//!
//! Contains the canonical types shared across all modules:
//! - `Level`: the level registry (trace/debug/warn/error/fatal)
//! - `Record`: one log event as it appears on the wire
//! - `LoggerError`: construction errors

pub mod error;
pub mod log_level;
pub mod record;

pub use error::LoggerError;
pub use log_level::{Level, Severity, severity_of};
pub use record::{Fields, Record, SCHEMA_VERSION, message_value};
