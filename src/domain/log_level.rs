use std::fmt;
use std::str::FromStr;

use super::error::LoggerError;

/// Numeric rank of a level. Higher is more severe.
pub type Severity = u8;

/// The closed set of levels a `Logger` understands.
///
/// The names and severities are part of the wire format and of the
/// `LOG_LEVEL` configuration surface, so they must never change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    Trace,
    Debug,
    Warn,
    Error,
    Fatal,
}

impl Level {
    /// Every level, least severe first.
    pub const ALL: [Level; 5] = [
        Level::Trace,
        Level::Debug,
        Level::Warn,
        Level::Error,
        Level::Fatal,
    ];

    /// Threshold used when no configuration is supplied.
    pub const DEFAULT_THRESHOLD: Level = Level::Error;

    pub const fn severity(self) -> Severity {
        match self {
            Level::Trace => 10,
            Level::Debug => 20,
            Level::Warn => 40,
            Level::Error => 50,
            Level::Fatal => 60,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Level::Trace => "trace",
            Level::Debug => "debug",
            Level::Warn => "warn",
            Level::Error => "error",
            Level::Fatal => "fatal",
        }
    }

    pub fn valid_names() -> Vec<String> {
        Level::ALL.iter().map(|level| level.as_str().to_string()).collect()
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(Level::Trace),
            "debug" => Ok(Level::Debug),
            "warn" => Ok(Level::Warn),
            "error" => Ok(Level::Error),
            "fatal" => Ok(Level::Fatal),
            _ => Err(LoggerError::InvalidLevel {
                input: s.to_string(),
                valid_levels: Level::valid_names(),
            }),
        }
    }
}

/// Registry lookup: severity for a level name, ignoring case.
pub fn severity_of(name: &str) -> Option<Severity> {
    name.parse::<Level>().ok().map(Level::severity)
}
