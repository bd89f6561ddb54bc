//! The leveled JSON logger.
//!
//! A `Logger` filters by severity, turns each accepted call into a `Record`,
//! serializes it outside the lock and writes the line to its sink while
//! holding the lock. The write buffer behind the lock is reused between
//! calls.

pub mod emission;
pub mod process;
pub mod sink;

pub use emission::Emission;
pub use process::ProcessInfo;
pub use sink::{BoxedSink, MemorySink, stderr_sink};

use crate::domain::{Fields, Level, LoggerError, Record, message_value};
use parking_lot::Mutex;
use serde::Serialize;
use std::fmt;
use std::io::Write;

struct WriteState {
    buffer: Vec<u8>,
    sink: BoxedSink,
}

pub struct Logger {
    name: String,
    threshold: Level,
    process: ProcessInfo,
    state: Mutex<WriteState>,
}

macro_rules! level_methods {
    ($($level:ident => $plain:ident, $with:ident;)*) => {
        $(
            #[doc = concat!("Emits `message` at `", stringify!($level), "` without fields.")]
            pub fn $plain<M: Serialize + ?Sized>(&self, message: &M) -> Emission {
                self.log(Level::$level, None, message)
            }

            #[doc = concat!("Emits `message` at `", stringify!($level), "` with optional fields.")]
            pub fn $with<M: Serialize + ?Sized>(
                &self,
                fields: Option<&Fields>,
                message: &M,
            ) -> Emission {
                self.log(Level::$level, fields, message)
            }
        )*
    };
}

impl Logger {
    /// Builds a logger from an optional level name such as the value of
    /// `LOG_LEVEL`. `None` selects the default threshold (`error`).
    pub fn new(name: impl Into<String>, configured_level: Option<&str>) -> Result<Self, LoggerError> {
        let threshold = match configured_level {
            Some(raw) => raw.parse::<Level>()?,
            None => Level::DEFAULT_THRESHOLD,
        };
        Ok(Self::with_level(name, threshold))
    }

    /// Builds a logger with an already-resolved threshold, writing to stderr.
    pub fn with_level(name: impl Into<String>, threshold: Level) -> Self {
        Self {
            name: name.into(),
            threshold,
            process: ProcessInfo::current(),
            state: Mutex::new(WriteState {
                buffer: Vec::new(),
                sink: stderr_sink(),
            }),
        }
    }

    pub fn with_sink<W: Write + Send + 'static>(mut self, sink: W) -> Self {
        self.state.get_mut().sink = Box::new(sink);
        self
    }

    pub fn with_process_info(mut self, process: ProcessInfo) -> Self {
        self.process = process;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn threshold(&self) -> Level {
        self.threshold
    }

    #[inline]
    pub fn is_enabled(&self, level: Level) -> bool {
        level.severity() >= self.threshold.severity()
    }

    /// Emits one record at `level`.
    ///
    /// Filtered calls return before touching the clock, the allocator or the
    /// lock. Accepted calls always write, even when the message had to be
    /// replaced by a placeholder, and fatal calls always return
    /// `Emission::Fatal`.
    pub fn log<M: Serialize + ?Sized>(
        &self,
        level: Level,
        fields: Option<&Fields>,
        message: &M,
    ) -> Emission {
        if !self.is_enabled(level) {
            return Emission::Filtered;
        }

        let record = Record::new(
            &self.name,
            &self.process.hostname,
            self.process.pid,
            level,
            fields,
            message_value(message),
        );
        let line = record.to_json_bytes();
        self.output(&line);

        if level == Level::Fatal {
            Emission::Fatal
        } else {
            Emission::Written
        }
    }

    level_methods! {
        Trace => trace, trace_with;
        Debug => debug, debug_with;
        Warn => warn, warn_with;
        Error => error, error_with;
        Fatal => fatal, fatal_with;
    }

    /// Current capacity of the reusable write buffer.
    pub fn buffer_capacity(&self) -> usize {
        self.state.lock().buffer.capacity()
    }

    /// Writes one preformatted line to the sink through the locked buffer,
    /// adding the newline terminator when `line` lacks one. No filtering or
    /// formatting is applied.
    pub fn output(&self, line: &[u8]) {
        let result = {
            let mut state = self.state.lock();
            let WriteState { buffer, sink } = &mut *state;
            buffer.clear();
            buffer.extend_from_slice(line);
            if !line.ends_with(b"\n") {
                buffer.push(b'\n');
            }
            sink.write_all(buffer).and_then(|()| sink.flush())
        };

        // Best effort: the caller never sees a dropped line.
        if let Err(e) = result {
            tracing::debug!(error = %e, logger = %self.name, "dropped log line, sink write failed");
        }
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("name", &self.name)
            .field("threshold", &self.threshold)
            .field("process", &self.process)
            .finish_non_exhaustive()
    }
}
