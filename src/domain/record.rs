use super::log_level::{Level, Severity};
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{Map, Value};

/// Wire schema version written as `"v"` on every line.
pub const SCHEMA_VERSION: u8 = 1;

/// Prefix of the placeholder used when a message cannot be represented as JSON.
pub const UNSERIALIZABLE_PREFIX: &str = "!unserializable message: ";

/// Structured fields attached to a record.
pub type Fields = Map<String, Value>;

/// One log event, built and serialized within a single emit call.
///
/// Field declaration order is the key order on the wire.
#[derive(Debug, Clone, Serialize)]
pub struct Record<'a> {
    pub time: DateTime<Utc>,
    pub hostname: &'a str,
    pub pid: u32,
    pub level: Severity,
    pub fields: Option<&'a Fields>,
    pub v: u8,
    pub name: &'a str,
    pub msg: Value,
}

impl<'a> Record<'a> {
    pub fn new(
        name: &'a str,
        hostname: &'a str,
        pid: u32,
        level: Level,
        fields: Option<&'a Fields>,
        msg: Value,
    ) -> Self {
        Self {
            time: Utc::now(),
            hostname,
            pid,
            level: level.severity(),
            fields,
            v: SCHEMA_VERSION,
            name,
            msg,
        }
    }

    /// Serializes the record as one JSON line without the trailing newline.
    ///
    /// Never fails: if the record cannot be encoded the fields are dropped and
    /// the message is replaced by a placeholder naming the encoder error.
    pub fn to_json_bytes(&self) -> Vec<u8> {
        match serde_json::to_vec(self) {
            Ok(bytes) => bytes,
            Err(e) => {
                tracing::debug!(
                    error = %e,
                    logger = self.name,
                    "record encoding failed, using placeholder"
                );
                let degraded = Record {
                    fields: None,
                    msg: unserializable(&e),
                    ..self.clone()
                };
                serde_json::to_vec(&degraded).unwrap_or_default()
            }
        }
    }
}

/// Converts an arbitrary message into a JSON value.
///
/// Values serde_json cannot represent (maps with non-string keys, types whose
/// `Serialize` impl errors) become a placeholder string. Non-finite floats
/// follow serde_json and encode as `null`.
pub fn message_value<M: Serialize + ?Sized>(message: &M) -> Value {
    serde_json::to_value(message).unwrap_or_else(|e| unserializable(&e))
}

fn unserializable(err: &serde_json::Error) -> Value {
    Value::String(format!("{UNSERIALIZABLE_PREFIX}{err}"))
}
