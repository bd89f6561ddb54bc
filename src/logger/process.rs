/// Host identity stamped on every record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessInfo {
    pub hostname: String,
    pub pid: u32,
}

impl ProcessInfo {
    pub fn new(hostname: impl Into<String>, pid: u32) -> Self {
        Self {
            hostname: hostname.into(),
            pid,
        }
    }

    /// Resolves the current host and process.
    ///
    /// A failed or non-UTF-8 hostname lookup yields an empty hostname.
    pub fn current() -> Self {
        let hostname = hostname::get()
            .ok()
            .and_then(|h| h.into_string().ok())
            .unwrap_or_default();

        Self {
            hostname,
            pid: std::process::id(),
        }
    }
}
