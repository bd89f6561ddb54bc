use parking_lot::Mutex;
use std::io::{self, Write};
use std::sync::Arc;

/// Destination a `Logger` writes serialized lines to.
pub type BoxedSink = Box<dyn Write + Send>;

pub fn stderr_sink() -> BoxedSink {
    Box::new(io::stderr())
}

/// In-memory sink whose clones share one buffer.
///
/// Hand one clone to a `Logger` and keep another to inspect what was written.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    bytes: Arc<Mutex<Vec<u8>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn to_string_lossy(&self) -> String {
        String::from_utf8_lossy(&self.bytes.lock()).into_owned()
    }

    /// Newline-terminated lines written so far, without the terminator.
    pub fn lines(&self) -> Vec<String> {
        self.to_string_lossy().lines().map(str::to_owned).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.lock().is_empty()
    }
}

impl Write for MemorySink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.bytes.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_contents() {
        let sink = MemorySink::new();
        let mut writer = sink.clone();

        writer.write_all(b"one\ntwo\n").unwrap();

        assert_eq!(sink.lines(), vec!["one", "two"]);
        assert_eq!(sink.to_string_lossy(), "one\ntwo\n");
    }

    #[test]
    fn test_new_sink_is_empty() {
        let sink = MemorySink::new();
        assert!(sink.is_empty());
        assert!(sink.lines().is_empty());
    }
}
