// Many writers sharing one Logger must never interleave bytes.
use rask_logger::{Level, Logger, MemorySink, ProcessInfo};
use serde_json::{Value, json};
use std::collections::HashSet;
use std::sync::Arc;
use std::thread;

fn shared_logger(threshold: Level) -> (Arc<Logger>, MemorySink) {
    let sink = MemorySink::new();
    let logger = Logger::with_level("svc", threshold)
        .with_sink(sink.clone())
        .with_process_info(ProcessInfo::new("concurrency-host", 7));
    (Arc::new(logger), sink)
}

#[test]
fn test_concurrent_emits_produce_intact_lines() {
    let (logger, sink) = shared_logger(Level::Trace);
    let num_threads = 16;
    let iterations_per_thread = 250;

    let handles: Vec<_> = (0..num_threads)
        .map(|thread_id| {
            let logger = Arc::clone(&logger);
            thread::spawn(move || {
                for iteration in 0..iterations_per_thread {
                    let fields = json!({"thread": thread_id, "iteration": iteration})
                        .as_object()
                        .cloned()
                        .unwrap();
                    // Vary the length so buffer reuse sees growing and shrinking lines
                    let message = "x".repeat((thread_id * 31 + iteration) % 200);
                    let _ = logger.warn_with(Some(&fields), &message);
                }
            })
        })
        .collect();

    for handle in handles {
        assert!(handle.join().is_ok());
    }

    let text = sink.to_string_lossy();
    assert!(text.ends_with('\n'));

    let lines = sink.lines();
    assert_eq!(lines.len(), num_threads * iterations_per_thread);

    let mut seen = HashSet::new();
    for line in &lines {
        let record: Value = serde_json::from_str(line)
            .unwrap_or_else(|e| panic!("corrupted line {line:?}: {e}"));
        assert_eq!(record["level"], 40);
        assert_eq!(record["name"], "svc");
        assert_eq!(record["v"], 1);

        let thread_id = record["fields"]["thread"].as_u64().unwrap() as usize;
        let iteration = record["fields"]["iteration"].as_u64().unwrap() as usize;
        let expected_len = (thread_id * 31 + iteration) % 200;
        assert_eq!(record["msg"].as_str().unwrap().len(), expected_len);
        assert!(seen.insert((thread_id, iteration)), "duplicate record {line}");
    }
    assert_eq!(seen.len(), num_threads * iterations_per_thread);
}

#[test]
fn test_concurrent_mixed_levels_respect_threshold() {
    let (logger, sink) = shared_logger(Level::Warn);

    let handles: Vec<_> = Level::ALL
        .into_iter()
        .filter(|level| *level != Level::Fatal)
        .map(|level| {
            let logger = Arc::clone(&logger);
            thread::spawn(move || {
                for i in 0..100 {
                    let _ = logger.log(level, None, &i);
                }
            })
        })
        .collect();

    for handle in handles {
        assert!(handle.join().is_ok());
    }

    let lines = sink.lines();
    // warn and error pass, trace and debug are filtered
    assert_eq!(lines.len(), 200);
    for line in &lines {
        let record: Value = serde_json::from_str(line).unwrap();
        let level = record["level"].as_u64().unwrap();
        assert!(level == 40 || level == 50, "unexpected level in {line}");
    }
}

#[test]
fn test_independent_loggers_do_not_share_output() {
    let (first, first_sink) = shared_logger(Level::Trace);
    let second_sink = MemorySink::new();
    let second = Arc::new(Logger::with_level("other", Level::Trace).with_sink(second_sink.clone()));

    let a = {
        let first = Arc::clone(&first);
        thread::spawn(move || {
            for _ in 0..50 {
                let _ = first.error("from first");
            }
        })
    };
    let b = {
        let second = Arc::clone(&second);
        thread::spawn(move || {
            for _ in 0..50 {
                let _ = second.error("from second");
            }
        })
    };
    assert!(a.join().is_ok());
    assert!(b.join().is_ok());

    assert_eq!(first_sink.lines().len(), 50);
    assert_eq!(second_sink.lines().len(), 50);
    assert!(first_sink.lines().iter().all(|l| l.contains("from first")));
    assert!(second_sink.lines().iter().all(|l| l.contains("\"name\":\"other\"")));
}
