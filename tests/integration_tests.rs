//! Integration tests for the logging facility
//!
//! These tests verify:
//! - End-to-end dispatch through real file sinks
//! - Level filtering and cumulative appends
//! - Failure strategy behavior (suppress and escalate)
//! - Diagnostic sink interception
//! - Concurrent appends to a shared sink

use fanlog::prelude::*;
use fanlog::context;
use std::fs;
use std::sync::Arc;
use std::thread;
use tempfile::TempDir;

#[test]
fn test_end_to_end_line_format() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("app.log");

    let handler = StreamHandler::new(&log_file, LogLevel::Info);
    let logger = Logger::new(vec![Box::new(handler)]);

    logger
        .info("Hello {name}", context! { "name" => "John" })
        .expect("log call failed");

    let content = fs::read_to_string(&log_file).expect("Failed to read log file");
    assert!(content.starts_with('['));
    assert!(content.ends_with("] info: Hello John {\"name\":\"John\"}\n"));
    assert_eq!(content.lines().count(), 1);
}

#[test]
fn test_end_to_end_empty_context_has_no_blob() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("app.log");

    let handler = StreamHandler::new(&log_file, LogLevel::Info);
    let logger = Logger::new(vec![Box::new(handler)]);

    logger.info("Hello John", LogContext::new()).unwrap();

    let content = fs::read_to_string(&log_file).unwrap();
    assert!(content.ends_with("] info: Hello John\n"));
    assert!(!content.contains('{'));
}

#[test]
fn test_records_below_minimum_write_zero_bytes() {
    let temp_dir = TempDir::new().unwrap();
    let log_file = temp_dir.path().join("app.log");

    let handler = StreamHandler::new(&log_file, LogLevel::Error);
    let logger = Logger::new(vec![Box::new(handler)]);

    logger.debug("dropped", LogContext::new()).unwrap();
    logger.info("dropped", LogContext::new()).unwrap();
    logger.warning("dropped", LogContext::new()).unwrap();

    assert!(!log_file.exists());

    logger.error("kept", LogContext::new()).unwrap();
    logger.emergency("kept too", LogContext::new()).unwrap();

    let content = fs::read_to_string(&log_file).unwrap();
    assert_eq!(content.lines().count(), 2);
}

#[test]
fn test_multiple_handlers_each_receive_record() {
    let temp_dir = TempDir::new().unwrap();
    let file_a = temp_dir.path().join("a.log");
    let file_b = temp_dir.path().join("b.log");

    let logger = Logger::new(vec![
        Box::new(StreamHandler::new(&file_a, LogLevel::Debug)),
        Box::new(StreamHandler::new(&file_b, LogLevel::Error)),
    ]);

    logger.notice("everywhere", LogContext::new()).unwrap();
    logger.critical("severe", LogContext::new()).unwrap();

    let a = fs::read_to_string(&file_a).unwrap();
    let b = fs::read_to_string(&file_b).unwrap();
    assert_eq!(a.lines().count(), 2);
    assert_eq!(b.lines().count(), 1);
    assert!(b.contains("critical: severe"));
}

#[test]
fn test_json_formatter_end_to_end() {
    let temp_dir = TempDir::new().unwrap();
    let log_file = temp_dir.path().join("app.jsonl");

    let handler = StreamHandler::new(&log_file, LogLevel::Debug)
        .with_formatter(Box::new(JsonFormatter::new()));
    let logger = Logger::new(vec![Box::new(handler)]);

    logger
        .warning(
            "User {user} failed login",
            context! { "user" => "alice", "attempt" => 3 },
        )
        .unwrap();

    let content = fs::read_to_string(&log_file).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(content.trim_end()).unwrap();
    assert_eq!(parsed["level"], "warning");
    assert_eq!(parsed["message"], "User alice failed login");
    assert_eq!(parsed["context"]["user"], "alice");
    assert_eq!(parsed["context"]["attempt"], 3);
    assert!(parsed["timestamp"].is_string());
}

#[test]
fn test_suppressed_failure_reaches_diagnostics_only() {
    let temp_dir = TempDir::new().unwrap();
    let diagnostics = MemoryDiagnostics::new();

    // A directory path cannot be opened for appending
    let handler = StreamHandler::new(temp_dir.path(), LogLevel::Debug).with_failure_strategy(
        Box::new(SuppressFailureStrategy::with_diagnostics(Arc::new(
            diagnostics.clone(),
        ))),
    );
    let logger = Logger::new(vec![Box::new(handler)]);

    assert!(logger.info("msg", LogContext::new()).is_ok());

    let reports = diagnostics.reports();
    assert_eq!(reports.len(), 1);
    assert!(reports[0].starts_with("Failed to write to path: "));
    assert!(reports[0].contains(&temp_dir.path().display().to_string()));
}

#[test]
fn test_escalated_failure_aborts_log_call() {
    let temp_dir = TempDir::new().unwrap();
    let working_file = temp_dir.path().join("late.log");

    let failing = StreamHandler::new(temp_dir.path(), LogLevel::Debug)
        .with_failure_strategy(Box::new(EscalateFailureStrategy::new()));
    let later = StreamHandler::new(&working_file, LogLevel::Debug);

    let logger = Logger::new(vec![Box::new(failing), Box::new(later)]);

    let err = logger.info("msg", LogContext::new()).unwrap_err();
    assert!(matches!(err, LoggerError::SinkWrite { .. }));

    // The failing handler aborted the call before the second handler ran
    assert!(!working_file.exists());
}

#[test]
fn test_zero_handler_logger_is_inert() {
    let logger = Logger::new(Vec::new());
    for _ in 0..100 {
        logger
            .debug("nothing happens {x}", context! { "x" => 1 })
            .unwrap();
    }
}

#[test]
fn test_concurrent_appends_do_not_interleave() {
    let temp_dir = TempDir::new().unwrap();
    let log_file = temp_dir.path().join("shared.log");

    const THREADS: usize = 4;
    const RECORDS: usize = 50;

    let mut joins = Vec::new();
    for t in 0..THREADS {
        let path = log_file.clone();
        joins.push(thread::spawn(move || {
            let handler = StreamHandler::new(path, LogLevel::Debug);
            let logger = Logger::new(vec![Box::new(handler)]);
            let payload = "x".repeat(512);
            for i in 0..RECORDS {
                logger
                    .info(
                        "{payload}",
                        context! { "payload" => format!("t{}-r{}-{}", t, i, payload) },
                    )
                    .unwrap();
            }
        }));
    }
    for join in joins {
        join.join().expect("writer thread panicked");
    }

    let content = fs::read_to_string(&log_file).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), THREADS * RECORDS);

    // Every line is one complete record, untouched by other writers
    for line in lines {
        assert!(line.contains("] info: t"), "interleaved line: {}", line);
        assert!(line.ends_with('}'), "truncated line: {}", line);
    }
}

#[test]
fn test_interpolation_leaves_structured_values_verbatim() {
    let temp_dir = TempDir::new().unwrap();
    let log_file = temp_dir.path().join("app.log");

    let handler = StreamHandler::new(&log_file, LogLevel::Debug);
    let logger = Logger::new(vec![Box::new(handler)]);

    logger
        .info(
            "ids={ids} user={user}",
            context! { "ids" => vec![1, 2], "user" => "bob" },
        )
        .unwrap();

    let content = fs::read_to_string(&log_file).unwrap();
    assert!(content.contains("ids={ids} user=bob"));
    assert!(content.contains("\"ids\":[1,2]"));
}
