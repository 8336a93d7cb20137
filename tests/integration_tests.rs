//! Integration tests for the logger hierarchy
//!
//! These tests verify:
//! - File output through an inherited root configuration
//! - Registry setup from JSON configuration
//! - Output failure handling
//! - Thread safety of a shared logger tree

use rust_logger_hierarchy::core::error::{LoggerError, Result};
use rust_logger_hierarchy::prelude::*;
use rust_logger_hierarchy::{critical, debug, hexdump, notice};
use std::fs;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tempfile::TempDir;

#[test]
fn test_file_output_through_hierarchy() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("hierarchy.log");

    let output = Arc::new(FileOutput::new(&log_file).expect("Failed to create output"));
    let registry = LoggerRegistry::with_root(
        Arc::new(TextFormatter::new().without_timestamp()),
        output,
    );
    registry.root().set_level(Severity::Notice);
    registry.get("net").set_level(Severity::Debug);

    registry.get("net.http").debug(10, "request received");
    registry.get("db").debug(11, "query planned");
    registry.get("db").warning(12, "slow query");
    notice!(registry.get("net"), 13, "peer connected", "addr" => "10.0.0.2");

    registry.flush().expect("Failed to flush");

    let content = fs::read_to_string(&log_file).expect("Failed to read log file");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(
        lines,
        vec![
            "[DEBUG   ] net.http(10): request received",
            "[WARNING ] db(12): slow query",
            "[NOTICE  ] net(13): peer connected, addr='10.0.0.2'",
        ]
    );
}

#[test]
fn test_registry_from_config_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let audit_file = temp_dir.path().join("audit.log");
    let config_file = temp_dir.path().join("logging.json");

    let config_json = serde_json::json!({
        "level": "error",
        "format": "plain",
        "output": { "type": "memory" },
        "loggers": {
            "audit": {
                "level": "info",
                "format": "json",
                "output": { "type": "file", "path": audit_file }
            }
        }
    });
    fs::write(&config_file, config_json.to_string()).expect("Failed to write config");

    let config = LoggingConfig::from_file(&config_file).expect("Failed to load config");
    let registry = LoggerRegistry::from_config(&config).expect("Failed to apply config");

    registry.get("audit.login").info(1, "user signed in");
    registry.get("audit.login").debug(2, "session details");
    registry.flush().expect("Failed to flush");

    let content = fs::read_to_string(&audit_file).expect("Failed to read audit log");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 1);

    let parsed: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
    assert_eq!(parsed["logger"], "audit.login");
    assert_eq!(parsed["level"], "INFO");
    assert_eq!(parsed["id"], 1);
    assert_eq!(parsed["message"], "user signed in");
}

#[test]
fn test_config_with_bad_output_path() {
    let config = LoggingConfig::from_json_str(
        r#"{ "loggers": { "x": { "output": { "type": "file", "path": "/nonexistent/dir/x.log" } } } }"#,
    )
    .unwrap();

    let err = LoggerRegistry::from_config(&config).err().unwrap();
    assert!(matches!(err, LoggerError::PathAccess { .. }));
}

#[test]
fn test_output_failure_is_contained() {
    struct FailingOutput {
        attempts: AtomicUsize,
    }

    impl Output for FailingOutput {
        fn write(&self, _message: &str) -> Result<()> {
            self.attempts.fetch_add(1, Ordering::Relaxed);
            Err(LoggerError::rejected("failing", "simulated failure"))
        }

        fn name(&self) -> &str {
            "failing"
        }
    }

    let output = Arc::new(FailingOutput {
        attempts: AtomicUsize::new(0),
    });
    let logger = Logger::builder("fragile")
        .formatter(Arc::new(PlainFormatter))
        .output(output.clone())
        .build();

    // log reports on stderr and returns normally
    for _ in 0..5 {
        logger.critical(1, "Test message");
    }
    assert_eq!(output.attempts.load(Ordering::Relaxed), 5);

    let err = logger.try_log(Severity::Critical, 1, "again").unwrap_err();
    assert!(matches!(err, LoggerError::Rejected { .. }));
}

#[test]
fn test_concurrent_logging() {
    let output = Arc::new(MemoryOutput::new());
    let registry = Arc::new(LoggerRegistry::with_root(
        Arc::new(|_: &str, _: Severity, _: u32, message: &str| format!("{}\n", message)),
        output.clone(),
    ));
    registry.root().set_level(Severity::Info);

    let mut handles = vec![];
    for thread_id in 0..5 {
        let registry = Arc::clone(&registry);
        let handle = std::thread::spawn(move || {
            let logger = registry.get(&format!("worker.{}", thread_id));
            for i in 0..10 {
                critical!(logger, i, "tick", "thread" => thread_id, "i" => i);
                debug!(logger, i, "filtered");
            }
        });
        handles.push(handle);
    }

    for handle in handles {
        handle.join().expect("Thread panicked");
    }

    let content = output.contents();
    assert_eq!(content.lines().count(), 50, "5 threads * 10 messages");
    assert!(content.contains("tick, thread='3', i='9'"));
    assert_eq!(registry.names().len(), 6);
}

#[test]
fn test_level_changes_visible_across_threads() {
    let output = Arc::new(MemoryOutput::new());
    let root = Logger::builder("root")
        .formatter(Arc::new(PlainFormatter))
        .output(output.clone())
        .build();
    let child = Logger::with_parent("child", &root);

    let child_in_thread = Arc::clone(&child);
    std::thread::spawn(move || child_in_thread.info(1, "before"))
        .join()
        .expect("Thread panicked");

    root.set_level(Severity::Info);

    let child_in_thread = Arc::clone(&child);
    std::thread::spawn(move || child_in_thread.info(2, "after"))
        .join()
        .expect("Thread panicked");

    assert_eq!(output.contents(), "after");
}

#[test]
fn test_hexdump_through_registry() {
    let output = Arc::new(MemoryOutput::new());
    let registry = LoggerRegistry::with_root(Arc::new(PlainFormatter), output.clone());
    registry.get("usb").set_level(Severity::Debug);

    let frame = [0xde_u8, 0xad, 0xbe, 0xef];
    hexdump!(registry.get("usb.rx"), 3, frame, indent = 2);
    hexdump!(registry.get("usb.rx"), 3, frame[..0]);

    assert_eq!(output.write_count(), 1);
    assert!(output.contents().starts_with("  00000000  de ad be ef "));
    assert!(output.contents().ends_with("....            "));
}
