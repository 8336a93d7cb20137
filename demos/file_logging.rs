//! File logging example
//!
//! Loads a JSON logging configuration that sends one subtree to a file as
//! JSON lines while everything else goes to the console.
//!
//! Run with: cargo run --example file_logging

use rust_logger_hierarchy::prelude::*;

const CONFIG: &str = r#"{
    "level": "notice",
    "format": "text",
    "output": { "type": "stdout" },
    "loggers": {
        "audit": {
            "level": "info",
            "format": "json",
            "output": { "type": "file", "path": "audit.log" }
        }
    }
}"#;

fn main() -> Result<()> {
    println!("=== Rust Logger Hierarchy - File Logging Example ===\n");

    let config = LoggingConfig::from_json_str(CONFIG)?;
    let registry = LoggerRegistry::from_config(&config)?;

    registry.get("app").notice(1, "Application started");
    registry.get("app").info(2, "Hidden: app is at NOTICE");

    for user in ["alice", "bob"] {
        log_func(
            &registry.get("audit.login"),
            Severity::Info,
            10,
            "User signed in",
            &[ParameterPair::new("user", user)],
        );
    }

    registry.flush()?;
    println!("Audit entries written to audit.log");
    println!("\n=== Example completed successfully! ===");

    Ok(())
}
