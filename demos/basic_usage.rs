//! Basic logger usage example
//!
//! Demonstrates a small logger tree where children inherit the root's
//! formatter and output, and override levels per subtree.
//!
//! Run with: cargo run --example basic_usage

use rust_logger_hierarchy::prelude::*;
use rust_logger_hierarchy::{debug, info, warning};
use std::sync::Arc;

fn main() -> Result<()> {
    println!("=== Rust Logger Hierarchy - Basic Usage Example ===\n");

    let registry = LoggerRegistry::with_root(
        Arc::new(TextFormatter::new().with_colors(true)),
        Arc::new(ConsoleOutput::stdout()),
    );
    registry.root().set_level(Severity::Info);

    let http = registry.get("net.http");
    let db = registry.get("db");

    println!("1. Everything inherits the root level (INFO):");
    info!(http, 1, "Listening", "port" => 8080);
    debug!(http, 2, "Hidden: below INFO");
    warning!(db, 3, "Slow query", "ms" => 1250);

    println!("\n2. Raising verbosity for the 'net' subtree only:");
    registry.get("net").set_level(Severity::Dump);
    debug!(http, 4, "Now visible", "headers" => 12);
    debug!(db, 5, "Still hidden");

    println!("\n3. Giving 'db' its own output:");
    db.set_output(Arc::new(ConsoleOutput::stderr()));
    db.critical(6, "Connection pool exhausted (on stderr)");

    registry.flush()?;
    println!("\n=== Example completed successfully! ===");

    Ok(())
}
