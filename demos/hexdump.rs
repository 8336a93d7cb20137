//! Hexdump example
//!
//! Dumps a byte buffer with different indents and group sizes.
//!
//! Run with: cargo run --example hexdump

use rust_logger_hierarchy::hexdump;
use rust_logger_hierarchy::prelude::*;
use std::sync::Arc;

/// Prints a dump one row per line; the dump itself has no separators
fn print_rows(dump: &str, rows: usize) {
    let width = dump.len() / rows.max(1);
    for row in 0..rows {
        println!("{}", &dump[row * width..(row + 1) * width]);
    }
}

fn main() -> Result<()> {
    println!("=== Rust Logger Hierarchy - Hexdump Example ===\n");

    let output = Arc::new(MemoryOutput::new());
    let logger = Logger::builder("usb")
        .level(Severity::Debug)
        .formatter(Arc::new(PlainFormatter))
        .output(output.clone())
        .build();

    let packet: Vec<u8> = (0u8..40).chain(*b"Hello, hexdump!").collect();
    let rows = packet.len().div_ceil(16);

    println!("1. Default layout:");
    hexdump!(logger, 1, packet);
    print_rows(&output.take(), rows);

    println!("\n2. Indented by 4, grouped by 4 bytes:");
    hexdump!(logger, 2, packet, indent = 4, group = 4);
    print_rows(&output.take(), rows);

    println!("\n3. Filtered when the logger is above DEBUG:");
    logger.set_level(Severity::Info);
    hexdump!(logger, 3, packet);
    println!("{} writes in total, none from this call", output.write_count());

    println!("\n4. As a plain string:");
    print_rows(&format_hexdump(b"short", &HexDumpOptions::default()), 1);

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
