//! Fixed-width hexadecimal memory dumps
//!
//! Each row covers 16 bytes:
//!
//! ```text
//! <indent>00000010  61 6c 75 65 76 61 6c 75 65 76 61 6c 75 65 76 61   aluevaluevalueva
//! ```
//!
//! Hex digits are grouped `group_size` bytes at a time, every group followed
//! by one space, then two more spaces separate the hex field from the ASCII
//! field. When 16 is not a multiple of `group_size` the trailing partial group
//! is followed by a space as well, so with `group_size` 5 the last byte of a
//! full row is followed by three spaces (`... 76   value...`), not two. A short
//! final row is padded with spaces so both fields keep the width of a full
//! row. Rows are concatenated without a separator.

use crate::core::{Logger, Severity};
use std::fmt::Write;

pub const BYTES_PER_ROW: usize = 16;

/// Stand-in for bytes outside printable ASCII in the ASCII field
const NON_PRINTABLE: char = '.';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HexDumpOptions {
    /// Spaces before every row's offset column
    pub indent: usize,
    /// Bytes per hex group; 0 is treated as 1
    pub group_size: usize,
}

impl HexDumpOptions {
    pub fn new() -> Self {
        Self {
            indent: 0,
            group_size: 1,
        }
    }

    #[must_use]
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    #[must_use]
    pub fn with_group_size(mut self, group_size: usize) -> Self {
        self.group_size = group_size;
        self
    }
}

impl Default for HexDumpOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Render `data` as offset/hex/ASCII rows
pub fn format_hexdump(data: &[u8], options: &HexDumpOptions) -> String {
    let group_size = options.group_size.max(1);
    let groups_per_row = BYTES_PER_ROW.div_ceil(group_size);
    let row_width =
        options.indent + 10 + BYTES_PER_ROW * 2 + groups_per_row + 2 + BYTES_PER_ROW;

    let mut dump = String::with_capacity(data.len().div_ceil(BYTES_PER_ROW) * row_width);
    for (row, chunk) in data.chunks(BYTES_PER_ROW).enumerate() {
        write_row(&mut dump, row * BYTES_PER_ROW, chunk, options.indent, group_size);
    }
    dump
}

fn write_row(dump: &mut String, offset: usize, chunk: &[u8], indent: usize, group_size: usize) {
    dump.extend(std::iter::repeat_n(' ', indent));
    // Writing into a String cannot fail
    let _ = write!(dump, "{:08x}  ", offset);

    for slot in 0..BYTES_PER_ROW {
        match chunk.get(slot) {
            Some(byte) => {
                let _ = write!(dump, "{:02x}", byte);
            }
            None => dump.push_str("  "),
        }
        if (slot + 1) % group_size == 0 || slot + 1 == BYTES_PER_ROW {
            dump.push(' ');
        }
    }
    dump.push_str("  ");

    for slot in 0..BYTES_PER_ROW {
        dump.push(match chunk.get(slot) {
            Some(&byte) if byte.is_ascii_graphic() || byte == b' ' => byte as char,
            Some(_) => NON_PRINTABLE,
            None => ' ',
        });
    }
}

/// Log a dump of `data` at [`Severity::Debug`] as a single message
///
/// Empty `data` logs nothing.
///
/// ```
/// use rust_logger_hierarchy::prelude::*;
/// use std::sync::Arc;
///
/// let output = Arc::new(MemoryOutput::new());
/// let logger = Logger::builder("usb")
///     .level(Severity::Debug)
///     .formatter(Arc::new(PlainFormatter))
///     .output(output.clone())
///     .build();
///
/// log_hexdump(&logger, 1, b"value", &HexDumpOptions::default());
/// assert!(output.contents().starts_with("00000000  76 61 6c 75 65 "));
/// ```
pub fn log_hexdump(logger: &Logger, id: u32, data: &[u8], options: &HexDumpOptions) {
    if data.is_empty() || !logger.need_log(Severity::Debug) {
        return;
    }
    logger.log(Severity::Debug, id, &format_hexdump(data, options));
}
