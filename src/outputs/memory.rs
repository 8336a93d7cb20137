//! In-memory output for capturing log traffic

use crate::core::{Output, Result};
use parking_lot::Mutex;

/// Appends every write verbatim, with no separator, to a shared buffer
#[derive(Debug, Default)]
pub struct MemoryOutput {
    buffer: Mutex<String>,
    writes: Mutex<usize>,
}

impl MemoryOutput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far
    pub fn contents(&self) -> String {
        self.buffer.lock().clone()
    }

    /// Number of `write` calls so far, including empty writes
    pub fn write_count(&self) -> usize {
        *self.writes.lock()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.lock().is_empty()
    }

    /// Return the buffer and leave it empty
    pub fn take(&self) -> String {
        std::mem::take(&mut *self.buffer.lock())
    }

    pub fn clear(&self) {
        self.buffer.lock().clear();
        *self.writes.lock() = 0;
    }
}

impl Output for MemoryOutput {
    fn write(&self, message: &str) -> Result<()> {
        self.buffer.lock().push_str(message);
        *self.writes.lock() += 1;
        Ok(())
    }

    fn name(&self) -> &str {
        "memory"
    }
}
