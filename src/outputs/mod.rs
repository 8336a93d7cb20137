//! Output implementations

pub mod console;
pub mod file;
pub mod memory;

pub use console::{ConsoleOutput, ConsoleStream};
pub use file::FileOutput;
pub use memory::MemoryOutput;

pub use crate::core::Output;
