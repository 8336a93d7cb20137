//! Console output

use crate::core::{Output, Result};
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleStream {
    Stdout,
    Stderr,
}

/// Writes each message as one line on stdout or stderr
#[derive(Debug, Clone)]
pub struct ConsoleOutput {
    stream: ConsoleStream,
}

impl ConsoleOutput {
    pub fn new(stream: ConsoleStream) -> Self {
        Self { stream }
    }

    pub fn stdout() -> Self {
        Self::new(ConsoleStream::Stdout)
    }

    pub fn stderr() -> Self {
        Self::new(ConsoleStream::Stderr)
    }

    pub fn stream(&self) -> ConsoleStream {
        self.stream
    }
}

impl Default for ConsoleOutput {
    fn default() -> Self {
        Self::stderr()
    }
}

impl Output for ConsoleOutput {
    fn write(&self, message: &str) -> Result<()> {
        match self.stream {
            ConsoleStream::Stdout => writeln!(std::io::stdout().lock(), "{}", message)?,
            ConsoleStream::Stderr => writeln!(std::io::stderr().lock(), "{}", message)?,
        }
        Ok(())
    }

    fn flush(&self) -> Result<()> {
        match self.stream {
            ConsoleStream::Stdout => std::io::stdout().flush()?,
            ConsoleStream::Stderr => std::io::stderr().flush()?,
        }
        Ok(())
    }

    fn name(&self) -> &str {
        match self.stream {
            ConsoleStream::Stdout => "stdout",
            ConsoleStream::Stderr => "stderr",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_console_streams() {
        assert_eq!(ConsoleOutput::stdout().name(), "stdout");
        assert_eq!(ConsoleOutput::default().stream(), ConsoleStream::Stderr);

        let output = ConsoleOutput::stderr();
        assert!(output.write("console output test").is_ok());
        assert!(output.flush().is_ok());
    }
}
