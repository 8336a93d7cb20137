//! Output capability: the sink a formatted message is written to

use super::error::Result;

/// Destination for formatted messages.
///
/// Outputs are shared between loggers through `Arc`, so `write` takes `&self`;
/// implementations guard their state with interior mutability.
pub trait Output: Send + Sync {
    fn write(&self, message: &str) -> Result<()>;

    fn flush(&self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str;
}
