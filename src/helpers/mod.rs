//! Message composition helpers
//!
//! - [`ParameterPair`]: `key='value'` tails appended to a base message
//! - [`log_func`]: compose a message with parameters and log it
//! - [`format_hexdump`] / [`log_hexdump`]: offset/hex/ASCII memory dumps

pub mod hexdump;
pub mod log_func;
pub mod parameter;

pub use hexdump::{format_hexdump, log_hexdump, HexDumpOptions, BYTES_PER_ROW};
pub use log_func::{compose_message, log_func};
pub use parameter::{ParameterPair, DEFAULT_DELIMITER};
