//! Logger setup for shapefeed binaries.
//!
//! Library code only talks to the `log` facade; [`init_logging`] wires an
//! `env_logger` backend behind it.

mod init;

pub use init::{init_logging, LoggingConfig};
