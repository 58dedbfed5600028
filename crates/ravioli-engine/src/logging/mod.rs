//! Logging utilities.
//!
//! Logger initialization lives here so the demo binary and any test harness
//! configure `env_logger` the same way.

mod init;

pub use init::{init_logging, LoggingConfig};
