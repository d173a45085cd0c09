//! Logging utilities.
//!
//! Centralizes logger initialization. Library code logs through the `log`
//! facade only; nothing here runs unless an application opts in.

mod init;

pub use init::{LogConfig, init_logging};
