//! logkeep - file-based debug logger
//!
//! Writes timestamped, indexed lines to one log file per session and keeps only the
//! most recent log files in the log folder.

pub mod config;
pub mod debugger;
pub mod error;
pub mod global;
pub mod logging;

pub use config::LogConfig;
pub use debugger::Debugger;
pub use error::{LogError, Result};
