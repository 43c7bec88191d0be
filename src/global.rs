//! Process-wide debug logger
//!
//! One shared [`Debugger`] for the whole process, created on first use. By default it
//! logs to `<cwd>/Debugg`; call [`init`] before anything else logs to start it from a
//! [`LogConfig`] instead. Once created, the global debugger is never replaced.
//!
//! Usage: `logkeep::debug_log!("loaded {} items", count)?;`

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use crate::config::LogConfig;
use crate::debugger::Debugger;
use crate::error::Result;

static GLOBAL: OnceLock<Debugger> = OnceLock::new();

/// Get the global debugger, creating it with defaults if needed
pub fn global() -> &'static Debugger {
    GLOBAL.get_or_init(Debugger::new)
}

/// Create the global debugger from a config
///
/// Returns false if the global debugger already existed; the config is ignored then.
pub fn init(config: &LogConfig) -> bool {
    let mut installed = false;
    GLOBAL.get_or_init(|| {
        installed = true;
        Debugger::from_config(config)
    });
    installed
}

/// Set the global log destination, see [`Debugger::set_directory`]
pub fn set_directory(directory: Option<&Path>, folder_name: Option<&str>) -> Result<PathBuf> {
    global().set_directory(directory, folder_name)
}

/// Set the global retention threshold, see [`Debugger::set_max_logs`]
pub fn set_max_logs(max_logs: usize) {
    global().set_max_logs(max_logs);
}

/// Write a message to the global log file
pub fn log(message: &str) -> Result<()> {
    global().log(message)
}

/// Write an error-tagged message to the global log file
pub fn log_error(message: &str) -> Result<()> {
    global().log_error(message)
}

/// Get the file the global debugger is writing, if any
pub fn active_file() -> Option<PathBuf> {
    GLOBAL.get().and_then(Debugger::active_file)
}

/// Log a formatted message through the global debugger - use like `format!`
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        $crate::global::log(&format!($($arg)*))
    };
}

/// Log a formatted, error-tagged message through the global debugger
#[macro_export]
macro_rules! debug_error {
    ($($arg:tt)*) => {
        $crate::global::log_error(&format!($($arg)*))
    };
}
