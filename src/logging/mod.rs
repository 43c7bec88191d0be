//! Logging system for logkeep
//!
//! Provides the per-session log file lifecycle, count-based retention of old log
//! files, the line writer, and diagnostics setup for the crate's own tracing output.

mod diagnostics;
mod file_writer;
mod manager;
mod retention;

pub use diagnostics::init_diagnostics;
pub use file_writer::{format_line, LogWriter, LINE_TIMESTAMP_FORMAT};
pub use manager::{
    create_log_file, create_log_file_path, Destination, LogManager, DEFAULT_FOLDER_NAME,
};
pub use retention::{
    evict_excess_logs, is_log_file_name, list_log_files, LogFileEntry, DEFAULT_MAX_LOGS,
};

/// File name prefix shared by every log file
pub const LOG_FILE_PREFIX: &str = "DebugLog_";

/// File name extension shared by every log file
pub const LOG_FILE_EXTENSION: &str = ".txt";
