//! Line writer for the active log file
//!
//! Each append opens the target in append mode, writes a single line, flushes and
//! closes it again. No file handle is kept between calls, so a tailing reader or an
//! external rotation always sees a complete file.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};

use crate::error::{LogError, Result};

/// Timestamp format used at the start of every log line
pub const LINE_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3f";

/// Format a single log line (without the trailing newline)
///
/// Format: `<timestamp> :<index>: <message>`
pub fn format_line(timestamp: &DateTime<Local>, index: u64, message: &str) -> String {
    format!(
        "{} :{}: {}",
        timestamp.format(LINE_TIMESTAMP_FORMAT),
        index,
        message
    )
}

/// Appends indexed, timestamped lines to a target file
#[derive(Debug, Default)]
pub struct LogWriter {
    /// File that receives appended lines
    target: Option<PathBuf>,
    /// Index stamped on the next line
    next_index: u64,
}

impl LogWriter {
    /// Create a writer with no target file
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the file that subsequent appends write to
    ///
    /// No I/O happens here. The line index is not reset.
    pub fn set_target_file(&mut self, path: impl Into<PathBuf>) {
        self.target = Some(path.into());
    }

    /// Get the current target file
    pub fn target(&self) -> Option<&Path> {
        self.target.as_deref()
    }

    /// Index that the next successful append will use
    pub fn next_index(&self) -> u64 {
        self.next_index
    }

    /// Append one line to the target file
    ///
    /// Returns the index written on the line. A failed write does not consume an index.
    pub fn append(&mut self, message: &str) -> Result<u64> {
        let path = self.target.as_ref().ok_or(LogError::NoTargetFile)?;
        let index = self.next_index;
        let line = format_line(&Local::now(), index, message);

        let write_failed = |source| LogError::FileWriteFailed {
            path: path.clone(),
            source,
        };

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(write_failed)?;
        writeln!(file, "{}", line).map_err(write_failed)?;
        file.flush().map_err(write_failed)?;

        self.next_index += 1;
        Ok(index)
    }
}
