//! Log file retention management
//!
//! Handles eviction of the oldest log files once a directory holds more than the
//! configured number of them.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use crate::error::{LogError, Result};

use super::{LOG_FILE_EXTENSION, LOG_FILE_PREFIX};

/// Default number of log files to keep
pub const DEFAULT_MAX_LOGS: usize = 30;

/// A log file found in a log directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogFileEntry {
    /// Full path to the file
    pub path: PathBuf,
    /// Last modification time
    pub modified: SystemTime,
}

/// Check whether a file name follows the log file naming pattern
pub fn is_log_file_name(name: &str) -> bool {
    name.starts_with(LOG_FILE_PREFIX) && name.ends_with(LOG_FILE_EXTENSION)
}

/// List the log files in a directory, newest first
///
/// Files with equal modification times are ordered by name, descending.
/// A directory that does not exist holds no log files.
pub fn list_log_files(logs_dir: &Path) -> Result<Vec<LogFileEntry>> {
    if !logs_dir.exists() {
        return Ok(Vec::new());
    }

    let listing_failed = |source| LogError::ListingFailed {
        path: logs_dir.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    for entry in fs::read_dir(logs_dir).map_err(listing_failed)? {
        let entry = entry.map_err(listing_failed)?;
        let path = entry.path();

        // Only process debug log files
        match path.file_name().and_then(|n| n.to_str()) {
            Some(name) if is_log_file_name(name) => {}
            _ => continue,
        }

        let Ok(metadata) = entry.metadata() else {
            continue;
        };
        if !metadata.is_file() {
            continue;
        }
        let modified = metadata.modified().unwrap_or(SystemTime::UNIX_EPOCH);

        files.push(LogFileEntry { path, modified });
    }

    files.sort_by(|a, b| (&b.modified, &b.path).cmp(&(&a.modified, &a.path)));
    Ok(files)
}

/// Delete the oldest log files so that at most `max_logs` remain
///
/// Returns the number of files deleted. Failing to delete a single file is logged
/// and does not stop the sweep.
pub fn evict_excess_logs(logs_dir: &Path, max_logs: usize) -> Result<usize> {
    let mut files = list_log_files(logs_dir)?;
    if files.len() <= max_logs {
        return Ok(0);
    }

    let excess = files.split_off(max_logs);
    let mut deleted_count = 0;

    for file in excess {
        match fs::remove_file(&file.path) {
            Ok(()) => {
                tracing::debug!("Evicted old log file {}", file.path.display());
                deleted_count += 1;
            }
            Err(e) => {
                tracing::warn!("Failed to evict log file {}: {}", file.path.display(), e);
            }
        }
    }

    Ok(deleted_count)
}
