//! Log directory and session file lifecycle
//!
//! The manager resolves the log directory, creates one timestamp-named log file per
//! session and runs the retention sweep right before each new file is created.

use std::fs::{self, OpenOptions};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use chrono::Local;

use crate::config::LogConfig;
use crate::error::{LogError, Result};

use super::retention::{evict_excess_logs, DEFAULT_MAX_LOGS};
use super::{LOG_FILE_EXTENSION, LOG_FILE_PREFIX};

/// Folder name used when none is given
pub const DEFAULT_FOLDER_NAME: &str = "Debugg";

/// Highest numeric suffix tried when a log file name is taken
const MAX_NAME_SUFFIX: u32 = 1000;

/// Where log files go, before defaults are applied
///
/// Empty values count as unset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Destination {
    /// Parent directory of the log folder (default: current working directory)
    pub directory: Option<PathBuf>,
    /// Name of the log folder (default: [`DEFAULT_FOLDER_NAME`])
    pub folder_name: Option<String>,
}

impl Destination {
    /// Create a destination from optional parts
    pub fn new(directory: Option<PathBuf>, folder_name: Option<String>) -> Self {
        Self {
            directory,
            folder_name,
        }
    }

    /// Resolve the log directory path, applying defaults
    pub fn resolve(&self) -> Result<PathBuf> {
        let base = match self.directory.as_deref() {
            Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
            _ => std::env::current_dir().map_err(LogError::CurrentDir)?,
        };
        let folder = match self.folder_name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => DEFAULT_FOLDER_NAME,
        };
        Ok(base.join(folder))
    }
}

/// Generate a timestamped log file path
pub fn create_log_file_path(logs_dir: &Path) -> PathBuf {
    let timestamp = Local::now().format("%Y-%m-%d_%H-%M-%S");
    logs_dir.join(format!(
        "{}{}{}",
        LOG_FILE_PREFIX, timestamp, LOG_FILE_EXTENSION
    ))
}

/// Create a new, empty log file in `logs_dir`
///
/// An existing file is never truncated: if the timestamped name is taken, a numeric
/// suffix is added.
pub fn create_log_file(logs_dir: &Path) -> Result<PathBuf> {
    create_unique_file(create_log_file_path(logs_dir), MAX_NAME_SUFFIX)
}

/// Create `base`, or `<stem>_<n>.txt` next to it for the first free `n` up to `max_suffix`
fn create_unique_file(base: PathBuf, max_suffix: u32) -> Result<PathBuf> {
    let stem = base
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(LOG_FILE_PREFIX)
        .to_string();
    let mut path = base;

    for suffix in 0..=max_suffix {
        if suffix > 0 {
            path.set_file_name(format!("{}_{}{}", stem, suffix, LOG_FILE_EXTENSION));
        }
        match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(_) => return Ok(path),
            Err(e) if e.kind() == ErrorKind::AlreadyExists => continue,
            Err(source) => return Err(LogError::FileCreationFailed { path, source }),
        }
    }

    // `path` is the last name tried
    Err(LogError::FileCreationFailed {
        path,
        source: std::io::Error::new(ErrorKind::AlreadyExists, "no free log file name"),
    })
}

/// Owns the log directory, the active session file and the retention threshold
#[derive(Debug)]
pub struct LogManager {
    /// Destination used when no directory was set explicitly
    default_destination: Destination,
    /// Resolved log directory, once set
    directory: Option<PathBuf>,
    /// Log file of the current session, once created
    active_file: Option<PathBuf>,
    /// Retention threshold applied by the sweep before each new file
    max_logs: usize,
}

impl LogManager {
    /// Create a manager with default destination and retention
    pub fn new() -> Self {
        Self {
            default_destination: Destination::default(),
            directory: None,
            active_file: None,
            max_logs: DEFAULT_MAX_LOGS,
        }
    }

    /// Create a manager using the destination and retention from a config
    pub fn from_config(config: &LogConfig) -> Self {
        Self {
            default_destination: config.destination(),
            max_logs: config.max_logs,
            ..Self::new()
        }
    }

    /// Set the log directory, creating it if needed
    ///
    /// Returns the resolved directory. Switching to a different directory releases the
    /// active file, so the next [`ensure_active_file`](Self::ensure_active_file) starts
    /// a new one there.
    pub fn set_directory(
        &mut self,
        directory: Option<&Path>,
        folder_name: Option<&str>,
    ) -> Result<PathBuf> {
        let destination = Destination::new(
            directory.map(Path::to_path_buf),
            folder_name.map(str::to_string),
        );
        self.apply_destination(&destination)
    }

    fn apply_destination(&mut self, destination: &Destination) -> Result<PathBuf> {
        let dir = destination.resolve()?;

        fs::create_dir_all(&dir).map_err(|source| LogError::DirectoryCreationFailed {
            path: dir.clone(),
            source,
        })?;
        if !dir.is_dir() {
            return Err(LogError::DirectoryMissing { path: dir });
        }

        if self.directory.as_ref() != Some(&dir) {
            tracing::debug!("Log directory set to {}", dir.display());
            self.active_file = None;
            self.directory = Some(dir.clone());
        }

        Ok(dir)
    }

    /// Get the resolved log directory, if one was set
    pub fn directory(&self) -> Option<&Path> {
        self.directory.as_deref()
    }

    /// Get the active log file, if one was created
    pub fn active_file(&self) -> Option<&Path> {
        self.active_file.as_deref()
    }

    /// Get the retention threshold
    pub fn max_logs(&self) -> usize {
        self.max_logs
    }

    /// Set the retention threshold, applied on the next sweep
    pub fn set_max_logs(&mut self, max_logs: usize) {
        self.max_logs = max_logs;
    }

    /// Return the active log file, creating it on first use
    ///
    /// Before a new file is created the default destination is applied if no directory
    /// was set, and old log files beyond the retention threshold are evicted.
    pub fn ensure_active_file(&mut self) -> Result<PathBuf> {
        if let Some(path) = &self.active_file {
            return Ok(path.clone());
        }

        let dir = match &self.directory {
            Some(dir) => dir.clone(),
            None => {
                let destination = self.default_destination.clone();
                self.apply_destination(&destination)?
            }
        };

        let evicted = evict_excess_logs(&dir, self.max_logs)?;
        if evicted > 0 {
            tracing::debug!("Evicted {} old log files from {}", evicted, dir.display());
        }

        let path = create_log_file(&dir)?;
        tracing::info!("Logging to: {}", path.display());
        self.active_file = Some(path.clone());

        Ok(path)
    }
}

impl Default for LogManager {
    fn default() -> Self {
        Self::new()
    }
}
