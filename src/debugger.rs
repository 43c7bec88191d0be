//! Instance debug logger
//!
//! A [`Debugger`] owns its own manager and writer, so separate instances can log to
//! separate folders. The state sits behind a mutex: a debugger can be shared between
//! threads and every append is serialized.

use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::config::LogConfig;
use crate::error::Result;
use crate::logging::{LogManager, LogWriter};

/// First line written to every new log destination
pub const STARTED_SENTINEL: &str = "Debug Started";

/// Prefix added by [`Debugger::log_error`]
pub const ERROR_PREFIX: &str = "ERROR : ";

#[derive(Debug, Default)]
struct DebuggerState {
    manager: LogManager,
    writer: LogWriter,
    /// Log file that already received the start sentinel
    announced: Option<PathBuf>,
}

impl DebuggerState {
    /// Make sure the active file exists, is targeted and carries the sentinel
    fn prepare(&mut self) -> Result<()> {
        let path = self.manager.ensure_active_file()?;
        if self.announced.as_ref() == Some(&path) {
            return Ok(());
        }

        self.writer.set_target_file(&path);
        self.writer.append(STARTED_SENTINEL)?;
        self.announced = Some(path);
        Ok(())
    }
}

/// Debug logger with its own log destination
#[derive(Debug, Default)]
pub struct Debugger {
    state: Mutex<DebuggerState>,
}

impl Debugger {
    /// Create a debugger that logs to `<cwd>/Debugg` unless configured otherwise
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a debugger whose default destination and retention come from a config
    pub fn from_config(config: &LogConfig) -> Self {
        Self {
            state: Mutex::new(DebuggerState {
                manager: LogManager::from_config(config),
                ..DebuggerState::default()
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, DebuggerState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Set the log destination to `<directory>/<folder_name>`
    ///
    /// `None` or empty values fall back to the current directory and "Debugg". The
    /// log file is created right away and starts with the sentinel line, written once
    /// per destination. Returns the resolved log directory.
    pub fn set_directory(
        &self,
        directory: Option<&Path>,
        folder_name: Option<&str>,
    ) -> Result<PathBuf> {
        let mut state = self.lock();
        let dir = state.manager.set_directory(directory, folder_name)?;
        state.prepare()?;
        Ok(dir)
    }

    /// Set how many log files are kept when the next log file is created
    pub fn set_max_logs(&self, max_logs: usize) {
        self.lock().manager.set_max_logs(max_logs);
    }

    /// Write a message to the log file
    pub fn log(&self, message: &str) -> Result<()> {
        let mut state = self.lock();
        state.prepare()?;
        state.writer.append(message)?;
        Ok(())
    }

    /// Write a message tagged as an error to the log file
    pub fn log_error(&self, message: &str) -> Result<()> {
        self.log(&format!("{}{}", ERROR_PREFIX, message))
    }

    /// Get the file currently being written, if any
    pub fn active_file(&self) -> Option<PathBuf> {
        self.lock().manager.active_file().map(Path::to_path_buf)
    }
}
