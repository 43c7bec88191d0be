use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};

use logkeep::logging;
use logkeep::{global, Debugger, LogConfig};

/// Folder used by the demo's instance debugger
const INSTANCE_FOLDER: &str = "TestDebugg";

fn main() -> Result<()> {
    logging::init_diagnostics();

    let config = LogConfig::load()?;
    global::init(&config);

    let debugger = Debugger::from_config(&config);
    debugger
        .set_directory(config.directory.as_deref(), Some(INSTANCE_FOLDER))
        .context("Failed to set up instance log directory")?;

    loop {
        run_demo(&debugger)?;

        if let Some(path) = global::active_file() {
            println!("Global log:   {}", path.display());
        }
        if let Some(path) = debugger.active_file() {
            println!("Instance log: {}", path.display());
        }
        println!("Press 'r' to run again, any other key to quit");

        if !wait_for_repeat()? {
            break;
        }
    }

    Ok(())
}

/// Interleave writes through the global and the instance debugger
fn run_demo(debugger: &Debugger) -> Result<()> {
    global::log("Test 1")?;
    debugger.log("Test a")?;
    global::log("Test 2")?;
    debugger.log("Test b")?;
    global::log("Test 3")?;
    logkeep::debug_log!("Test {}", 4)?;
    debugger.log_error("Test c")?;
    Ok(())
}

/// Read a single keypress; true means the demo should run again
fn wait_for_repeat() -> Result<bool> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let result = read_key();
    if let Err(e) = disable_raw_mode() {
        tracing::warn!("Failed to disable raw mode: {}", e);
    }

    Ok(matches!(result?, KeyCode::Char('r') | KeyCode::Char('R')))
}

fn read_key() -> Result<KeyCode> {
    loop {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                return Ok(key.code);
            }
        }
    }
}
