// End-to-end check of the default log destination.
//
// Logging without any configured directory writes to `<cwd>/Debugg`. The working
// directory is process-wide, so this file holds a single test and runs as its own
// test binary; nothing else observes the directory change.

use std::path::{Path, PathBuf};

use logkeep::{global, Debugger};
use tempfile::TempDir;

fn log_file_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
        .collect();
    names.sort();
    names
}

fn read_lines(path: &Path) -> Vec<String> {
    std::fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn test_log_without_configuration_uses_cwd_debugg() {
    let temp_dir = TempDir::new().unwrap();
    let original_cwd = std::env::current_dir().unwrap();
    std::env::set_current_dir(temp_dir.path()).unwrap();
    let cwd = std::env::current_dir().unwrap();

    // Instance debugger with no configuration at all
    let debugger = Debugger::new();
    debugger.log("instance default").unwrap();
    let instance_file = debugger.active_file().unwrap();

    // Global debugger created implicitly by the first log call
    global::log("global default").unwrap();
    global::log_error("global failure").unwrap();
    let global_file = global::active_file().unwrap();

    std::env::set_current_dir(&original_cwd).unwrap();

    let expected_dir: PathBuf = cwd.join("Debugg");
    assert!(expected_dir.is_dir());
    assert_eq!(instance_file.parent().unwrap(), expected_dir);
    assert_eq!(global_file.parent().unwrap(), expected_dir);
    assert_ne!(instance_file, global_file);

    for name in log_file_names(&expected_dir) {
        assert!(name.starts_with("DebugLog_") && name.ends_with(".txt"));
    }
    assert_eq!(log_file_names(&expected_dir).len(), 2);

    let instance_lines = read_lines(&instance_file);
    assert_eq!(instance_lines.len(), 2);
    assert!(instance_lines[0].ends_with(":0: Debug Started"));
    assert!(instance_lines[1].ends_with(":1: instance default"));

    let global_lines = read_lines(&global_file);
    assert_eq!(global_lines.len(), 3);
    assert!(global_lines[0].ends_with(":0: Debug Started"));
    assert!(global_lines[1].ends_with(":1: global default"));
    assert!(global_lines[2].ends_with(":2: ERROR : global failure"));
}
