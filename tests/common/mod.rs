use std::{path::PathBuf, sync::Mutex};

use expense_core::{Config, ConfigManager, Tracker};
use once_cell::sync::Lazy;
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// Returns a fresh directory that outlives the calling test.
pub fn test_dir() -> PathBuf {
    let temp = TempDir::new().expect("create temp dir");
    let base = temp.path().to_path_buf();
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);
    base
}

/// Creates a file-backed tracker and a config manager rooted in a unique directory.
#[allow(dead_code)]
pub fn setup_test_env() -> (Tracker, ConfigManager, Config) {
    let base = test_dir();
    let config = Config {
        data_root: Some(base.join("records")),
        ..Config::default()
    };
    let config_manager =
        ConfigManager::with_base_dir(base).expect("create config manager for temp dir");
    config_manager.save(&config).expect("save test config");
    let tracker = Tracker::open(&config).expect("open tracker");
    (tracker, config_manager, config)
}
