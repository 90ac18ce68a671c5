//! Common test utilities for integration tests
//!
//! Shared fixtures for the configuration tests.

use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;
use storefront_config::WarnLogger;
use tempfile::TempDir;

/// Environment variables a test may inherit from the developer's shell.
#[allow(dead_code)]
pub const ISOLATED_VARS: [&str; 4] = [
    "DB",
    "STOREFRONT_API_OPTIONS__PORT",
    "STOREFRONT_DB_CONNECTION_OPTIONS__PASSWORD",
    "STOREFRONT_AUTH_OPTIONS__DISABLE_AUTH",
];

/// Warn logger that remembers every message.
#[derive(Default)]
pub struct RecordingLogger {
    warnings: Mutex<Vec<String>>,
}

impl RecordingLogger {
    #[allow(dead_code)]
    pub fn warnings(&self) -> Vec<String> {
        self.warnings.lock().unwrap().clone()
    }
}

impl WarnLogger for RecordingLogger {
    fn warn(&self, message: &str) {
        self.warnings.lock().unwrap().push(message.to_string());
    }
}

/// Create a temporary directory for test isolation
pub fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

/// Write `contents` to `dir/name` and return the path.
#[allow(dead_code)]
pub fn write_file(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("Failed to write test file");
    path
}
