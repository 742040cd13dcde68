//! Platform data directory resolution.
//!
//! Every file tasktime owns (`config.json`, `tasktime.db`) lives in one
//! per-user directory:
//!
//! - **Windows**: `%LOCALAPPDATA%\tasktime\tasktime`
//! - **macOS**: `~/Library/Application Support/tasktime/tasktime`
//! - **Linux**: `~/.local/share/tasktime/tasktime`

use std::env::consts::OS;
use std::env::var;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub const VENDOR_NAME: &str = "tasktime";
pub const APP_NAME: &str = "tasktime";

/// Resolves files inside `<base>/<vendor>/<app>`.
///
/// tasktime has no separate publisher, so the vendor and app segments share
/// the name. The two-level layout matches other tools that group several
/// apps under one vendor directory.
#[derive(Debug, Clone)]
pub struct DataStorage {
    base_path: PathBuf,
}

impl DataStorage {
    pub fn new() -> Self {
        let base_path = match OS {
            "windows" => var("LOCALAPPDATA").unwrap_or_else(|_| ".".into()),
            "macos" => var("HOME").unwrap_or_else(|_| ".".into()) + "/Library/Application Support",
            _ => var("HOME").unwrap_or_else(|_| ".".into()) + "/.local/share",
        };
        let base_path = Path::new(&base_path).join(VENDOR_NAME).join(APP_NAME);

        Self { base_path }
    }

    /// Returns the full path of `file_name`, creating the data directory on first use.
    pub fn get_path(&self, file_name: &str) -> io::Result<PathBuf> {
        if !self.base_path.exists() {
            fs::create_dir_all(&self.base_path)?;
        }
        Ok(self.base_path.join(file_name))
    }
}

impl Default for DataStorage {
    fn default() -> Self {
        Self::new()
    }
}
