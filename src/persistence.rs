//! Remembered settings: last used folders and the plot mode, stored as JSON.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::data::plot::PlotMode;
use crate::error::{Error, Result};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Folder last scanned for CSV files.
    pub last_data_folder: Option<PathBuf>,
    /// Folder last chosen for new logs.
    pub last_log_folder: Option<PathBuf>,
    pub plot_mode: Option<PlotMode>,
}

/// `~/.teacup/settings.json`, or `None` when there is no home directory.
pub fn default_settings_path() -> Option<PathBuf> {
    let home = std::env::var_os("HOME").or_else(|| std::env::var_os("USERPROFILE"))?;
    Some(PathBuf::from(home).join(".teacup").join("settings.json"))
}

impl Settings {
    /// Load settings from `path`. A missing file gives the defaults.
    pub fn load(path: &Path) -> Result<Settings> {
        if !path.exists() {
            return Ok(Settings::default());
        }
        let s = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Ok(serde_json::from_str(&s)?)
    }

    /// Like [`Settings::load`], but a broken file is logged and replaced by defaults.
    pub fn load_or_default(path: &Path) -> Settings {
        match Settings::load(path) {
            Ok(s) => s,
            Err(e) => {
                log::warn!("ignoring settings: {e}");
                Settings::default()
            }
        }
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).map_err(|e| Error::io(dir, e))?;
        }
        let s = serde_json::to_string_pretty(self)?;
        fs::write(path, s).map_err(|e| Error::io(path, e))
    }
}
