//! User preferences: window geometry for the GUI shell and the path of the
//! cheatsheet data file. Stored as `prefs.json` next to the data.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const PREFS_FILENAME: &str = "prefs.json";
const DEFAULT_DATA_FILENAME: &str = "cheatbank.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuiSettings {
    pub window_width: f64,
    pub window_height: f64,
    pub window_x: Option<i32>,
    pub window_y: Option<i32>,
}

impl Default for GuiSettings {
    fn default() -> Self {
        Self {
            window_width: 740.0,
            window_height: 600.0,
            window_x: None,
            window_y: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserPrefs {
    #[serde(default)]
    gui_settings: GuiSettings,

    #[serde(default = "default_data_file_path")]
    data_file_path: PathBuf,
}

fn default_data_file_path() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_FILENAME)
}

impl Default for UserPrefs {
    fn default() -> Self {
        Self {
            gui_settings: GuiSettings::default(),
            data_file_path: default_data_file_path(),
        }
    }
}

impl UserPrefs {
    /// Load prefs from the given directory, or return defaults if not found.
    pub fn load<P: AsRef<Path>>(prefs_dir: P) -> Result<Self> {
        let prefs_path = prefs_dir.as_ref().join(PREFS_FILENAME);

        if !prefs_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&prefs_path)?;
        let prefs: UserPrefs = serde_json::from_str(&content)?;
        Ok(prefs)
    }

    /// Save prefs to the given directory, creating it if needed.
    pub fn save<P: AsRef<Path>>(&self, prefs_dir: P) -> Result<()> {
        let prefs_dir = prefs_dir.as_ref();
        if !prefs_dir.exists() {
            fs::create_dir_all(prefs_dir)?;
        }

        let prefs_path = prefs_dir.join(PREFS_FILENAME);
        let content = serde_json::to_string_pretty(self)?;
        fs::write(prefs_path, content)?;
        Ok(())
    }

    pub fn gui_settings(&self) -> &GuiSettings {
        &self.gui_settings
    }

    pub fn set_gui_settings(&mut self, settings: GuiSettings) {
        self.gui_settings = settings;
    }

    pub fn data_file_path(&self) -> &Path {
        &self.data_file_path
    }

    pub fn set_data_file_path(&mut self, path: PathBuf) {
        self.data_file_path = path;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn load_missing_prefs_returns_defaults() {
        let dir = tempdir().unwrap();
        let prefs = UserPrefs::load(dir.path()).unwrap();
        assert_eq!(prefs, UserPrefs::default());
    }

    #[test]
    fn save_and_load_round_trip() {
        let dir = tempdir().unwrap();

        let mut prefs = UserPrefs::default();
        prefs.set_data_file_path(PathBuf::from("elsewhere/bank.json"));
        prefs.set_gui_settings(GuiSettings {
            window_width: 1024.0,
            window_height: 768.0,
            window_x: Some(10),
            window_y: Some(20),
        });
        prefs.save(dir.path()).unwrap();

        let loaded = UserPrefs::load(dir.path()).unwrap();
        assert_eq!(loaded, prefs);
    }

    #[test]
    fn partial_prefs_file_fills_defaults() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(PREFS_FILENAME), "{}").unwrap();

        let prefs = UserPrefs::load(dir.path()).unwrap();
        assert_eq!(prefs.data_file_path(), Path::new(DEFAULT_DATA_FILENAME));
    }
}
