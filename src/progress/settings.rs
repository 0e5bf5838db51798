use log::warn;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const SETTINGS_FILE: &str = "settings.json";
const DATA_DIR_ENV: &str = "MATHGAMES_DATA_DIR";

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Settings {
    #[serde(default = "default_version")]
    version: u32,

    /// Correct answers faster than this (and slower than 0 ms) count as fast solves.
    #[serde(default = "default_fast_solve_threshold_ms")]
    pub fast_solve_threshold_ms: u64,

    /// Key prefix scoping one player's progress inside a shared store.
    #[serde(default = "default_profile")]
    pub profile: String,
}

// Helper functions for default values
fn default_version() -> u32 {
    1
}
fn default_fast_solve_threshold_ms() -> u64 {
    10_000
}
fn default_profile() -> String {
    "mathgames_".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            version: default_version(),
            fast_solve_threshold_ms: default_fast_solve_threshold_ms(),
            profile: default_profile(),
        }
    }
}

impl Settings {
    pub fn load_from(data_dir: &Path) -> Self {
        let path = Self::settings_path(data_dir);
        if let Ok(contents) = fs::read_to_string(&path) {
            match serde_json::from_str::<Settings>(&contents) {
                Ok(mut settings) => {
                    settings.migrate();
                    return settings;
                }
                Err(err) => warn!("Ignoring unreadable {}: {}", path.display(), err),
            }
        }
        let default = Settings::default();
        let _ = default.save_to(data_dir);
        default
    }

    pub fn save_to(&self, data_dir: &Path) -> Result<(), std::io::Error> {
        let path = Self::settings_path(data_dir);
        // Ensure the directory exists
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let contents = serde_json::to_string_pretty(self)?;
        fs::write(path, contents)
    }

    fn settings_path(data_dir: &Path) -> PathBuf {
        data_dir.join(SETTINGS_FILE)
    }

    /// `$MATHGAMES_DATA_DIR` when set, otherwise the platform data dir.
    pub fn data_dir() -> PathBuf {
        if let Ok(dir) = std::env::var(DATA_DIR_ENV) {
            if !dir.is_empty() {
                return PathBuf::from(dir);
            }
        }
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("mathgames")
    }

    fn migrate(&mut self) {
        match self.version {
            0 => {
                self.version = 1;
            }
            _ => (),
        }
        if self.fast_solve_threshold_ms == 0 {
            self.fast_solve_threshold_ms = default_fast_solve_threshold_ms();
        }
    }

    pub fn is_debug_mode() -> bool {
        std::env::var("DEBUG").map(|v| v == "1").unwrap_or(false)
    }
}
