use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{FinanceError, Result};

pub const DB_FILE: &str = "financetrack.db";
pub const LOG_FILE: &str = "financetrack.log";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub data_dir: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Duration of the slide between views, in milliseconds.
    #[serde(default = "default_transition_ms")]
    pub transition_ms: u64,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_transition_ms() -> u64 {
    300
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir().to_string_lossy().to_string(),
            log_level: default_log_level(),
            transition_ms: default_transition_ms(),
        }
    }
}

impl Settings {
    pub fn data_path(&self) -> PathBuf {
        PathBuf::from(&self.data_dir)
    }

    pub fn db_path(&self) -> PathBuf {
        self.data_path().join(DB_FILE)
    }

    pub fn log_path(&self) -> PathBuf {
        self.data_path().join(LOG_FILE)
    }
}

fn config_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("financetrack")
}

fn settings_path() -> PathBuf {
    config_dir().join("settings.json")
}

fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("Documents")
        .join("financetrack")
}

/// Parse settings JSON, falling back to defaults on any error.
fn parse_settings(content: &str) -> Settings {
    serde_json::from_str(content).unwrap_or_default()
}

pub fn load_settings() -> Settings {
    let path = settings_path();
    if path.exists() {
        let content = std::fs::read_to_string(&path).unwrap_or_default();
        parse_settings(&content)
    } else {
        Settings::default()
    }
}

pub fn save_settings(settings: &Settings) -> Result<()> {
    let dir = config_dir();
    std::fs::create_dir_all(&dir)?;
    let json = serde_json::to_string_pretty(settings)
        .map_err(|e| FinanceError::Settings(e.to_string()))?;
    std::fs::write(settings_path(), format!("{json}\n"))?;
    Ok(())
}

pub fn shellexpand_path(path: &str) -> String {
    if path.starts_with('~') {
        if let Some(home) = dirs::home_dir() {
            return path.replacen('~', &home.to_string_lossy(), 1);
        }
    }
    std::fs::canonicalize(path)
        .unwrap_or_else(|_| PathBuf::from(path))
        .to_string_lossy()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let s = Settings::default();
        assert_eq!(s.log_level, "info");
        assert_eq!(s.transition_ms, 300);
        assert!(s.data_dir.ends_with("financetrack"));
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let s = parse_settings(r#"{"data_dir": "/tmp/ft"}"#);
        assert_eq!(s.data_dir, "/tmp/ft");
        assert_eq!(s.log_level, "info");
        assert_eq!(s.transition_ms, 300);
    }

    #[test]
    fn test_corrupt_file_yields_defaults() {
        let s = parse_settings("{not json");
        assert_eq!(s.transition_ms, 300);
        assert!(!s.data_dir.is_empty());
    }

    #[test]
    fn test_paths_live_under_data_dir() {
        let s = Settings {
            data_dir: "/tmp/ft".to_string(),
            log_level: "debug".to_string(),
            transition_ms: 10,
        };
        assert_eq!(s.db_path(), PathBuf::from("/tmp/ft/financetrack.db"));
        assert_eq!(s.log_path(), PathBuf::from("/tmp/ft/financetrack.log"));
    }

    #[test]
    fn test_roundtrip_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        let settings = Settings {
            data_dir: "/tmp/test".to_string(),
            log_level: "warn".to_string(),
            transition_ms: 150,
        };
        std::fs::write(&path, serde_json::to_string_pretty(&settings).unwrap()).unwrap();
        let loaded = parse_settings(&std::fs::read_to_string(&path).unwrap());
        assert_eq!(loaded.data_dir, "/tmp/test");
        assert_eq!(loaded.log_level, "warn");
        assert_eq!(loaded.transition_ms, 150);
    }
}
