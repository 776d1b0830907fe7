// Settings store for reading and writing the JSON settings file.
// Missing files and missing fields fall back to defaults.

use std::fs;
use std::io::Write;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{DeckError, Result};
use crate::state::ReopenPolicy;

/// Default frame tick: 50ms (~20 FPS).
pub const DEFAULT_TICK_MS: u64 = 50;

/// User settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Where a reopened slide deck starts.
    pub deck_reopen: ReopenPolicy,
    /// Frame tick in milliseconds.
    pub tick_rate_ms: u64,
    /// Log filter used when RUST_LOG is not set.
    pub log_level: String,
    /// Paper page to open on startup.
    pub start_paper: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            deck_reopen: ReopenPolicy::default(),
            tick_rate_ms: DEFAULT_TICK_MS,
            log_level: "info".to_string(),
            start_paper: None,
        }
    }
}

impl Settings {
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }

    /// Reject values the event loop cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.tick_rate_ms == 0 {
            return Err(DeckError::Config("tick_rate_ms must be positive".to_string()));
        }
        Ok(())
    }
}

/// Read settings from a file. A missing file yields the defaults.
pub fn load(path: &Path) -> Result<Settings> {
    if !path.exists() {
        return Ok(Settings::default());
    }

    let contents = fs::read_to_string(path)?;
    let settings: Settings = serde_json::from_str(&contents)?;
    settings.validate()?;
    Ok(settings)
}

/// Write settings as pretty JSON.
pub fn save(path: &Path, settings: &Settings) -> Result<()> {
    // Ensure parent directory exists
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_string_pretty(settings)?;

    // Write atomically via temp file
    let temp_path = path.with_extension("tmp");
    let mut file = fs::File::create(&temp_path)?;
    file.write_all(json.as_bytes())?;
    file.sync_all()?;
    fs::rename(&temp_path, path)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_missing_returns_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("settings.json");

        let settings = load(&path).unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.deck_reopen, ReopenPolicy::Restart);
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("settings.json");

        let settings = Settings {
            deck_reopen: ReopenPolicy::Resume,
            tick_rate_ms: 100,
            log_level: "debug".to_string(),
            start_paper: Some("zep".to_string()),
        };
        save(&path, &settings).unwrap();

        let loaded = load(&path).unwrap();
        assert_eq!(loaded, settings);
        assert!(!path.with_extension("tmp").exists());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("settings.json");
        fs::write(&path, r#"{ "deck_reopen": "resume" }"#).unwrap();

        let settings = load(&path).unwrap();
        assert_eq!(settings.deck_reopen, ReopenPolicy::Resume);
        assert_eq!(settings.tick_rate_ms, DEFAULT_TICK_MS);
        assert_eq!(settings.log_level, "info");
    }

    #[test]
    fn test_zero_tick_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("settings.json");
        fs::write(&path, r#"{ "tick_rate_ms": 0 }"#).unwrap();

        assert!(matches!(load(&path), Err(DeckError::Config(_))));
    }

    #[test]
    fn test_malformed_file_is_json_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("settings.json");
        fs::write(&path, "{ not json").unwrap();

        assert!(matches!(load(&path), Err(DeckError::Json(_))));
    }
}
