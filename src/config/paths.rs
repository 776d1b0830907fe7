// Config path utilities.
// Locates the settings file and log file under the platform project directories.

use std::path::PathBuf;

use directories::ProjectDirs;

const APP_NAME: &str = "paperdeck";

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", APP_NAME)
}

/// Get the base config directory (~/.config/paperdeck on Linux).
pub fn config_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the data directory used for the log file.
pub fn data_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.data_dir().to_path_buf())
}

/// Path to the settings file.
pub fn settings_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("settings.json"))
}

/// Path to the application log file.
pub fn log_path() -> Option<PathBuf> {
    data_dir().map(|dir| dir.join(format!("{}.log", APP_NAME)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_paths() {
        // Only checks path construction; the directories may not exist.
        if let Some(path) = settings_path() {
            assert!(path.ends_with("settings.json"));
        }
        if let Some(path) = log_path() {
            assert!(path.ends_with("paperdeck.log"));
        }
    }
}
