use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Directory holding the task snapshot.
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
    /// chrono format string for card creation timestamps.
    #[serde(default)]
    pub timestamp_format: Option<String>,
    /// Filter selected when the board opens: `all`, `todo` or `done`.
    #[serde(default)]
    pub default_filter: Option<String>,
}

impl AppConfig {
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(target_os = "macos")]
        {
            dirs::home_dir().map(|home| home.join(".config/flexboard/config.toml"))
        }
        #[cfg(target_os = "linux")]
        {
            dirs::config_dir().map(|config| config.join("flexboard/config.toml"))
        }
        #[cfg(target_os = "windows")]
        {
            dirs::config_dir().map(|config| config.join("flexboard\\config.toml"))
        }
        #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
        {
            None
        }
    }

    pub fn load() -> Self {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    /// Missing or unparsable files fall back to defaults.
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(config) => config,
                Err(e) => {
                    tracing::warn!("Ignoring invalid config {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Could not read config {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn effective_data_dir(&self) -> PathBuf {
        if let Some(dir) = &self.data_dir {
            return dir.clone();
        }
        dirs::data_dir()
            .map(|data| data.join("flexboard"))
            .unwrap_or_else(|| PathBuf::from("."))
    }

    pub fn effective_timestamp_format(&self) -> &str {
        self.timestamp_format
            .as_deref()
            .unwrap_or(DEFAULT_TIMESTAMP_FORMAT)
    }

    pub fn effective_default_filter(&self) -> &str {
        self.default_filter.as_deref().unwrap_or("all")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let config = AppConfig::load_from(&dir.path().join("nope.toml"));
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.effective_timestamp_format(), DEFAULT_TIMESTAMP_FORMAT);
        assert_eq!(config.effective_default_filter(), "all");
    }

    #[test]
    fn test_load_from_toml() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "data_dir = \"/tmp/boards\"\ntimestamp_format = \"%d/%m/%Y\"\ndefault_filter = \"done\"\n",
        )
        .unwrap();

        let config = AppConfig::load_from(&path);
        assert_eq!(config.effective_data_dir(), PathBuf::from("/tmp/boards"));
        assert_eq!(config.effective_timestamp_format(), "%d/%m/%Y");
        assert_eq!(config.effective_default_filter(), "done");
    }

    #[test]
    fn test_invalid_toml_gives_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "data_dir = [").unwrap();

        assert_eq!(AppConfig::load_from(&path), AppConfig::default());
    }
}
