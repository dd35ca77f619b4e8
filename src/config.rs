use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Prediction service endpoint configuration
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ApiConfig {
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url().to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct UiConfig {
    pub theme: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: "default".into(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            ui: UiConfig::default(),
        }
    }
}

/// Debug builds talk to a local service, release builds to the hosted one.
/// Either is overridden by the config file, the `--api-url` flag, or
/// `CREDITDESK_API_URL`.
pub fn default_base_url() -> &'static str {
    if cfg!(debug_assertions) {
        "http://localhost:8000"
    } else {
        "https://credit-backend-abc123-uc.a.run.app"
    }
}

pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    // 1. An explicitly requested file must exist and parse
    if let Some(path) = explicit {
        return read_config(path);
    }

    // 2. Check local config.yaml
    let local = Path::new("config.yaml");
    if local.exists() {
        return read_config(local);
    }

    // 3. Check ~/.config/creditdesk/config.yaml
    if let Some(path) = get_config_path() {
        if path.exists() {
            return read_config(&path);
        }
    }

    Ok(Config::default())
}

fn read_config(path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(path)?;
    let config: Config = serde_yaml::from_str(&contents)?;
    Ok(config)
}

/// Save config to the user config directory
pub fn save_config(config: &Config) -> Result<()> {
    if let Some(config_dir) = directories::ProjectDirs::from("io", "creditdesk", "creditdesk") {
        let config_path = config_dir.config_dir().join("config.yaml");
        fs::create_dir_all(config_dir.config_dir())?;
        let yaml = serde_yaml::to_string(config)?;
        fs::write(config_path, yaml)?;
    }
    Ok(())
}

/// The user config file path (for display purposes)
pub fn get_config_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("io", "creditdesk", "creditdesk")
        .map(|d| d.config_dir().join("config.yaml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.api.base_url, default_base_url());
        assert_eq!(config.ui.theme, "default");
    }

    #[test]
    fn test_file_value_beats_default() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "api:\n  base_url: http://example.test:9000").unwrap();

        let config = load_config(Some(file.path())).unwrap();
        assert_eq!(config.api.base_url, "http://example.test:9000");
        // Sections absent from the file fall back to defaults
        assert_eq!(config.ui.theme, "default");
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        assert!(load_config(Some(Path::new("/nonexistent/creditdesk.yaml"))).is_err());
    }
}
