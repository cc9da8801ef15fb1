mod theme;

pub use theme::Theme;

use std::path::{Path, PathBuf};

use directories::BaseDirs;
use serde::{Deserialize, Serialize};

use crate::cli::Cli;
use crate::error::{PanelError, Result};
use crate::validator::{GROQ_API_URL, VALIDATION_MODEL};

const CONFIG_DIR: &str = "hinglish-control";
const MAIN_CONFIG_FILE: &str = "config.toml";
const STORAGE_FILE: &str = "storage.json";
const LOG_DIR: &str = "logs";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub general: GeneralConfig,
    pub storage: StorageConfig,
    pub validation: ValidationConfig,
    pub translation: TranslationOptions,
    pub notifications: NotificationConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    pub tick_interval_ms: u64,
    pub log_level: String,
    pub log_file: Option<PathBuf>,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: 250,
            log_level: "info".to_string(),
            log_file: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CredentialBackend {
    /// API key lives in the storage file with the other settings
    #[default]
    File,
    /// API key lives in the OS keyring
    Keyring,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct StorageConfig {
    pub path: Option<PathBuf>,
    pub credential_backend: CredentialBackend,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    pub endpoint: String,
    pub model: String,
    /// Unset means the HTTP client default
    pub timeout_secs: Option<u64>,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            endpoint: GROQ_API_URL.to_string(),
            model: VALIDATION_MODEL.to_string(),
            timeout_secs: None,
        }
    }
}

/// Choices offered by the style and level selectors.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TranslationOptions {
    pub styles: Vec<String>,
    pub levels: Vec<String>,
}

impl Default for TranslationOptions {
    fn default() -> Self {
        Self {
            styles: vec![
                "hinglish".to_string(),
                "direct".to_string(),
                "romanized".to_string(),
            ],
            levels: vec![
                "casual".to_string(),
                "balanced".to_string(),
                "formal".to_string(),
            ],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationConfig {
    pub duration_ms: u64,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self { duration_ms: 3000 }
    }
}

pub struct ConfigManager {
    config_dir: PathBuf,
    app_config: AppConfig,
}

impl ConfigManager {
    /// Load `config.toml` and apply command-line overrides.
    pub fn with_cli(cli: &Cli) -> Result<Self> {
        let config_dir = match &cli.config_dir {
            Some(dir) => dir.clone(),
            None => Self::get_config_dir()?,
        };

        let mut app_config = match &cli.config {
            Some(path) => {
                if !path.exists() {
                    return Err(PanelError::ConfigNotFound { path: path.clone() });
                }
                Self::load_toml_file(path).unwrap_or_default()
            }
            None => Self::load_app_config(&config_dir),
        };

        if let Some(path) = &cli.storage_file {
            app_config.storage.path = Some(path.clone());
        }
        if let Some(endpoint) = &cli.endpoint {
            app_config.validation.endpoint = endpoint.clone();
        }
        if let Some(level) = &cli.log_level {
            app_config.general.log_level = level.clone();
        }

        Ok(Self {
            config_dir,
            app_config,
        })
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    pub fn app_config(&self) -> &AppConfig {
        &self.app_config
    }

    pub fn storage_path(&self) -> PathBuf {
        self.app_config
            .storage
            .path
            .clone()
            .unwrap_or_else(|| self.config_dir.join(STORAGE_FILE))
    }

    pub fn log_file(&self) -> PathBuf {
        self.app_config
            .general
            .log_file
            .clone()
            .unwrap_or_else(|| self.config_dir.join(LOG_DIR).join("hinglish-control.log"))
    }

    fn get_config_dir() -> Result<PathBuf> {
        BaseDirs::new()
            .map(|dirs| dirs.config_dir().join(CONFIG_DIR))
            .ok_or_else(|| PanelError::Config("Could not determine config directory".to_string()))
    }

    fn load_app_config(config_dir: &Path) -> AppConfig {
        let path = config_dir.join(MAIN_CONFIG_FILE);
        Self::load_toml_file(&path).unwrap_or_default()
    }

    fn load_toml_file<T: for<'de> Deserialize<'de> + Default>(path: &Path) -> Option<T> {
        if !path.exists() {
            return None;
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(config) => Some(config),
                Err(e) => {
                    tracing::warn!("Failed to parse {}: {}", path.display(), e);
                    None
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read {}: {}", path.display(), e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use tempfile::TempDir;

    fn cli(args: &[&str]) -> Cli {
        let mut argv = vec!["hinglish-control"];
        argv.extend_from_slice(args);
        Cli::parse_from(argv)
    }

    #[test]
    fn test_default_app_config() {
        let config = AppConfig::default();
        assert_eq!(config.general.tick_interval_ms, 250);
        assert_eq!(config.notifications.duration_ms, 3000);
        assert_eq!(config.storage.credential_backend, CredentialBackend::File);
        assert_eq!(config.validation.endpoint, GROQ_API_URL);
        assert!(config.validation.timeout_secs.is_none());
        assert!(config.translation.styles.contains(&"hinglish".to_string()));
        assert!(config.translation.levels.contains(&"balanced".to_string()));
    }

    #[test]
    fn test_app_config_serialization() {
        let config = AppConfig::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        let parsed: AppConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.general.tick_interval_ms, config.general.tick_interval_ms);
        assert_eq!(parsed.translation.styles, config.translation.styles);
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let parsed: AppConfig = toml::from_str(
            r#"
            [storage]
            credential_backend = "keyring"

            [validation]
            timeout_secs = 15
            "#,
        )
        .unwrap();
        assert_eq!(parsed.storage.credential_backend, CredentialBackend::Keyring);
        assert_eq!(parsed.validation.timeout_secs, Some(15));
        assert_eq!(parsed.validation.model, VALIDATION_MODEL);
        assert_eq!(parsed.notifications.duration_ms, 3000);
    }

    #[test]
    fn test_with_cli_reads_config_dir_and_overrides() {
        let temp = TempDir::new().unwrap();
        std::fs::write(
            temp.path().join(MAIN_CONFIG_FILE),
            "[general]\nlog_level = \"debug\"\n[notifications]\nduration_ms = 5000\n",
        )
        .unwrap();
        let dir = temp.path().to_str().unwrap();

        let manager = ConfigManager::with_cli(&cli(&["--config-dir", dir])).unwrap();
        assert_eq!(manager.app_config().general.log_level, "debug");
        assert_eq!(manager.app_config().notifications.duration_ms, 5000);
        assert_eq!(manager.storage_path(), temp.path().join(STORAGE_FILE));

        let manager = ConfigManager::with_cli(&cli(&[
            "--config-dir",
            dir,
            "--log-level",
            "trace",
            "--storage-file",
            "/tmp/other.json",
            "--endpoint",
            "http://localhost:9/v1/chat/completions",
        ]))
        .unwrap();
        assert_eq!(manager.app_config().general.log_level, "trace");
        assert_eq!(manager.storage_path(), PathBuf::from("/tmp/other.json"));
        assert_eq!(
            manager.app_config().validation.endpoint,
            "http://localhost:9/v1/chat/completions"
        );
    }

    #[test]
    fn test_invalid_config_falls_back_to_defaults() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join(MAIN_CONFIG_FILE), "general = 12").unwrap();

        let manager =
            ConfigManager::with_cli(&cli(&["--config-dir", temp.path().to_str().unwrap()]))
                .unwrap();
        assert_eq!(manager.app_config().general.tick_interval_ms, 250);
    }

    #[test]
    fn test_missing_explicit_config_file() {
        let result = ConfigManager::with_cli(&cli(&["--config", "/nonexistent/config.toml"]));
        assert!(matches!(result, Err(PanelError::ConfigNotFound { .. })));
    }
}
