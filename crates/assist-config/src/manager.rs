use crate::{ClientSettings, ConfigError};
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};

const ORG: &str = "io";
const AUTHOR: &str = "EmailAssistant";
const APP: &str = "EmailAssistantDashboard";

#[derive(Debug, Clone)]
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Resolves the platform config directory and seeds a default
    /// `settings.toml` on first run.
    pub fn new() -> Result<Self, ConfigError> {
        let dirs = ProjectDirs::from(ORG, AUTHOR, APP).ok_or(ConfigError::MissingDirectories)?;
        Self::at(dirs.config_dir().join("settings.toml"))
    }

    /// Uses an explicit settings file, creating it with defaults if missing.
    pub fn at(config_path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let config_path = config_path.into();
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        if !config_path.exists() {
            let initial = ClientSettings::default();
            let content = toml::to_string_pretty(&initial)?;
            fs::write(&config_path, content)?;
            tracing::info!(path = %config_path.display(), "wrote default client settings");
        }

        Ok(Self { config_path })
    }

    pub fn load(&self) -> Result<ClientSettings, ConfigError> {
        let content = fs::read_to_string(&self.config_path)?;
        let settings: ClientSettings = toml::from_str(&content)?;
        settings.backend_url()?;
        Ok(settings)
    }

    pub fn save(&self, settings: &ClientSettings) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(settings)?;
        fs::write(&self.config_path, content)?;
        Ok(())
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn seeds_defaults_on_first_use() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("nested").join("settings.toml");

        let manager = ConfigManager::at(&path).expect("manager created");
        assert!(manager.config_path().exists());
        assert_eq!(manager.load().expect("loaded"), ClientSettings::default());
    }

    #[test]
    fn save_then_load_keeps_changes() {
        let dir = tempdir().expect("tempdir");
        let manager = ConfigManager::at(dir.path().join("settings.toml")).expect("manager created");
        let mut settings = ClientSettings::default();
        settings.base_url = "http://dashboard.test:9000".to_string();
        settings.email_limit = 50;

        manager.save(&settings).expect("saved");
        assert_eq!(manager.load().expect("loaded"), settings);
    }

    #[test]
    fn existing_file_is_not_overwritten() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("settings.toml");
        fs::write(&path, "base_url = \"http://kept.test\"\nemail_limit = 7\n").expect("written");

        let settings = ConfigManager::at(&path).expect("manager created").load().expect("loaded");
        assert_eq!(settings.base_url, "http://kept.test");
        assert_eq!(settings.email_limit, 7);
    }

    #[test]
    fn rejects_unparseable_backend_url() {
        let dir = tempdir().expect("tempdir");
        let manager = ConfigManager::at(dir.path().join("settings.toml")).expect("manager created");
        fs::write(manager.config_path(), "base_url = \"not a url\"").expect("written");
        assert!(matches!(manager.load(), Err(ConfigError::Url(_))));
    }
}
