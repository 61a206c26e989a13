use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;

use crate::models::settings::Settings;

/// Environment variable that overrides the settings file location.
pub const CONFIG_ENV_VAR: &str = "WEEKLY_COUNTDOWN_CONFIG";

const SETTINGS_FILE_NAME: &str = "settings.toml";

pub struct SettingsService {
    path: PathBuf,
}

impl SettingsService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Pick the settings file: explicit path, then `WEEKLY_COUNTDOWN_CONFIG`,
    /// then the platform config directory.
    pub fn locate(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Ok(Self::new(path));
        }

        if let Some(path) = std::env::var_os(CONFIG_ENV_VAR).filter(|p| !p.is_empty()) {
            return Ok(Self::new(path));
        }

        let dirs = ProjectDirs::from("com", "WeeklyCountdown", "weekly-countdown")
            .context("Failed to determine the configuration directory")?;
        Ok(Self::new(dirs.config_dir().join(SETTINGS_FILE_NAME)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load settings, falling back to defaults when the file does not exist.
    pub fn load(&self) -> Result<Settings> {
        if !self.path.exists() {
            log::info!(
                "No settings at {}, using defaults",
                self.path.display()
            );
            return Ok(Settings::default());
        }

        let data = fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read settings from {}", self.path.display()))?;
        let settings = toml::from_str(&data)
            .with_context(|| format!("failed to parse settings in {}", self.path.display()))?;
        log::info!("Loaded settings from {}", self.path.display());
        Ok(settings)
    }

    pub fn save(&self, settings: &Settings) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create dir {}", parent.display()))?;
        }

        let data = toml::to_string_pretty(settings).context("failed to serialize settings")?;
        fs::write(&self.path, data)
            .with_context(|| format!("failed to write settings to {}", self.path.display()))?;
        Ok(())
    }
}
