// Settings service
// Loads and saves calendar settings as a TOML file

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;

use crate::models::settings::CalendarSettings;

const SETTINGS_FILE: &str = "settings.toml";

pub struct SettingsService;

impl SettingsService {
    /// Per-user settings path, e.g. `~/.config/data-calendar/settings.toml` on Linux
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "Ken24T", "data-calendar")
            .map(|dirs| dirs.config_dir().join(SETTINGS_FILE))
    }

    /// Load settings from `path`, falling back to defaults when the file
    /// does not exist. Missing keys take their default values.
    pub fn load(path: &Path) -> Result<CalendarSettings> {
        if !path.exists() {
            log::info!("No settings at {}, using defaults", path.display());
            return Ok(CalendarSettings::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings from {}", path.display()))?;
        let settings = Self::parse(&content)
            .with_context(|| format!("Failed to load settings from {}", path.display()))?;

        log::debug!("Loaded settings from {}: {:?}", path.display(), settings);
        Ok(settings)
    }

    pub fn parse(content: &str) -> Result<CalendarSettings> {
        let settings: CalendarSettings = toml::from_str(content).context("Invalid settings TOML")?;
        settings
            .validate()
            .map_err(|e| anyhow!("Invalid settings: {}", e))?;
        Ok(settings)
    }

    pub fn save(path: &Path, settings: &CalendarSettings) -> Result<()> {
        settings
            .validate()
            .map_err(|e| anyhow!("Invalid settings: {}", e))?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create settings directory {}", parent.display()))?;
        }

        let content = toml::to_string_pretty(settings).context("Failed to serialize settings")?;
        fs::write(path, content)
            .with_context(|| format!("Failed to write settings to {}", path.display()))?;
        Ok(())
    }
}
