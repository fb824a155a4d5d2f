// Ripe Browser Settings Engine
// Loads the optional settings override file and validates it.
// Settings are read from a JSON file at the platform-specific config path
// and are never written back.

use std::fs;
use std::path::Path;

use url::Url;

use crate::platform;
use crate::types::errors::SettingsError;
use crate::types::settings::BrowserSettings;

/// Trait defining the settings engine interface.
pub trait SettingsEngineTrait {
    fn load(&mut self) -> Result<BrowserSettings, SettingsError>;
    fn get_settings(&self) -> &BrowserSettings;
    fn get_config_path(&self) -> &str;
}

/// Settings engine backed by a read-only JSON file on disk.
pub struct SettingsEngine {
    config_path: String,
    settings: BrowserSettings,
}

impl SettingsEngine {
    /// Creates a new SettingsEngine.
    ///
    /// If `path_override` is `Some`, uses that path for the config file.
    /// Otherwise, uses the platform-specific config directory with `settings.json`.
    pub fn new(path_override: Option<String>) -> Self {
        let config_path = match path_override {
            Some(p) => p,
            None => platform::get_config_dir()
                .join("settings.json")
                .to_string_lossy()
                .to_string(),
        };

        Self {
            config_path,
            settings: BrowserSettings::default(),
        }
    }

    /// Rejects settings the browser could not start with.
    pub fn validate(settings: &BrowserSettings) -> Result<(), SettingsError> {
        check_url("navigation.home_url", &settings.navigation.home_url)?;
        check_url("navigation.search_url", &settings.navigation.search_url)?;

        if settings.window.width == 0 || settings.window.height == 0 {
            return Err(SettingsError::InvalidValue(format!(
                "window size {}x{} must be non-zero",
                settings.window.width, settings.window.height
            )));
        }

        for site in &settings.websites {
            if site.label.trim().is_empty() {
                return Err(SettingsError::InvalidValue(
                    "website label cannot be empty".to_string(),
                ));
            }
            check_url(&format!("websites.{}", site.label), &site.url)?;
        }
        Ok(())
    }
}

fn check_url(key: &str, value: &str) -> Result<(), SettingsError> {
    Url::parse(value)
        .map(|_| ())
        .map_err(|e| SettingsError::InvalidValue(format!("{} '{}': {}", key, value, e)))
}

impl SettingsEngineTrait for SettingsEngine {
    /// Loads settings from the JSON config file.
    ///
    /// If the file does not exist, returns default settings. Missing fields
    /// take their default values. A malformed or invalid file is an error
    /// and leaves the current settings unchanged.
    fn load(&mut self) -> Result<BrowserSettings, SettingsError> {
        let path = Path::new(&self.config_path);

        if !path.exists() {
            self.settings = BrowserSettings::default();
            return Ok(self.settings.clone());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| SettingsError::IoError(format!("Failed to read config file: {}", e)))?;

        let settings: BrowserSettings = serde_json::from_str(&content).map_err(|e| {
            SettingsError::SerializationError(format!("Failed to parse config file: {}", e))
        })?;
        Self::validate(&settings)?;

        self.settings = settings;
        Ok(self.settings.clone())
    }

    /// Returns a reference to the current in-memory settings.
    fn get_settings(&self) -> &BrowserSettings {
        &self.settings
    }

    fn get_config_path(&self) -> &str {
        &self.config_path
    }
}
