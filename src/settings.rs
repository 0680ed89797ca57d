use crate::config;
use configparser::ini::Ini;
use log::{info, warn};
use once_cell::sync::Lazy;
use std::fs;
use std::path::Path;
use std::sync::Mutex;

#[derive(Debug, Clone)]
pub struct Settings {
    pub api_url: String,
    pub roster_path: String,
    pub online: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_url: config::DEFAULT_API_URL.to_string(),
            roster_path: config::DEFAULT_ROSTER_PATH.to_string(),
            online: false,
        }
    }
}

// Global static for the loaded settings.
static SETTINGS: Lazy<Mutex<Settings>> = Lazy::new(|| Mutex::new(Settings::default()));

/// Creates the default settings file if it doesn't exist.
fn create_default_file() -> Result<(), std::io::Error> {
    info!("Settings file not found, creating defaults in '{}'.", config::SETTINGS_DIR);
    fs::create_dir_all(config::SETTINGS_DIR)?;

    let mut conf = Ini::new();
    conf.set("roster", "ApiUrl", Some(config::DEFAULT_API_URL.to_string()));
    conf.set("roster", "File", Some(config::DEFAULT_ROSTER_PATH.to_string()));
    conf.set("roster", "Online", Some("0".to_string()));
    conf.write(config::SETTINGS_INI_PATH)?;
    Ok(())
}

pub fn load() {
    if !Path::new(config::SETTINGS_INI_PATH).exists() {
        if let Err(e) = create_default_file() {
            warn!("Failed to create default settings file: {}", e);
            // Proceed with default struct values.
            return;
        }
    }

    let mut settings = SETTINGS.lock().unwrap();
    let defaults = Settings::default();

    let mut conf = Ini::new();
    if conf.load(config::SETTINGS_INI_PATH).is_ok() {
        settings.api_url = conf.get("roster", "ApiUrl").unwrap_or(defaults.api_url);
        settings.roster_path = conf.get("roster", "File").unwrap_or(defaults.roster_path);
        settings.online = conf
            .get("roster", "Online")
            .and_then(|v| v.parse::<u8>().ok())
            .map_or(defaults.online, |v| v != 0);
    } else {
        warn!("Failed to load '{}', using default settings.", config::SETTINGS_INI_PATH);
    }
}

/// Returns a copy of the currently loaded settings.
pub fn get() -> Settings {
    SETTINGS.lock().unwrap().clone()
}
