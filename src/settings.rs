use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub booking: BookingSettings,
    #[serde(default)]
    pub demo: DemoSettings,
}

#[derive(Debug, Default, Deserialize)]
pub struct BookingSettings {
    pub endpoint: Option<String>,         // Overrides the built-in booking endpoint
    pub fallback_contact: Option<String>, // Shown when a submission fails
}

#[derive(Debug, Default, Deserialize)]
pub struct DemoSettings {
    pub scheme: Option<u8>, // Default color scheme (0-4)
}

impl Settings {
    pub fn load() -> Self {
        let path = Self::config_path();
        if !path.exists() {
            return Self::default();
        }

        match fs::read_to_string(&path) {
            Ok(content) => toml::from_str(&content).unwrap_or_default(),
            Err(_) => Self::default(),
        }
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("tutorterm")
            .join("config.toml")
    }
}
