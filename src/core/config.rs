use crate::core::error::{CalendarError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration, stored as JSON in the user config directory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Tray icon and tooltip
    pub tray: TrayConfig,

    /// Calendar window preferences
    pub ui: UiConfig,

    /// Holiday classification
    pub holidays: HolidayConfig,

    /// Advanced settings (hidden by default)
    pub advanced: AdvancedConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrayConfig {
    /// Overrides the bundled tray icon; must point at a PNG file
    pub icon_path: Option<PathBuf>,

    pub tooltip: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Reveal the calendar window right after startup
    pub show_on_startup: bool,

    pub window_title: String,

    pub window_width: f64,

    pub window_height: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HolidayConfig {
    /// Holidays whose name contains one of these are treated as work holidays
    pub work_holiday_keywords: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdvancedConfig {
    /// Enable debug logging
    pub debug_logging: bool,
}

impl Default for TrayConfig {
    fn default() -> Self {
        Self {
            icon_path: None,
            tooltip: "Calendar Widget".to_string(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            show_on_startup: false,
            window_title: "Calendar Widget".to_string(),
            window_width: 800.0,
            window_height: 400.0,
        }
    }
}

impl Default for HolidayConfig {
    fn default() -> Self {
        Self {
            work_holiday_keywords: vec!["Christmas".to_string(), "Thanksgiving".to_string()],
        }
    }
}

impl Default for AdvancedConfig {
    fn default() -> Self {
        Self { debug_logging: false }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            tray: TrayConfig::default(),
            ui: UiConfig::default(),
            holidays: HolidayConfig::default(),
            advanced: AdvancedConfig::default(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from the user config directory, creating it with defaults if absent
    pub async fn load() -> Result<Self> {
        let config_path = Self::config_file_path()?;
        Self::load_from(&config_path).await
    }

    /// Loads configuration from an explicit path, writing defaults there if the file is missing
    pub async fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = tokio::fs::read_to_string(config_path).await?;
            let config: AppConfig = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            let config = Self::default();
            config.save_to(config_path).await?;
            Ok(config)
        }
    }

    /// Saves configuration to the user config directory
    pub async fn save(&self) -> Result<()> {
        let config_path = Self::config_file_path()?;
        self.save_to(&config_path).await
    }

    pub async fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        let content = serde_json::to_string_pretty(self)?;
        tokio::fs::write(config_path, content).await?;

        Ok(())
    }

    /// Gets the platform-specific configuration file path
    pub fn config_file_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| {
                CalendarError::ConfigurationError("Cannot find config directory".to_string())
            })?
            .join("HolidayCalendar");

        Ok(config_dir.join("config.json"))
    }

    /// Validates configuration values
    pub fn validate(&self) -> Result<()> {
        if !(self.ui.window_width > 0.0 && self.ui.window_height > 0.0) {
            return Err(CalendarError::ConfigurationError(
                "Window size must be positive".to_string(),
            ));
        }

        if self
            .holidays
            .work_holiday_keywords
            .iter()
            .any(|keyword| keyword.trim().is_empty())
        {
            return Err(CalendarError::ConfigurationError(
                "Work holiday keywords must not be empty".to_string(),
            ));
        }

        if let Some(path) = &self.tray.icon_path {
            if path.as_os_str().is_empty() {
                return Err(CalendarError::ConfigurationError(
                    "Icon path must not be empty when set".to_string(),
                ));
            }
        }

        Ok(())
    }
}
