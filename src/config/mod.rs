use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub mod migrate; // use submodule at src/config/migrate.rs

/// Environment variable that overrides the config file location.
pub const CONFIG_ENV: &str = "RATTENDANCE_CONFIG";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    #[serde(default)]
    pub api_token: Option<String>,
    #[serde(default = "default_timeout")]
    pub request_timeout_secs: u64,
    /// IANA name, e.g. "Europe/Rome". Empty → build default or local zone.
    #[serde(default)]
    pub display_timezone: Option<String>,
    #[serde(default = "default_expected_in")]
    pub expected_in: String,
    #[serde(default = "default_expected_out")]
    pub expected_out: String,
    #[serde(default = "default_tolerance")]
    pub late_after_minutes: u32,
    #[serde(default = "default_tolerance")]
    pub early_before_minutes: u32,
    #[serde(default = "default_lunch_break")]
    pub lunch_break_minutes: i64,
    #[serde(default = "default_lunch_threshold")]
    pub lunch_threshold_minutes: i64,
    #[serde(default = "default_work_day")]
    pub work_day_minutes: i64,
    #[serde(default)]
    pub pinned_employees: Vec<i64>,
}

fn default_api_base_url() -> String {
    "http://localhost:8080/api".to_string()
}
fn default_timeout() -> u64 {
    30
}
fn default_expected_in() -> String {
    "09:00".to_string()
}
fn default_expected_out() -> String {
    "18:00".to_string()
}
fn default_tolerance() -> u32 {
    15
}
fn default_lunch_break() -> i64 {
    60
}
fn default_lunch_threshold() -> i64 {
    360
}
fn default_work_day() -> i64 {
    480
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            api_token: None,
            request_timeout_secs: default_timeout(),
            display_timezone: None,
            expected_in: default_expected_in(),
            expected_out: default_expected_out(),
            late_after_minutes: default_tolerance(),
            early_before_minutes: default_tolerance(),
            lunch_break_minutes: default_lunch_break(),
            lunch_threshold_minutes: default_lunch_threshold(),
            work_day_minutes: default_work_day(),
            pinned_employees: Vec::new(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rattendance")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".rattendance")
        }
    }

    /// Return the full path of the config file: `--config`, then
    /// `$RATTENDANCE_CONFIG`, then the platform default.
    pub fn config_file(custom: Option<&str>) -> PathBuf {
        if let Some(p) = custom {
            return crate::utils::path::expand_tilde(p);
        }
        if let Ok(p) = env::var(CONFIG_ENV)
            && !p.trim().is_empty()
        {
            return crate::utils::path::expand_tilde(&p);
        }
        Self::config_dir().join("rattendance.conf")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            debug!("config file {} not found, using defaults", path.display());
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        if content.trim().is_empty() {
            return Ok(Config::default());
        }
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {e}", path.display())))
    }

    /// Write the configuration, creating the parent directory if needed.
    pub fn save(&self, path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }
        let yaml = serde_yaml::to_string(self).map_err(|_| AppError::ConfigSave)?;
        fs::write(path, yaml).map_err(|_| AppError::ConfigSave)?;
        debug!("config saved to {}", path.display());
        Ok(())
    }

    /// Token with surrounding whitespace removed; empty counts as absent.
    pub fn token(&self) -> Option<String> {
        self.api_token
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
    }
}
