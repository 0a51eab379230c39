//! Configuration loading and management
//!
//! Configuration is loaded from `~/.config/cfboard/config.toml`
//!
//! This module follows the XDG Base Directory Specification:
//! - Config: `$XDG_CONFIG_HOME/cfboard/` (~/.config/cfboard/)
//! - State/Logs: `$XDG_STATE_HOME/cfboard/` (~/.local/state/cfboard/)

use crate::error::{Error, Result};
use crate::types::{ContestWindow, SubmissionWindow};
use chrono::NaiveTime;
use serde::Deserialize;
use std::path::PathBuf;

/// Returns a best-effort home directory path.
fn home_dir() -> PathBuf {
    std::env::var_os("HOME")
        .map(PathBuf::from)
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Returns XDG_CONFIG_HOME or ~/.config
fn xdg_config_home() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| home_dir().join(".config"))
}

/// Returns XDG_STATE_HOME or ~/.local/state
fn xdg_state_home() -> PathBuf {
    std::env::var("XDG_STATE_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| home_dir().join(".local/state"))
}

/// Main configuration struct
#[derive(Debug, Deserialize, Default)]
pub struct Config {
    /// Analytics view defaults
    #[serde(default)]
    pub analytics: AnalyticsConfig,

    /// Sync workflow configuration
    #[serde(default)]
    pub sync: SyncConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Default windows for the analytics views.
///
/// Bucket width (100 rating points) and heatmap span (365 days) are fixed
/// contracts of the views, not configuration; see the `analytics` module.
#[derive(Debug, Deserialize)]
pub struct AnalyticsConfig {
    /// Trailing window for the solving-statistics view, in days (7/30/90/365)
    #[serde(default)]
    pub submission_window: SubmissionWindow,

    /// Trailing window for the contest history view, in days (30/90/365)
    #[serde(default)]
    pub contest_window: ContestWindow,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            submission_window: SubmissionWindow::default(),
            contest_window: ContestWindow::default(),
        }
    }
}

/// Scheduled-sync cadence, set by the dashboard admin.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SyncFrequency {
    #[default]
    Daily,
    /// Every Monday
    Weekly,
    /// The 1st of each month
    Monthly,
}

impl SyncFrequency {
    pub fn as_str(&self) -> &'static str {
        match self {
            SyncFrequency::Daily => "daily",
            SyncFrequency::Weekly => "weekly",
            SyncFrequency::Monthly => "monthly",
        }
    }
}

impl std::str::FromStr for SyncFrequency {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "daily" => Ok(SyncFrequency::Daily),
            "weekly" => Ok(SyncFrequency::Weekly),
            "monthly" => Ok(SyncFrequency::Monthly),
            _ => Err(format!("unknown sync frequency: {}", s)),
        }
    }
}

/// Sync workflow configuration.
///
/// The sync itself is performed by an external workflow against the judge
/// API; this crate only validates the settings and gates manual resyncs
/// (see the `sync` module).
#[derive(Debug, Deserialize, Clone)]
pub struct SyncConfig {
    /// Minimum seconds between manual resyncs for one student
    #[serde(default = "default_sync_cooldown_secs")]
    pub cooldown_secs: u64,

    /// How often the scheduled background sync runs
    #[serde(default)]
    pub frequency: SyncFrequency,

    /// Time of day the scheduled sync runs (HH:MM, 24-hour clock)
    #[serde(default = "default_sync_time")]
    pub time: String,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            cooldown_secs: default_sync_cooldown_secs(),
            frequency: SyncFrequency::default(),
            time: default_sync_time(),
        }
    }
}

impl SyncConfig {
    /// Cooldown as a chrono duration, for the sync gate.
    pub fn cooldown(&self) -> chrono::Duration {
        chrono::Duration::seconds(self.cooldown_secs as i64)
    }

    /// Parsed scheduled-sync time of day.
    pub fn scheduled_time(&self) -> Result<NaiveTime> {
        NaiveTime::parse_from_str(&self.time, "%H:%M").map_err(|_| {
            Error::Config(format!(
                "sync.time must be HH:MM (24-hour clock), got {:?}",
                self.time
            ))
        })
    }

    /// Validate configuration, returning error message if invalid
    pub fn validate(&self) -> Result<()> {
        if self.cooldown_secs == 0 {
            return Err(Error::Config(
                "sync.cooldown_secs must be greater than 0".to_string(),
            ));
        }
        self.scheduled_time()?;
        Ok(())
    }
}

fn default_sync_cooldown_secs() -> u64 {
    600
}

fn default_sync_time() -> String {
    "02:00".to_string()
}

/// Logging configuration
#[derive(Debug, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Maximum number of log files to keep
    #[serde(default = "default_max_log_files")]
    pub max_files: usize,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            max_files: default_max_log_files(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_max_log_files() -> usize {
    5
}

impl Config {
    /// Load configuration from the default path
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if !config_path.exists() {
            tracing::info!("No config file found at {:?}, using defaults", config_path);
            return Ok(Config::default());
        }

        Self::load_from(&config_path)
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("failed to read config file {:?}: {}", path, e)))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("failed to parse config: {}", e)))?;

        config.sync.validate()?;

        Ok(config)
    }

    /// Returns the default config file path
    ///
    /// `$XDG_CONFIG_HOME/cfboard/config.toml` (~/.config/cfboard/config.toml)
    pub fn config_path() -> PathBuf {
        xdg_config_home().join("cfboard").join("config.toml")
    }

    /// Returns the state directory path (for logs)
    ///
    /// `$XDG_STATE_HOME/cfboard/` (~/.local/state/cfboard/)
    pub fn state_dir() -> PathBuf {
        xdg_state_home().join("cfboard")
    }

    /// Returns the log file path
    ///
    /// `$XDG_STATE_HOME/cfboard/cfboard.log` (~/.local/state/cfboard/cfboard.log)
    pub fn log_path() -> PathBuf {
        Self::state_dir().join("cfboard.log")
    }

    /// Ensure XDG base directory environment variables are set.
    ///
    /// This is mainly for CLI binaries that want explicit, stable path
    /// behavior before invoking other components that read these env vars.
    pub fn ensure_xdg_env() {
        let home = home_dir();

        if std::env::var("XDG_STATE_HOME").is_err() {
            std::env::set_var("XDG_STATE_HOME", home.join(".local/state"));
        }

        if std::env::var("XDG_CONFIG_HOME").is_err() {
            std::env::set_var("XDG_CONFIG_HOME", home.join(".config"));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.analytics.submission_window.days(), 30);
        assert_eq!(config.analytics.contest_window.days(), 30);
        assert_eq!(config.sync.cooldown_secs, 600);
        assert_eq!(config.sync.frequency, SyncFrequency::Daily);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_parse_config() {
        let toml = r#"
[analytics]
submission_window = 90
contest_window = 365

[sync]
cooldown_secs = 1200
frequency = "weekly"
time = "04:30"

[logging]
level = "debug"
"#;
        let config: Config = toml::from_str(toml).unwrap();

        assert_eq!(config.analytics.submission_window.days(), 90);
        assert_eq!(config.analytics.contest_window.days(), 365);
        assert_eq!(config.sync.cooldown_secs, 1200);
        assert_eq!(config.sync.frequency, SyncFrequency::Weekly);
        assert_eq!(
            config.sync.scheduled_time().unwrap(),
            NaiveTime::from_hms_opt(4, 30, 0).unwrap()
        );
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_rejects_unsupported_window() {
        let toml = r#"
[analytics]
submission_window = 14
"#;
        assert!(toml::from_str::<Config>(toml).is_err());
    }

    #[test]
    fn test_sync_config_validation() {
        let config = SyncConfig::default();
        assert!(config.validate().is_ok());

        let config = SyncConfig {
            time: "25:99".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = SyncConfig {
            cooldown_secs: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_sync_cooldown_duration() {
        let config = SyncConfig::default();
        assert_eq!(config.cooldown(), chrono::Duration::seconds(600));
    }
}
