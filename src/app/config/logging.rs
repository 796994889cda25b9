use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LoggingConfig {
    /// Enable logging to file
    #[serde(default = "LoggingConfig::default_enabled")]
    pub enabled: bool,
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "LoggingConfig::default_level")]
    pub level: String,
    /// Also log to stderr, away from the terminal UI on stdout
    #[serde(default)]
    pub log_to_stderr: bool,
    #[serde(default = "LoggingConfig::default_true")]
    pub append_to_file: bool,
    #[serde(default = "LoggingConfig::default_true")]
    pub rotate_logs: bool,
    /// Maximum log file size in MB before rotation
    #[serde(default = "LoggingConfig::default_rotation_size_mb")]
    pub rotation_size_mb: u64,
    /// Number of log files to keep when rotating
    #[serde(default = "LoggingConfig::default_keep_log_files")]
    pub keep_log_files: u32,
    /// Directory for log files instead of the platform data directory
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_log_path: Option<PathBuf>,
}

impl LoggingConfig {
    fn default_enabled() -> bool {
        true
    }

    fn default_level() -> String {
        "info".to_string()
    }

    fn default_true() -> bool {
        true
    }

    fn default_rotation_size_mb() -> u64 {
        10
    }

    fn default_keep_log_files() -> u32 {
        5
    }

    /// Configured level; unknown names fall back to info.
    pub fn level_filter(&self) -> LevelFilter {
        match self.level.to_lowercase().as_str() {
            "off" => LevelFilter::Off,
            "error" => LevelFilter::Error,
            "warn" => LevelFilter::Warn,
            "debug" => LevelFilter::Debug,
            "trace" => LevelFilter::Trace,
            _ => LevelFilter::Info,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: Self::default_enabled(),
            level: Self::default_level(),
            log_to_stderr: false,
            append_to_file: Self::default_true(),
            rotate_logs: Self::default_true(),
            rotation_size_mb: Self::default_rotation_size_mb(),
            keep_log_files: Self::default_keep_log_files(),
            custom_log_path: None,
        }
    }
}
