use crate::app::config::LoggingConfig;
use flexi_logger::{
    Cleanup, Criterion, Duplicate, FileSpec, FlexiLoggerError, LogSpecification, Logger, LoggerHandle,
    Naming,
};
use std::path::{Path, PathBuf};

/// Initialize the file logger.
///
/// The returned handle must stay alive for as long as the application logs.
pub fn init_logger(config: &LoggingConfig) -> Result<LoggerHandle, FlexiLoggerError> {
    let log_level = if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        config.level_filter()
    };

    let mut logger = Logger::with(LogSpecification::builder().default(log_level).build())
        .log_to_file(
            FileSpec::default()
                .directory(get_log_directory(config))
                .basename("lyricard")
                .suppress_timestamp(),
        )
        .format_for_files(custom_log_format)
        .use_utc();

    if config.append_to_file {
        logger = logger.append();
    }

    if config.rotate_logs {
        logger = logger.rotate(
            Criterion::Size(config.rotation_size_mb * 1024 * 1024),
            Naming::Timestamps,
            Cleanup::KeepLogFiles(config.keep_log_files as usize),
        );
    }

    // stdout belongs to the terminal UI
    if config.log_to_stderr {
        logger = logger.duplicate_to_stderr(Duplicate::All);
    }

    let handle = logger.start()?;
    log::info!("Logger initialized with level: {:?}", log_level);
    log::info!("Log file location: {}", get_log_file_path(config).display());

    Ok(handle)
}

/// Get the log directory, honouring `custom_log_path` when set
pub fn get_log_directory(config: &LoggingConfig) -> PathBuf {
    if let Some(ref custom) = config.custom_log_path {
        return custom.clone();
    }

    #[cfg(target_os = "macos")]
    return dirs::data_dir()
        .map(|h| h.join("Logs/lyricard"))
        .unwrap_or_else(|| PathBuf::from("./logs"));

    #[cfg(not(target_os = "macos"))]
    return dirs::data_dir()
        .or_else(|| dirs::home_dir().map(|h| h.join(".local/share")))
        .map(|d| d.join("lyricard/logs"))
        .unwrap_or_else(|| PathBuf::from("./logs"));
}

/// Get the full path to the main log file
pub fn get_log_file_path(config: &LoggingConfig) -> PathBuf {
    get_log_directory(config).join("lyricard.log")
}

/// Custom log format for file output
fn custom_log_format(
    w: &mut dyn std::io::Write,
    now: &mut flexi_logger::DeferredNow,
    record: &log::Record,
) -> Result<(), std::io::Error> {
    write!(
        w,
        "{} [{}] [{}:{}] {}",
        now.now().format("%Y-%m-%d %H:%M:%S%.3f"),
        record.level(),
        record.file().unwrap_or("unknown"),
        record.line().unwrap_or(0),
        record.args()
    )
}

/// Ensure log directory exists
pub fn ensure_log_directory(config: &LoggingConfig) -> color_eyre::Result<()> {
    let log_dir = get_log_directory(config);
    if !log_dir.exists() {
        std::fs::create_dir_all(&log_dir)?;
    }
    Ok(())
}

pub fn log_startup_info(config: &LoggingConfig) {
    log::info!("=== Lyricard Starting ===");
    log::info!("Version: {}", env!("CARGO_PKG_VERSION"));
    log::info!("OS: {}", std::env::consts::OS);
    log::info!("Architecture: {}", std::env::consts::ARCH);
    log::info!("Log file: {}", get_log_file_path(config).display());
}

pub fn log_shutdown_info() {
    log::info!("=== Lyricard Shutting Down ===");
}

/// Log configuration loading
pub fn log_config_loading(config_path: &Path, created: bool) {
    if created {
        log::info!("Created default config file at: {}", config_path.display());
    } else {
        log::info!("Loaded config file from: {}", config_path.display());
    }
}

/// Log an accepted lyric transition
pub fn log_lyric_transition(entity: &str, previous: &str, current: &str, next: &str) {
    log::debug!(
        "Lyric transition on {}: previous={:?} current={:?} next={:?}",
        entity,
        previous,
        current,
        next
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_custom_log_directory() {
        let config = LoggingConfig {
            custom_log_path: Some(PathBuf::from("/tmp/lyricard-logs")),
            ..LoggingConfig::default()
        };
        assert_eq!(
            get_log_file_path(&config),
            PathBuf::from("/tmp/lyricard-logs/lyricard.log")
        );
    }
}
