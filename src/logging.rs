use std::fs::File;

use simplelog::{
    ColorChoice, CombinedLogger, ConfigBuilder, SharedLogger, TermLogger, TerminalMode,
    WriteLogger,
};

use crate::config::LogConfig;
use crate::error::LogError;

/// Install the global logger.
///
/// Always writes to `config.file` at the configured level. With `console` set,
/// INFO and above are mirrored to the terminal; leave it off while the TUI
/// owns the screen.
pub fn init(config: &LogConfig, console: bool) -> Result<(), LogError> {
    let level = config.level_filter().unwrap_or(log::LevelFilter::Info);
    if let Some(parent) = config.file.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|source| LogError::FileCreate {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    let file = File::create(&config.file).map_err(|source| LogError::FileCreate {
        path: config.file.clone(),
        source,
    })?;
    let format = ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();

    let mut loggers: Vec<Box<dyn SharedLogger>> =
        vec![WriteLogger::new(level, format.clone(), file)];
    if console {
        loggers.push(TermLogger::new(
            log::LevelFilter::Info,
            format,
            TerminalMode::Mixed,
            ColorChoice::Auto,
        ));
    }
    CombinedLogger::init(loggers)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_creates_log_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = LogConfig {
            file: dir.path().join("nested").join("game.log"),
            level: "debug".into(),
        };
        // The file is created before the global logger is claimed.
        let _ = init(&config, false);
        assert!(config.file.exists());
    }
}
