//! Logging initialization for the homework bot.
//!
//! Writes logs to `./homework_bot.log` in the current working directory,
//! truncating it on every start.

use std::fs::File;
use std::path::PathBuf;

use log::LevelFilter;
use simplelog::{
    ColorChoice, CombinedLogger, Config, ConfigBuilder, SharedLogger, TermLogger, TerminalMode,
    WriteLogger,
};

const LOG_FILE: &str = "./homework_bot.log";

/// Destination for log output.
pub enum LogDestination {
    /// Write to the log file only.
    File,
    /// Write to the log file and mirror to the terminal.
    Both,
}

impl LogDestination {
    /// `HOMEWORK_LOG=file` keeps the terminal quiet; anything else logs to both.
    pub fn from_env() -> Self {
        match std::env::var("HOMEWORK_LOG").as_deref() {
            Ok("file") => LogDestination::File,
            _ => LogDestination::Both,
        }
    }
}

/// Initialize the global logger.
pub fn initialize(destination: LogDestination) {
    let level = LevelFilter::Info;
    let config = build_config();

    let mut loggers: Vec<Box<dyn SharedLogger>> = Vec::new();
    if matches!(destination, LogDestination::Both) {
        loggers.push(TermLogger::new(
            level,
            config.clone(),
            TerminalMode::Mixed,
            ColorChoice::Auto,
        ));
    }
    if let Some(file_logger) = create_file_logger(level, config) {
        loggers.push(file_logger);
    }

    let _ = CombinedLogger::init(loggers);
}

fn build_config() -> Config {
    ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .build()
}

fn create_file_logger(level: LevelFilter, config: Config) -> Option<Box<WriteLogger<File>>> {
    let log_path = PathBuf::from(LOG_FILE);
    match File::create(&log_path) {
        Ok(file) => Some(WriteLogger::new(level, config, file)),
        Err(err) => {
            eprintln!("Warning: Could not create log file at {:?}: {}", log_path, err);
            None
        }
    }
}
