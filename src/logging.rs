//! File logging for emojiplus
//!
//! Opt-in: nothing is written until [`init`] has been called. Entries go to
//! `emojiplus.log` next to the executable, truncated on each run.

use parking_lot::Mutex;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::OnceLock;

/// Global logger instance
static LOGGER: OnceLock<Mutex<EmojiLogger>> = OnceLock::new();

/// Log levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // honours `{:5}`
        f.pad(match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
        })
    }
}

/// Main logger struct
pub struct EmojiLogger {
    file: Option<File>,
    min_level: LogLevel,
}

impl EmojiLogger {
    fn new(min_level: LogLevel) -> Self {
        let log_path = Self::get_log_path();
        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&log_path)
            .ok();

        if file.is_some() {
            eprintln!("[emojiplus] Logging to: {}", log_path.display());
        }

        Self { file, min_level }
    }

    /// Get the log file path (same directory as executable)
    fn get_log_path() -> PathBuf {
        std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(|p| p.to_path_buf()))
            .unwrap_or_else(|| PathBuf::from("."))
            .join("emojiplus.log")
    }

    fn log(&mut self, level: LogLevel, module: &str, message: &str) {
        if level < self.min_level {
            return;
        }

        if let Some(ref mut file) = self.file {
            let _ = file.write_all(format_entry(level, module, message).as_bytes());
            let _ = file.flush();
        }
    }
}

fn format_entry(level: LogLevel, module: &str, message: &str) -> String {
    let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
    format!("[{}] [{:5}] [{}] {}\n", timestamp, level, module, message)
}

/// Initialize the global logger. Later calls are ignored.
pub fn init(min_level: LogLevel) {
    let _ = LOGGER.set(Mutex::new(EmojiLogger::new(min_level)));
}

pub fn is_enabled() -> bool {
    LOGGER.get().is_some()
}

fn log(level: LogLevel, module: &str, message: &str) {
    if let Some(logger) = LOGGER.get() {
        logger.lock().log(level, module, message);
    }
}

pub fn debug(module: &str, message: &str) {
    log(LogLevel::Debug, module, message);
}

pub fn info(module: &str, message: &str) {
    log(LogLevel::Info, module, message);
}

pub fn warn(module: &str, message: &str) {
    log(LogLevel::Warn, module, message);
}

pub fn error(module: &str, message: &str) {
    log(LogLevel::Error, module, message);
}

/// Write a separator line for readability
pub fn separator(label: &str) {
    info("---", &format!("========== {} ==========", label));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels_are_ordered() {
        assert!(LogLevel::Debug < LogLevel::Info);
        assert!(LogLevel::Warn < LogLevel::Error);
    }

    #[test]
    fn entry_carries_level_and_module() {
        let line = format_entry(LogLevel::Warn, "TUI", "clipboard unavailable");
        assert!(line.contains("[WARN ] [TUI] clipboard unavailable"));
        assert!(line.ends_with('\n'));
    }
}
