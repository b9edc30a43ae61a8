//! Logging for i3-quickterm.
//!
//! Controlled by the DEBUG_LEVEL environment variable:
//! - 0 or unset: warnings and errors only
//! - 1: errors
//! - 2: info
//! - 3: debug (also enabled by `-v`)
//! - 4: trace
//!
//! Records are appended to `i3_quickterm_debug.log` in the temp directory so
//! nothing leaks into the terminal the shell is about to run in. Warnings
//! and errors are mirrored to stderr regardless of the level.

use log::{Level, LevelFilter, Log, Metadata, Record};
use parking_lot::Mutex;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::OnceLock;
use std::time::{SystemTime, UNIX_EPOCH};

/// Debug level configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum DebugLevel {
    Off = 0,
    Error = 1,
    Info = 2,
    Debug = 3,
    Trace = 4,
}

impl DebugLevel {
    pub fn parse(value: &str) -> Self {
        match value.trim().parse::<u8>() {
            Ok(1) => DebugLevel::Error,
            Ok(2) => DebugLevel::Info,
            Ok(3) => DebugLevel::Debug,
            Ok(4) => DebugLevel::Trace,
            _ => DebugLevel::Off,
        }
    }

    fn from_env() -> Self {
        std::env::var("DEBUG_LEVEL")
            .map(|v| Self::parse(&v))
            .unwrap_or(DebugLevel::Off)
    }

    fn filter(self) -> LevelFilter {
        match self {
            DebugLevel::Off => LevelFilter::Off,
            DebugLevel::Error => LevelFilter::Error,
            DebugLevel::Info => LevelFilter::Info,
            DebugLevel::Debug => LevelFilter::Debug,
            DebugLevel::Trace => LevelFilter::Trace,
        }
    }
}

pub fn log_path() -> PathBuf {
    std::env::temp_dir().join("i3_quickterm_debug.log")
}

struct DebugLogger {
    file_level: LevelFilter,
    file: Mutex<Option<File>>,
}

impl DebugLogger {
    fn new(level: DebugLevel) -> Self {
        let file = if level != DebugLevel::Off {
            // Silently skip file logging if the log can't be opened.
            OpenOptions::new()
                .create(true)
                .append(true)
                .open(log_path())
                .ok()
        } else {
            None
        };
        Self {
            file_level: level.filter(),
            file: Mutex::new(file),
        }
    }
}

fn get_timestamp() -> String {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    format!("{}.{:06}", now.as_secs(), now.subsec_micros())
}

impl Log for DebugLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Warn || metadata.level() <= self.file_level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        if record.level() <= Level::Warn {
            eprintln!("{}", record.args());
        }
        if record.level() <= self.file_level
            && let Some(file) = self.file.lock().as_mut()
        {
            let _ = writeln!(
                file,
                "[{}] [{}] [{}] {}",
                get_timestamp(),
                record.level(),
                record.target(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        if let Some(file) = self.file.lock().as_mut() {
            let _ = file.flush();
        }
    }
}

static LOGGER: OnceLock<DebugLogger> = OnceLock::new();

/// Route `log` records to stderr and the debug log file.
///
/// `verbose` raises the file level to at least debug. Calling this twice is
/// harmless; the first call wins.
pub fn init_log_bridge(verbose: bool) {
    let mut level = DebugLevel::from_env();
    if verbose {
        level = level.max(DebugLevel::Debug);
    }
    let logger = LOGGER.get_or_init(|| DebugLogger::new(level));
    if log::set_logger(logger).is_ok() {
        log::set_max_level(logger.file_level.max(LevelFilter::Warn));
    }
}
