/// Debug console log capture system
///
/// Captures log records from the host and the spotlight engine into a
/// bounded buffer that the debug console renders.
use chrono::{DateTime, Utc};
use log::{Level, Log, Metadata, Record};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Maximum number of log entries to keep in memory
const MAX_LOG_ENTRIES: usize = 1000;

/// A single log entry with timestamp and metadata
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub timestamp: DateTime<Utc>,
    pub level: Level,
    pub target: String,
    pub message: String,
}

/// Thread-safe log buffer shared between logger and UI
pub type LogBuffer = Arc<Mutex<VecDeque<LogEntry>>>;

/// Logger that feeds the console buffer and, for errors, stderr
pub struct DebugConsoleLogger {
    logs: LogBuffer,
    env_logger: env_logger::Logger,
    console_filter: env_logger::Logger,
}

impl DebugConsoleLogger {
    pub fn new(logs: LogBuffer) -> Self {
        // Terminal output stays at Error so it does not fight the TUI
        let env_logger = env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Error)
            .build();

        // RUST_LOG wins; otherwise host and engine at Debug
        let console_filter = if std::env::var("RUST_LOG").is_ok() {
            env_logger::Builder::from_default_env().build()
        } else {
            env_logger::Builder::new()
                .filter_module("spotlight_tui", log::LevelFilter::Debug)
                .filter_module("spotlight_engine", log::LevelFilter::Debug)
                .build()
        };

        Self {
            logs,
            env_logger,
            console_filter,
        }
    }

    /// Create a new empty log buffer
    pub fn create_buffer() -> LogBuffer {
        Arc::new(Mutex::new(VecDeque::with_capacity(MAX_LOG_ENTRIES)))
    }
}

/// Append to the buffer, dropping the oldest entry when full
fn push_entry(logs: &LogBuffer, entry: LogEntry) {
    if let Ok(mut logs) = logs.lock() {
        if logs.len() >= MAX_LOG_ENTRIES {
            logs.pop_front();
        }
        logs.push_back(entry);
    }
}

impl Log for DebugConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        self.console_filter.enabled(metadata) || self.env_logger.enabled(metadata)
    }

    fn log(&self, record: &Record) {
        if self.console_filter.enabled(record.metadata()) {
            push_entry(
                &self.logs,
                LogEntry {
                    timestamp: Utc::now(),
                    level: record.level(),
                    target: record.target().to_string(),
                    message: format!("{}", record.args()),
                },
            );
        }

        if self.env_logger.enabled(record.metadata()) {
            self.env_logger.log(record);
        }
    }

    fn flush(&self) {
        self.env_logger.flush();
    }
}

/// Initialize the debug console logger
///
/// Call once at startup before any logging occurs. Returns the buffer the
/// debug console reads from.
///
/// # Filtering with RUST_LOG
///
/// - No RUST_LOG (default): `spotlight_tui` and `spotlight_engine` at Debug+
/// - `RUST_LOG=spotlight_engine=trace`: include provider registration traces
/// - `RUST_LOG=info`: only Info+ from all modules
///
/// Terminal output is always Error-level only.
pub fn init_logger() -> anyhow::Result<LogBuffer> {
    let logs = DebugConsoleLogger::create_buffer();
    let logger = DebugConsoleLogger::new(logs.clone());

    log::set_boxed_logger(Box::new(logger))?;
    log::set_max_level(log::LevelFilter::Trace);

    log::info!("Debug console initialized - press ` or ~ to toggle");

    Ok(logs)
}
