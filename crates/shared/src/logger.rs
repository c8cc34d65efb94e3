//! Logger interface for dependency injection

use std::collections::HashMap;
use std::sync::Mutex;

/// Logger interface for dependency injection
pub trait Logger: Send + Sync {
    fn debug(&self, message: &str, meta: Option<&HashMap<String, String>>);
    fn info(&self, message: &str, meta: Option<&HashMap<String, String>>);
    fn warn(&self, message: &str, meta: Option<&HashMap<String, String>>);
    fn error(&self, message: &str, meta: Option<&HashMap<String, String>>);
}

/// Simple console logger implementation
#[derive(Debug, Clone, Default)]
pub struct ConsoleLogger;

impl Logger for ConsoleLogger {
    fn debug(&self, message: &str, _meta: Option<&HashMap<String, String>>) {
        eprintln!("[DEBUG] {}", message);
    }

    fn info(&self, message: &str, _meta: Option<&HashMap<String, String>>) {
        eprintln!("[INFO] {}", message);
    }

    fn warn(&self, message: &str, _meta: Option<&HashMap<String, String>>) {
        eprintln!("[WARN] {}", message);
    }

    fn error(&self, message: &str, _meta: Option<&HashMap<String, String>>) {
        eprintln!("[ERROR] {}", message);
    }
}

/// No-op logger for testing
#[derive(Debug, Clone, Default)]
pub struct NullLogger;

impl Logger for NullLogger {
    fn debug(&self, _message: &str, _meta: Option<&HashMap<String, String>>) {}
    fn info(&self, _message: &str, _meta: Option<&HashMap<String, String>>) {}
    fn warn(&self, _message: &str, _meta: Option<&HashMap<String, String>>) {}
    fn error(&self, _message: &str, _meta: Option<&HashMap<String, String>>) {}
}

/// Logger that forwards to the `tracing` macros
///
/// Lets an embedding process collect panel diagnostics through whatever
/// subscriber it has installed.
#[derive(Debug, Clone, Default)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn debug(&self, message: &str, _meta: Option<&HashMap<String, String>>) {
        tracing::debug!("{}", message);
    }

    fn info(&self, message: &str, _meta: Option<&HashMap<String, String>>) {
        tracing::info!("{}", message);
    }

    fn warn(&self, message: &str, _meta: Option<&HashMap<String, String>>) {
        tracing::warn!("{}", message);
    }

    fn error(&self, message: &str, _meta: Option<&HashMap<String, String>>) {
        tracing::error!("{}", message);
    }
}

/// Logger that records messages in memory
///
/// Useful for testing and development.
#[derive(Debug, Default)]
pub struct MemoryLogger {
    entries: Mutex<Vec<(String, String)>>,
}

impl MemoryLogger {
    pub fn new() -> Self {
        Self::default()
    }

    fn record(&self, level: &str, message: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.push((level.to_string(), message.to_string()));
        }
    }

    /// All `(level, message)` pairs recorded so far
    pub fn entries(&self) -> Vec<(String, String)> {
        self.entries.lock().map(|e| e.clone()).unwrap_or_default()
    }

    /// Number of error-level messages recorded
    pub fn error_count(&self) -> usize {
        self.entries
            .lock()
            .map(|e| e.iter().filter(|(level, _)| level == "error").count())
            .unwrap_or(0)
    }
}

impl Logger for MemoryLogger {
    fn debug(&self, message: &str, _meta: Option<&HashMap<String, String>>) {
        self.record("debug", message);
    }

    fn info(&self, message: &str, _meta: Option<&HashMap<String, String>>) {
        self.record("info", message);
    }

    fn warn(&self, message: &str, _meta: Option<&HashMap<String, String>>) {
        self.record("warn", message);
    }

    fn error(&self, message: &str, _meta: Option<&HashMap<String, String>>) {
        self.record("error", message);
    }
}
