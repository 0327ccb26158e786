//! Diagnostic logging handed to provider adapters

use std::fmt;
use std::sync::{Arc, Mutex};

/// Minimal logging capability an adapter needs
pub trait Logger: fmt::Debug + Send + Sync {
    /// Informational line
    fn info(&self, message: &str);
    /// Recoverable problem
    fn warn(&self, message: &str);
    /// Failed operation
    fn error(&self, message: &str);
}

/// Logger that forwards to `tracing`
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        tracing::info!(target: "translate_relay::provider", "{}", message);
    }

    fn warn(&self, message: &str) {
        tracing::warn!(target: "translate_relay::provider", "{}", message);
    }

    fn error(&self, message: &str) {
        tracing::error!(target: "translate_relay::provider", "{}", message);
    }
}

/// Severity of a recorded line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    /// `info`
    Info,
    /// `warn`
    Warn,
    /// `error`
    Error,
}

/// Logger that keeps every line in memory
#[derive(Debug, Clone, Default)]
pub struct MemoryLogger {
    lines: Arc<Mutex<Vec<(Level, String)>>>,
}

impl MemoryLogger {
    /// Create an empty logger
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the recorded lines
    pub fn lines(&self) -> Vec<(Level, String)> {
        self.lines
            .lock()
            .map(|lines| lines.clone())
            .unwrap_or_default()
    }

    /// Whether any line at `level` contains `needle`
    pub fn contains(&self, level: Level, needle: &str) -> bool {
        self.lines()
            .iter()
            .any(|(l, line)| *l == level && line.contains(needle))
    }

    fn push(&self, level: Level, message: &str) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.push((level, message.to_string()));
        }
    }
}

impl Logger for MemoryLogger {
    fn info(&self, message: &str) {
        self.push(Level::Info, message);
    }

    fn warn(&self, message: &str) {
        self.push(Level::Warn, message);
    }

    fn error(&self, message: &str) {
        self.push(Level::Error, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_logger_records_levels() {
        let logger = MemoryLogger::new();
        logger.info("Using proxy: http://127.0.0.1:8080");
        logger.error("Request error: connection refused");

        assert_eq!(logger.lines().len(), 2);
        assert!(logger.contains(Level::Info, "Using proxy"));
        assert!(logger.contains(Level::Error, "connection refused"));
        assert!(!logger.contains(Level::Warn, "connection refused"));
    }

    #[test]
    fn test_memory_logger_clones_share_lines() {
        let logger = MemoryLogger::new();
        let handle = logger.clone();
        handle.warn("API returned non-200 status code: 403");
        assert!(logger.contains(Level::Warn, "403"));
    }
}
