//! # Job Logging
//!
//! Library code reports progress through a [`JobLog`] handed to it at
//! construction time instead of reaching for a global logger. The binary
//! wires in [`TracingLog`], which forwards to whatever `tracing` subscriber
//! the process installed at startup.

use std::fmt;

/// Severity of a job log line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Info => write!(f, "info"),
            LogLevel::Error => write!(f, "error"),
        }
    }
}

/// Sink for user-facing job messages
pub trait JobLog: Send + Sync {
    /// Emit an informational message
    fn info(&self, message: &str);

    /// Emit an error message
    fn error(&self, message: &str);

    /// Emit a message at the given level
    fn log(&self, level: LogLevel, message: &str) {
        match level {
            LogLevel::Info => self.info(message),
            LogLevel::Error => self.error(message),
        }
    }
}

/// [`JobLog`] backed by the process-wide `tracing` subscriber
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLog;

impl JobLog for TracingLog {
    fn info(&self, message: &str) {
        tracing::info!(target: "sllm::fine_tuning", "{}", message);
    }

    fn error(&self, message: &str) {
        tracing::error!(target: "sllm::fine_tuning", "{}", message);
    }
}

/// [`JobLog`] that keeps every line in memory
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct RecordingLog {
    lines: std::sync::Mutex<Vec<(LogLevel, String)>>,
}

#[cfg(test)]
impl RecordingLog {
    pub(crate) fn lines(&self) -> Vec<(LogLevel, String)> {
        self.lines.lock().unwrap().clone()
    }

    /// Messages recorded at `level`, in emission order
    pub(crate) fn messages(&self, level: LogLevel) -> Vec<String> {
        self.lines()
            .into_iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, m)| m)
            .collect()
    }

    fn push(&self, level: LogLevel, message: &str) {
        self.lines.lock().unwrap().push((level, message.to_string()));
    }
}

#[cfg(test)]
impl JobLog for RecordingLog {
    fn info(&self, message: &str) {
        self.push(LogLevel::Info, message);
    }

    fn error(&self, message: &str) {
        self.push(LogLevel::Error, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_dispatches_by_level() {
        let log = RecordingLog::default();
        log.log(LogLevel::Info, "starting");
        log.log(LogLevel::Error, "boom");
        log.info("done");

        assert_eq!(
            log.lines(),
            vec![
                (LogLevel::Info, "starting".to_string()),
                (LogLevel::Error, "boom".to_string()),
                (LogLevel::Info, "done".to_string()),
            ]
        );
        assert_eq!(log.messages(LogLevel::Error), vec!["boom".to_string()]);
    }

    #[test]
    fn test_level_display() {
        assert_eq!(LogLevel::Info.to_string(), "info");
        assert_eq!(LogLevel::Error.to_string(), "error");
    }
}
