//! Log sink port
//!
//! Fire-and-forget status output. The console implementation lives in the
//! binary's `ui` module; the memory sink here records lines for tests.

use std::sync::Mutex;

/// Semantic colors a status line may ask for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogColor {
    Success,
    Error,
    Warning,
    Info,
    Dim,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

/// One recorded line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogLine {
    pub level: LogLevel,
    pub color: Option<LogColor>,
    pub message: String,
}

/// Trait for receiving status output
pub trait LogSink: Send + Sync {
    /// Write one line at `level`, optionally colored
    fn log(&self, level: LogLevel, color: Option<LogColor>, message: &str);

    fn debug(&self, message: &str) {
        self.log(LogLevel::Debug, Some(LogColor::Dim), message);
    }

    fn info(&self, message: &str) {
        self.log(LogLevel::Info, None, message);
    }

    fn warn(&self, message: &str) {
        self.log(LogLevel::Warn, Some(LogColor::Warning), message);
    }

    fn error(&self, message: &str) {
        self.log(LogLevel::Error, Some(LogColor::Error), message);
    }

    /// Info-level line in an explicit color
    fn colored(&self, color: LogColor, message: &str) {
        self.log(LogLevel::Info, Some(color), message);
    }
}

/// Sink that keeps every line in memory
#[derive(Default)]
pub struct MemoryLogSink {
    lines: Mutex<Vec<LogLine>>,
}

impl MemoryLogSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<LogLine> {
        self.lines
            .lock()
            .map(|lines| lines.clone())
            .unwrap_or_default()
    }

    /// Messages at `level`, in order
    pub fn messages(&self, level: LogLevel) -> Vec<String> {
        self.lines()
            .into_iter()
            .filter(|l| l.level == level)
            .map(|l| l.message)
            .collect()
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.lines().iter().any(|l| l.message.contains(needle))
    }
}

impl LogSink for MemoryLogSink {
    fn log(&self, level: LogLevel, color: Option<LogColor>, message: &str) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.push(LogLine {
                level,
                color,
                message: message.to_string(),
            });
        }
    }
}
