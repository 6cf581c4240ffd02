//! Leveled console logging for the server and the CLI.
//!
//! Lines are timestamped and may carry the id of the request they belong
//! to; errors go to stderr, everything else to stdout.

use chrono::Local;
use uuid::Uuid;

/// Log level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl LogLevel {
    fn prefix(&self) -> &'static str {
        match self {
            LogLevel::Info => "  ",
            LogLevel::Success => "✓",
            LogLevel::Warning => "⚠️",
            LogLevel::Error => "❌",
        }
    }
}

/// A single log line
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub level: LogLevel,
    pub message: String,
    /// Request the line belongs to, if any
    pub request_id: Option<Uuid>,
    /// Nesting level (for sub-steps)
    pub indent: u8,
}

impl LogEntry {
    pub fn new(level: LogLevel, message: impl Into<String>) -> Self {
        Self { level, message: message.into(), request_id: None, indent: 0 }
    }

    pub fn for_request(mut self, id: Uuid) -> Self {
        self.request_id = Some(id);
        self
    }

    pub fn with_indent(mut self, indent: u8) -> Self {
        self.indent = indent;
        self
    }

    /// Render without the timestamp.
    pub fn render(&self) -> String {
        let indent = "   ".repeat(self.indent as usize);
        match self.request_id {
            Some(id) => {
                let short = id.simple().to_string();
                format!("{}{} [{}] {}", indent, self.level.prefix(), &short[..8], self.message)
            }
            None => format!("{}{} {}", indent, self.level.prefix(), self.message),
        }
    }

    pub fn emit(&self) {
        let line = format!("[{}] {}", Local::now().format("%H:%M:%S"), self.render());
        if self.level == LogLevel::Error {
            eprintln!("{}", line);
        } else {
            println!("{}", line);
        }
    }
}

/// Convenient logging functions
pub fn log_info(msg: impl Into<String>) {
    LogEntry::new(LogLevel::Info, msg).emit();
}

pub fn log_success(msg: impl Into<String>) {
    LogEntry::new(LogLevel::Success, msg).emit();
}

pub fn log_warning(msg: impl Into<String>) {
    LogEntry::new(LogLevel::Warning, msg).emit();
}

pub fn log_error(msg: impl Into<String>) {
    LogEntry::new(LogLevel::Error, msg).emit();
}

pub fn log_request(id: Uuid, level: LogLevel, msg: impl Into<String>) {
    LogEntry::new(level, msg).for_request(id).emit();
}

pub fn log_request_indent(id: Uuid, level: LogLevel, msg: impl Into<String>, indent: u8) {
    LogEntry::new(level, msg).for_request(id).with_indent(indent).emit();
}
