//! Message sinks for reporting resolution failures.
//!
//! The resolver never logs on its own. Callers hand failures to a
//! [`MessageSink`], either a [`ConsoleLog`] that prints filtered messages and
//! tallies warnings and errors for a final summary, or a [`TracingSink`] that
//! forwards to whatever `tracing` subscriber the host has installed.

use std::error::Error;
use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;
use std::sync::atomic::{AtomicU8, AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};

use chrono::Local;

use crate::error::LogLevelError;

/// Severity of a recorded message, ordered from least to most severe.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum LogLevel {
    /// Diagnostic detail
    Debug,
    /// Normal progress messages
    #[default]
    Info,
    /// Recoverable problems, counted
    Warn,
    /// Failures, counted
    Error,
}

impl LogLevel {
    const fn from_u8(value: u8) -> Self {
        match value {
            0 => Self::Debug,
            1 => Self::Info,
            2 => Self::Warn,
            _ => Self::Error,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warn => "WARN",
            Self::Error => "ERROR",
        };
        write!(f, "{name}")
    }
}

impl FromStr for LogLevel {
    type Err = LogLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            _ => Err(LogLevelError {
                value: s.to_string(),
            }),
        }
    }
}

/// Destination for messages tagged with a severity.
pub trait MessageSink {
    /// Records a message at the given level.
    fn record(&self, level: LogLevel, message: &str);

    /// Records a debug message.
    fn debug(&self, message: &str) {
        self.record(LogLevel::Debug, message);
    }

    /// Records an informational message.
    fn info(&self, message: &str) {
        self.record(LogLevel::Info, message);
    }

    /// Records a warning.
    fn warn(&self, message: &str) {
        self.record(LogLevel::Warn, message);
    }

    /// Records an error.
    fn error(&self, message: &str) {
        self.record(LogLevel::Error, message);
    }
}

/// Console logger with a minimum level and warning/error counters.
///
/// Messages are written as `[HH:MM:SS LEVEL] message`. Warnings and errors
/// are counted even when filtered out by the minimum level.
///
/// # Examples
///
/// ```
/// use srs_epsg::{ConsoleLog, LogLevel, MessageSink, resolve_reporting};
///
/// let log = ConsoleLog::with_writer(LogLevel::Warn, Vec::new());
/// log.info("reading city model");
/// assert_eq!(resolve_reporting(Some("EPSG:x"), &log), None);
///
/// assert_eq!(log.warnings(), 1);
/// let out = String::from_utf8(log.into_writer()).unwrap();
/// assert!(!out.contains("reading city model"));
/// assert!(out.ends_with("WARN] Failed to interpret EPSG code.\n"));
/// ```
#[derive(Debug)]
pub struct ConsoleLog<W = io::Stdout> {
    level: AtomicU8,
    warnings: AtomicUsize,
    errors: AtomicUsize,
    out: Mutex<W>,
}

impl ConsoleLog {
    /// Creates a logger writing to standard output.
    #[must_use]
    pub fn stdout(level: LogLevel) -> Self {
        Self::with_writer(level, io::stdout())
    }
}

impl Default for ConsoleLog {
    fn default() -> Self {
        Self::stdout(LogLevel::default())
    }
}

impl<W: Write> ConsoleLog<W> {
    /// Creates a logger writing to `out`.
    #[must_use]
    pub fn with_writer(level: LogLevel, out: W) -> Self {
        Self {
            level: AtomicU8::new(level as u8),
            warnings: AtomicUsize::new(0),
            errors: AtomicUsize::new(0),
            out: Mutex::new(out),
        }
    }

    /// Returns the minimum level written.
    #[must_use]
    pub fn level(&self) -> LogLevel {
        LogLevel::from_u8(self.level.load(Ordering::Relaxed))
    }

    /// Sets the minimum level written.
    pub fn set_level(&self, level: LogLevel) {
        self.level.store(level as u8, Ordering::Relaxed);
    }

    /// Number of warnings recorded so far.
    #[must_use]
    pub fn warnings(&self) -> usize {
        self.warnings.load(Ordering::Relaxed)
    }

    /// Number of errors recorded so far.
    #[must_use]
    pub fn errors(&self) -> usize {
        self.errors.load(Ordering::Relaxed)
    }

    /// Records an error followed by one `Cause:` line per error in the
    /// `source()` chain of `cause`. Links with an empty message are skipped.
    /// Counts as a single error.
    pub fn error_with_cause(&self, message: &str, cause: &dyn Error) {
        self.record(LogLevel::Error, message);

        let mut next = Some(cause);
        while let Some(e) = next {
            let text = e.to_string();
            if !text.is_empty() {
                self.emit(LogLevel::Error, &format!("Cause: {text}"));
            }
            next = e.source();
        }
    }

    /// Writes a message without prefix or level filtering.
    pub fn print(&self, message: &str) {
        let mut out = self.out.lock().unwrap_or_else(PoisonError::into_inner);
        // Console output is best effort.
        let _ = writeln!(out, "{message}");
    }

    /// Consumes the logger and returns its writer.
    pub fn into_writer(self) -> W {
        self.out.into_inner().unwrap_or_else(PoisonError::into_inner)
    }

    fn emit(&self, level: LogLevel, message: &str) {
        if level < self.level() {
            return;
        }

        let time = Local::now().format("%H:%M:%S");
        let mut out = self.out.lock().unwrap_or_else(PoisonError::into_inner);
        let _ = writeln!(out, "[{time} {level}] {message}");
    }
}

impl<W: Write> MessageSink for ConsoleLog<W> {
    fn record(&self, level: LogLevel, message: &str) {
        self.emit(level, message);

        match level {
            LogLevel::Warn => {
                self.warnings.fetch_add(1, Ordering::Relaxed);
            }
            LogLevel::Error => {
                self.errors.fetch_add(1, Ordering::Relaxed);
            }
            LogLevel::Debug | LogLevel::Info => {}
        }
    }
}

/// Sink forwarding messages to `tracing` under the `srs_epsg` target.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl MessageSink for TracingSink {
    fn record(&self, level: LogLevel, message: &str) {
        match level {
            LogLevel::Debug => tracing::debug!(target: "srs_epsg", "{message}"),
            LogLevel::Info => tracing::info!(target: "srs_epsg", "{message}"),
            LogLevel::Warn => tracing::warn!(target: "srs_epsg", "{message}"),
            LogLevel::Error => tracing::error!(target: "srs_epsg", "{message}"),
        }
    }
}
