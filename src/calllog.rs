//! Per-call outcome logging.
//!
//! [`CallLogger`] runs a fallible closure and appends one line describing
//! the outcome to a log file or to stdout:
//!
//! ```text
//! [2024-03-11 02:26:18] mask_account_card ok
//! [2024-03-11 02:26:19] mask_account_card error: card number must contain digits only. Inputs: ("Visa 12ab",)
//! ```
//!
//! The closure's result is always returned unchanged; a failure to write the
//! log line is reported through `tracing` and otherwise ignored.

use chrono::Local;
use std::fmt;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// File used by [`CallLogger::default`].
pub const DEFAULT_LOG_FILE: &str = "logfile.txt";

/// Timestamp layout of each log line.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Where log lines go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogSink {
    /// Standard output, flushed after every line.
    Stdout,
    /// A file opened in append mode for every call.
    File(PathBuf),
}

/// Logs the outcome of function calls.
///
/// # Example
///
/// ```
/// use bank_widget::calllog::{CallLogger, LogSink};
/// use bank_widget::widget::mask_account_card;
///
/// let logger = CallLogger::new(None::<&str>);
/// assert_eq!(logger.sink(), &LogSink::Stdout);
///
/// let masked = logger.call("mask_account_card", ("Счет 73654108430135874305",), || {
///     mask_account_card("Счет 73654108430135874305")
/// });
/// assert_eq!(masked.unwrap(), "Счет **4305");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallLogger {
    sink: LogSink,
}

impl Default for CallLogger {
    fn default() -> Self {
        Self::to_file(DEFAULT_LOG_FILE)
    }
}

impl CallLogger {
    /// Creates a logger writing to `filename`, or to stdout when it is
    /// `None` or empty.
    pub fn new<P: AsRef<Path>>(filename: Option<P>) -> Self {
        match filename {
            Some(path) if !path.as_ref().as_os_str().is_empty() => Self::to_file(path),
            _ => Self::to_stdout(),
        }
    }

    /// Creates a logger writing to stdout.
    pub fn to_stdout() -> Self {
        Self {
            sink: LogSink::Stdout,
        }
    }

    /// Creates a logger appending to the given file.
    pub fn to_file<P: AsRef<Path>>(path: P) -> Self {
        Self {
            sink: LogSink::File(path.as_ref().to_path_buf()),
        }
    }

    /// Returns the log destination.
    #[inline]
    pub fn sink(&self) -> &LogSink {
        &self.sink
    }

    /// Runs `f`, logs `"<name> ok"` or `"<name> error: <err>. Inputs: <inputs>"`,
    /// and returns the result of `f`.
    pub fn call<T, E, A, F>(&self, name: &str, inputs: A, f: F) -> Result<T, E>
    where
        E: fmt::Display,
        A: fmt::Debug,
        F: FnOnce() -> Result<T, E>,
    {
        let result = f();
        let line = match &result {
            Ok(_) => ok_line(name),
            Err(e) => error_line(name, e, &inputs),
        };

        if let Err(e) = self.write_line(&line) {
            tracing::warn!(sink = ?self.sink, error = %e, "failed to write call log");
        }

        result
    }

    fn write_line(&self, line: &str) -> io::Result<()> {
        match &self.sink {
            LogSink::Stdout => {
                let mut out = io::stdout().lock();
                writeln!(out, "{}", line)?;
                out.flush()
            }
            LogSink::File(path) => {
                let mut file = OpenOptions::new().create(true).append(true).open(path)?;
                writeln!(file, "{}", line)
            }
        }
    }
}

fn timestamp() -> String {
    Local::now().format(TIMESTAMP_FORMAT).to_string()
}

fn ok_line(name: &str) -> String {
    format!("[{}] {} ok", timestamp(), name)
}

fn error_line(name: &str, error: &dyn fmt::Display, inputs: &dyn fmt::Debug) -> String {
    format!("[{}] {} error: {}. Inputs: {:?}", timestamp(), name, error, inputs)
}
