//! Bridge: loggers and writers vary independently.
//!
//! [`Logger`] is the abstraction side: it knows about modules and message
//! formatting. [`LogWriter`] is the implementation side: it only puts a raw
//! line somewhere. A logger holds a reference to a writer; writers never
//! learn about loggers.

use chrono::{Local, NaiveTime};
use std::cell::RefCell;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::error::PatternError;

// =============================================================================
// Implementation side
// =============================================================================

pub trait LogWriter {
    fn write(&self, line: &str) -> Result<(), PatternError>;
}

/// Writes each line to stdout.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleWriter;

impl LogWriter for ConsoleWriter {
    fn write(&self, line: &str) -> Result<(), PatternError> {
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{}", line)?;
        Ok(())
    }
}

/// Appends each line to a file.
///
/// The file is opened, appended to and closed on every call; no handle
/// outlives a write.
#[derive(Debug, Clone)]
pub struct FileWriter {
    path: PathBuf,
}

impl FileWriter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LogWriter for FileWriter {
    fn write(&self, line: &str) -> Result<(), PatternError> {
        let result = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .and_then(|mut file| writeln!(file, "{}", line));

        result.map_err(|source| {
            tracing::warn!(path = %self.path.display(), error = %source, "log append failed");
            PatternError::write(&self.path, source)
        })
    }
}

/// Keeps lines in memory, in write order.
#[derive(Debug, Default)]
pub struct MemoryWriter {
    lines: RefCell<Vec<String>>,
}

impl MemoryWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.lines.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.borrow().is_empty()
    }
}

impl LogWriter for MemoryWriter {
    fn write(&self, line: &str) -> Result<(), PatternError> {
        self.lines.borrow_mut().push(line.to_string());
        Ok(())
    }
}

// =============================================================================
// Abstraction side
// =============================================================================

pub trait Logger {
    fn log(&self, message: &str) -> Result<(), PatternError>;
}

/// `[<module>] HH:MM:SS - <message>`
pub fn format_line(module: &str, time: NaiveTime, message: &str) -> String {
    format!("[{}] {} - {}", module, time.format("%H:%M:%S"), message)
}

/// Logger for one shop module, bound to one writer.
pub struct EcommerceLogger<'w> {
    writer: &'w dyn LogWriter,
    module: String,
}

impl<'w> EcommerceLogger<'w> {
    pub fn new(writer: &'w dyn LogWriter, module: impl Into<String>) -> Self {
        Self {
            writer,
            module: module.into(),
        }
    }

    pub fn module(&self) -> &str {
        &self.module
    }

    /// Same module, different writer. `self` is left as it was.
    pub fn rebind<'n>(&self, writer: &'n dyn LogWriter) -> EcommerceLogger<'n> {
        EcommerceLogger::new(writer, self.module.clone())
    }

    pub fn log_at(&self, message: &str, time: NaiveTime) -> Result<(), PatternError> {
        let line = format_line(&self.module, time, message);
        tracing::debug!(module = %self.module, "logger hands line to writer");
        self.writer.write(&line)
    }
}

impl Logger for EcommerceLogger<'_> {
    fn log(&self, message: &str) -> Result<(), PatternError> {
        self.log_at(message, Local::now().time())
    }
}
