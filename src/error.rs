use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failures surfaced by the demos.
///
/// Only the bridge writers and config loading can fail; every other pattern
/// operation is total.
#[derive(Error, Debug)]
pub enum PatternError {
    #[error("Failed to append to log file '{}': {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write to console: {0}")]
    Console(#[from] io::Error),

    #[error("Failed to read config file '{}': {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid config file '{}': {source}", .path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl PatternError {
    pub fn write(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_write_error_display() {
        let error = PatternError::write(
            "log.txt",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        let display = format!("{}", error);
        assert!(display.contains("log.txt"));
        assert!(display.contains("denied"));
    }

    #[test]
    fn test_write_error_keeps_source() {
        let error = PatternError::write("log.txt", io::Error::other("disk full"));
        let source = error.source().expect("io error is the source");
        assert_eq!(source.to_string(), "disk full");
    }

    #[test]
    fn test_console_error_from_io() {
        let error: PatternError = io::Error::new(io::ErrorKind::BrokenPipe, "pipe").into();
        assert!(matches!(error, PatternError::Console(_)));
    }

    #[test]
    fn test_error_is_send_and_sync() {
        fn assert_send<T: Send>() {}
        fn assert_sync<T: Sync>() {}
        assert_send::<PatternError>();
        assert_sync::<PatternError>();
    }
}
