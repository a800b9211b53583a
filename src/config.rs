use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::PatternError;

/// Default location of the optional demo configuration.
pub const CONFIG_FILE: &str = "patterns.toml";

/// Settings shared by the demo binaries.
///
/// Every field has a default, so an absent file or a partial file is valid.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// File the bridge demo appends to.
    pub log_file: PathBuf,
    pub order_module: String,
    pub user_module: String,
    /// Colour section headings on stdout.
    pub colored_output: bool,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            log_file: PathBuf::from("log.txt"),
            order_module: "ORDERS".to_string(),
            user_module: "USERS".to_string(),
            colored_output: true,
        }
    }
}

impl DemoConfig {
    pub fn from_toml_str(source: &str, origin: impl Into<PathBuf>) -> Result<Self, PatternError> {
        toml::from_str(source).map_err(|source| PatternError::Config {
            path: origin.into(),
            source,
        })
    }

    /// Load `path`, falling back to defaults when the file does not exist.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, PatternError> {
        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(contents) => {
                tracing::debug!(path = %path.display(), "loaded demo config");
                Self::from_toml_str(&contents, path)
            }
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(Self::default()),
            Err(source) => Err(PatternError::ConfigRead {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    /// Render a section heading, coloured when enabled.
    pub fn heading(&self, text: &str) -> String {
        use colored::Colorize;

        let line = format!("=== {} ===", text);
        if self.colored_output {
            line.as_str().bold().cyan().to_string()
        } else {
            line
        }
    }
}
