use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// name of the configuration file looked up next to the working directory
pub const CONFIG_FILE_NAME: &str = "relnotes.toml";

/// how extracted notes are written to stdout
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// plain notes text, ready to paste into a release
    #[default]
    Human,
    /// json document with the lookup outcome
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "human" => Ok(OutputFormat::Human),
            _ => Err(format!(
                "invalid output format: {}, use 'json' or 'human'",
                s
            )),
        }
    }
}

/// main configuration for relnotes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelnotesConfig {
    /// default output format when `--format` is not given
    #[serde(default)]
    pub format: OutputFormat,

    /// tracing filter used when `RUST_LOG` is not set
    #[serde(default = "RelnotesConfig::default_log_level")]
    pub log_level: String,
}

impl Default for RelnotesConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            log_level: Self::default_log_level(),
        }
    }
}

impl RelnotesConfig {
    fn default_log_level() -> String {
        "warn".to_string()
    }

    /// load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| Error::FileReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: RelnotesConfig =
            toml::from_str(&contents).map_err(|e| Error::TomlParseError {
                path: path.to_path_buf(),
                source: e,
            })?;

        Ok(config)
    }

    /// find and load `relnotes.toml` in `dir`
    ///
    /// returns default config if the file is missing or cannot be parsed
    pub fn load_or_default<P: AsRef<Path>>(dir: P) -> Self {
        match Self::find_config_file(&dir) {
            Some(config_path) => Self::load_from_file(&config_path).unwrap_or_default(),
            None => Self::default(),
        }
    }

    pub fn find_config_file<P: AsRef<Path>>(dir: P) -> Option<PathBuf> {
        let config_path = dir.as_ref().join(CONFIG_FILE_NAME);

        if config_path.is_file() {
            Some(config_path)
        } else {
            None
        }
    }
}
