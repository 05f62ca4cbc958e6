use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Longest command line the parser reads, terminator included.
pub const DEFAULT_MAX_LINE: usize = 1024;

/// Token slots per command, one of which is held back.
pub const DEFAULT_MAX_ARGS: usize = 128;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub parser: ParserConfig,

    #[serde(default)]
    pub shell: ShellConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_logging_enabled")]
    pub enabled: bool,

    /// If true, log to stderr.
    #[serde(default = "default_logging_console")]
    pub console: bool,

    /// If true, log to a file under `directory` (or `~/.taskline/logs`).
    #[serde(default)]
    pub file: bool,

    /// EnvFilter string, e.g. "warn" or "taskline_core=trace".
    #[serde(default = "default_logging_level")]
    pub level: String,

    /// Optional directory for log files.
    #[serde(default)]
    pub directory: Option<String>,
}

fn default_logging_enabled() -> bool {
    true
}

fn default_logging_console() -> bool {
    true
}

fn default_logging_level() -> String {
    "warn".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: default_logging_enabled(),
            console: default_logging_console(),
            file: false,
            level: default_logging_level(),
            directory: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParserConfig {
    #[serde(default = "default_max_line")]
    pub max_line: usize,

    #[serde(default = "default_max_args")]
    pub max_args: usize,
}

fn default_max_line() -> usize {
    DEFAULT_MAX_LINE
}

fn default_max_args() -> usize {
    DEFAULT_MAX_ARGS
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            max_line: default_max_line(),
            max_args: default_max_args(),
        }
    }
}

impl ParserConfig {
    /// Both limits need room for one value plus the reserved slot.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_line < 2 {
            return Err(ConfigError::TooSmall {
                field: "max_line",
                min: 2,
                value: self.max_line,
            });
        }
        if self.max_args < 2 {
            return Err(ConfigError::TooSmall {
                field: "max_args",
                min: 2,
                value: self.max_args,
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShellConfig {
    #[serde(default = "default_prompt")]
    pub prompt: String,

    #[serde(default)]
    pub format: OutputFormat,

    /// Print the parse dump for every line.
    #[serde(default)]
    pub trace: bool,
}

fn default_prompt() -> String {
    "taskline> ".to_string()
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            prompt: default_prompt(),
            format: OutputFormat::default(),
            trace: false,
        }
    }
}
