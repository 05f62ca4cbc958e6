use thiserror::Error;

use super::parse::ParseError;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
    #[error("parse failed: {0}")]
    Parse(#[from] ParseError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{field} must be at least {min} (got {value})")]
    TooSmall {
        field: &'static str,
        min: usize,
        value: usize,
    },
    #[error("invalid value for {var}: {value}")]
    InvalidEnv { var: &'static str, value: String },
    #[error("failed to load config: {0}")]
    Load(String),
    #[error("logging: {0}")]
    Logging(String),
}
