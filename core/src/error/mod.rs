#[allow(clippy::module_inception)]
pub mod error;
pub mod parse;

pub use error::{CliError, ConfigError};
pub use parse::{ErrorCode, IdError, ParseError};
