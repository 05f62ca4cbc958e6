mod load;
mod types;

pub use load::{get_taskline_data_dir, load_default, load_from_path};
pub use types::{
    AppConfig, LoggingConfig, OutputFormat, ParserConfig, ShellConfig, DEFAULT_MAX_ARGS,
    DEFAULT_MAX_LINE,
};
