use clap::{Args as ClapArgs, Parser, Subcommand};

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "taskline", about = "Parse task manager command lines")]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Config file; defaults to ~/.taskline/config.toml, then ./config.toml.
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Output format; overrides `shell.format` from the config.
    #[arg(long, value_enum, global = true)]
    pub format: Option<Format>,

    /// Print the parse dump for every line to stderr.
    #[arg(long, global = true)]
    pub trace: bool,

    #[arg(long)]
    pub prompt: Option<String>,
}

#[derive(ClapArgs, Debug, Clone)]
pub struct ParseArgs {
    /// Lines to parse, one instruction each.
    #[arg(required = true)]
    pub lines: Vec<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Parse the given lines and exit.
    Parse(ParseArgs),
}
