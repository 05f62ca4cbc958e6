use clap::Parser;
use taskline_cli::app::{self, Shell};
use taskline_cli::commands::cli;
use taskline_cli::logging;
use taskline_core::config::{self, AppConfig, OutputFormat};
use taskline_core::error::{self, CliError};
use taskline_core::CommandParser;

#[tokio::main]
async fn main() {
    let exit = match real_main().await {
        Ok(code) => code,
        Err(e) => {
            if let CliError::Parse(pe) = &e {
                tracing::error!(code = pe.error_code().as_u16(), "{pe}");
            }
            eprintln!("{e}");
            exit_code_for_error(&e)
        }
    };

    std::process::exit(exit);
}

async fn real_main() -> Result<i32, CliError> {
    let args = cli::Args::parse();
    let cfg = load_config(args.config.as_deref())?;
    logging::init(&cfg.logging)?;

    let format = match args.format {
        Some(cli::Format::Json) => OutputFormat::Json,
        Some(cli::Format::Text) => OutputFormat::Text,
        None => cfg.shell.format,
    };
    let trace = args.trace || cfg.shell.trace;
    let prompt = args.prompt.clone().unwrap_or_else(|| cfg.shell.prompt.clone());

    let parser = CommandParser::from_config(&cfg.parser);
    tracing::debug!(
        max_line = parser.max_line(),
        max_args = parser.max_args(),
        "parser configured"
    );
    let mut shell = Shell::new(parser, format, trace, prompt);

    match args.command {
        Some(cli::Commands::Parse(parse_args)) => {
            for out in app::parse_lines(&mut shell, &parse_args.lines)? {
                println!("{out}");
            }
            Ok(0)
        }
        None => {
            let interactive = atty::is(atty::Stream::Stdin);
            let stdin = tokio::io::BufReader::new(tokio::io::stdin());
            app::run_shell(&mut shell, stdin, tokio::io::stdout(), interactive).await
        }
    }
}

fn load_config(path: Option<&str>) -> Result<AppConfig, CliError> {
    let cfg = match path {
        Some(p) => config::load_from_path(std::path::Path::new(p)),
        None => config::load_default(),
    };
    cfg.map_err(|e| CliError::Config(error::ConfigError::Load(format!("{e:#}"))))
}

fn exit_code_for_error(e: &CliError) -> i32 {
    // 0: success
    // 11: config error
    // 20: io error
    // 30: parse error (resource exhaustion)
    match e {
        CliError::Config(_) => 11,
        CliError::Io(_) => 20,
        CliError::Parse(_) => 30,
    }
}
