//! Shell read loop: reads lines, parses each one and prints the result.
use taskline_core::command::{debug_print_parse, render_parse};
use taskline_core::config::OutputFormat;
use taskline_core::error::CliError;
use taskline_core::{is_whitespace, Command, CommandParser, InstructionKind, ParseOutcome};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::render::{help_text, render_json, render_text};

/// What the loop should do after a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Continue(Option<String>),
    Quit(Option<String>),
}

pub struct Shell {
    cmd: Command,
    format: OutputFormat,
    trace: bool,
    prompt: String,
}

impl Shell {
    pub fn new(parser: CommandParser, format: OutputFormat, trace: bool, prompt: String) -> Self {
        Self {
            cmd: Command::new(parser),
            format,
            trace,
            prompt,
        }
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Parses one line. Blank lines are skipped without a parse.
    pub fn handle_line(&mut self, line: &str) -> Result<Step, CliError> {
        let line = line.strip_suffix('\r').unwrap_or(line);
        if is_whitespace(Some(line)) {
            return Ok(Step::Continue(None));
        }

        let outcome = self.cmd.parse(line)?;
        let inst = &self.cmd.instruction;
        let argv = &self.cmd.argv;

        debug_print_parse(Some(line), Some(inst), Some(argv), Some("shell"));
        if self.trace {
            eprint!("{}", trace_block(&render_parse(Some(line), Some(inst), Some(argv), None)));
        }

        let rendered = match self.format {
            OutputFormat::Text => render_text(inst, argv, outcome),
            OutputFormat::Json => render_json(inst, argv, outcome),
        };

        let step = match outcome {
            ParseOutcome::Builtin(InstructionKind::Quit) => Step::Quit(Some(rendered)),
            ParseOutcome::Builtin(InstructionKind::Help) if self.format == OutputFormat::Text => {
                Step::Continue(Some(format!("{rendered}\n{}", help_text().trim_end())))
            }
            _ => Step::Continue(Some(rendered)),
        };

        self.cmd.release();
        Ok(step)
    }
}

fn trace_block(text: &str) -> String {
    if !atty::is(atty::Stream::Stderr) {
        return text.to_string();
    }
    text.lines()
        .map(|l| format!("\x1b[1;33m[DEBUG] {l}\x1b[0m\n"))
        .collect()
}

/// Runs the loop until `quit` or end of input. Returns the exit code.
pub async fn run_shell<R, W>(
    shell: &mut Shell,
    reader: R,
    mut writer: W,
    interactive: bool,
) -> Result<i32, CliError>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = reader.lines();
    tracing::debug!(interactive, "shell loop starting");

    loop {
        if interactive {
            writer.write_all(shell.prompt().as_bytes()).await?;
            writer.flush().await?;
        }

        let Some(line) = lines.next_line().await? else {
            tracing::debug!("end of input");
            break;
        };

        match shell.handle_line(&line)? {
            Step::Continue(out) => {
                if let Some(out) = out {
                    writer.write_all(out.as_bytes()).await?;
                    writer.write_all(b"\n").await?;
                }
            }
            Step::Quit(out) => {
                if let Some(out) = out {
                    writer.write_all(out.as_bytes()).await?;
                    writer.write_all(b"\n").await?;
                }
                break;
            }
        }
    }

    writer.flush().await?;
    Ok(0)
}

/// Parses each line once, as the `parse` subcommand does.
pub fn parse_lines(shell: &mut Shell, lines: &[String]) -> Result<Vec<String>, CliError> {
    let mut out = Vec::new();
    for line in lines {
        match shell.handle_line(line)? {
            Step::Continue(Some(s)) | Step::Quit(Some(s)) => out.push(s),
            Step::Continue(None) | Step::Quit(None) => {}
        }
    }
    Ok(out)
}
