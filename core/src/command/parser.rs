//! Command line assembler.
//!
//! Runs one parse cycle: reset, tokenize, classify, finish. A blank line
//! is a valid result; only allocation failure is an error.

use super::extract::{parse_file_token, parse_id_token};
use super::instruct::InstructionKind;
use super::tokens::{dup_token, tokenize, TokenBuffer};
use super::types::{IdArg, Instruction, ParseOutcome};
use crate::config::ParserConfig;
use crate::error::ParseError;

/// Steps of one parse cycle, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseState {
    Reset,
    Tokenized,
    Classified,
    Done,
}

/// Parser bound to a pair of line and token limits.
#[derive(Debug, Clone, Copy)]
pub struct CommandParser {
    max_line: usize,
    max_args: usize,
}

impl Default for CommandParser {
    fn default() -> Self {
        Self::from_config(&ParserConfig::default())
    }
}

impl CommandParser {
    /// Parser with explicit limits; both must leave room for one token.
    pub fn new(max_line: usize, max_args: usize) -> Result<Self, ParseError> {
        if max_line < 2 || max_args < 2 {
            return Err(ParseError::InvalidArgument(format!(
                "max_line={max_line} max_args={max_args}; both must be at least 2"
            )));
        }
        Ok(Self { max_line, max_args })
    }

    pub fn from_config(cfg: &ParserConfig) -> Self {
        Self {
            max_line: cfg.max_line,
            max_args: cfg.max_args,
        }
    }

    pub fn max_line(&self) -> usize {
        self.max_line
    }

    pub fn max_args(&self) -> usize {
        self.max_args
    }

    /// Token buffer sized for this parser.
    pub fn token_buffer(&self) -> TokenBuffer {
        TokenBuffer::new(self.max_args)
    }

    /// Parses `line` into `inst`, leaving free-form arguments in `argv`.
    ///
    /// One slot of `argv` is held back, so at most `max_args - 1` tokens
    /// are read.
    pub fn parse(
        &self,
        line: &str,
        inst: &mut Instruction,
        argv: &mut TokenBuffer,
    ) -> Result<ParseOutcome, ParseError> {
        self.enter(ParseState::Reset);
        inst.clear();
        argv.clear();

        let limit = self.max_args.min(argv.capacity()).saturating_sub(1);
        let count = tokenize(line, self.max_line, argv, limit)?;
        self.enter(ParseState::Tokenized);

        let Some(first) = argv.get(0) else {
            self.enter(ParseState::Done);
            return Ok(ParseOutcome::Empty);
        };
        tracing::trace!(count, "tokenized command line");

        let name = dup_token(first)?;
        let id_arg = match parse_id_token(argv.get(1), &name) {
            Ok(id) => IdArg::Parsed(id),
            Err(e) => IdArg::Rejected(e),
        };
        let file = parse_file_token(argv.get(2), &name)?;
        let kind = InstructionKind::from_name(&name);

        // Every fallible copy is done; `inst` is either untouched or complete.
        *inst = Instruction {
            name: Some(name),
            id: id_arg.value().unwrap_or_default(),
            id_arg,
            file,
        };
        self.enter(ParseState::Classified);

        let outcome = match kind {
            Some(kind) => {
                argv.clear();
                ParseOutcome::Builtin(kind)
            }
            None => ParseOutcome::FreeForm,
        };
        self.enter(ParseState::Done);

        Ok(outcome)
    }

    fn enter(&self, state: ParseState) {
        tracing::trace!(?state, "parse state");
    }
}

/// Parses with the default `MAXLINE`/`MAXARGS` limits.
pub fn parse(
    line: &str,
    inst: &mut Instruction,
    argv: &mut TokenBuffer,
) -> Result<ParseOutcome, ParseError> {
    CommandParser::default().parse(line, inst, argv)
}
