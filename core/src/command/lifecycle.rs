//! Initialization and release of the instruction / token buffer pair.
//!
//! Release drops every owned string and resets to defaults; calling it on an
//! already-empty value does nothing.

use super::parser::CommandParser;
use super::tokens::TokenBuffer;
use super::types::{Instruction, ParseOutcome};
use crate::error::ParseError;

pub fn initialize_instruction(inst: &mut Instruction) {
    inst.clear();
}

pub fn initialize_argv(argv: &mut TokenBuffer) {
    argv.clear();
}

pub fn initialize_command(inst: &mut Instruction, argv: &mut TokenBuffer) {
    initialize_instruction(inst);
    initialize_argv(argv);
}

pub fn free_instruction(inst: &mut Instruction) {
    inst.clear();
}

pub fn free_argv(argv: &mut TokenBuffer) {
    argv.clear();
}

pub fn free_command(inst: &mut Instruction, argv: &mut TokenBuffer) {
    free_instruction(inst);
    free_argv(argv);
}

/// An instruction and its token buffer, created and released together.
#[derive(Debug, Clone)]
pub struct Command {
    pub instruction: Instruction,
    pub argv: TokenBuffer,
    parser: CommandParser,
}

impl Command {
    pub fn new(parser: CommandParser) -> Self {
        Self {
            instruction: Instruction::new(),
            argv: parser.token_buffer(),
            parser,
        }
    }

    /// Runs one parse cycle, replacing whatever the previous cycle left.
    pub fn parse(&mut self, line: &str) -> Result<ParseOutcome, ParseError> {
        self.parser
            .parse(line, &mut self.instruction, &mut self.argv)
    }

    pub fn release(&mut self) {
        free_command(&mut self.instruction, &mut self.argv);
    }
}

impl Default for Command {
    fn default() -> Self {
        Self::new(CommandParser::default())
    }
}
