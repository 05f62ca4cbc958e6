//! Core of the taskline shell: command line parsing, configuration and
//! error types shared with the CLI.

pub mod command;
pub mod config;
pub mod error;

pub use command::{
    free_command, initialize_command, is_whitespace, parse, Command, CommandParser, IdArg,
    Instruction, InstructionKind, ParseOutcome, TokenBuffer,
};
pub use error::{IdError, ParseError};
