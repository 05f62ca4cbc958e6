//! Command line parsing for the task manager shell.
//!
//! Turns one line of user text into an [`Instruction`] plus, for
//! instructions the shell does not know, the raw [`TokenBuffer`].
//!
//! ```rust,ignore
//! use taskline_core::command::{parse, Instruction, TokenBuffer};
//!
//! let mut inst = Instruction::new();
//! let mut argv = TokenBuffer::default();
//! parse("run 3 job.sh", &mut inst, &mut argv).unwrap();
//! assert_eq!(inst.id, 3);
//! assert_eq!(inst.file(), Some("job.sh"));
//! ```

mod diagnostics;
mod extract;
pub mod instruct;
mod lifecycle;
mod parser;
mod tokens;
mod types;

pub use diagnostics::{debug_print_parse, is_whitespace, render_parse};
pub use extract::{parse_file_token, parse_id_token};
pub use instruct::{accepts_file, accepts_id, is_recognized, InstructionKind};
pub use lifecycle::{
    free_argv, free_command, free_instruction, initialize_argv, initialize_command,
    initialize_instruction, Command,
};
pub use parser::{parse, CommandParser, ParseState};
pub use tokens::{bounded, dup_token, tokenize, TokenBuffer, DELIMITER};
pub use types::{IdArg, Instruction, ParseOutcome};
