#![allow(dead_code)]

use taskline_core::command::{parse, Instruction, ParseOutcome, TokenBuffer};

pub struct Parsed {
    pub inst: Instruction,
    pub residual: Vec<String>,
    pub outcome: ParseOutcome,
}

pub fn parse_line(line: &str) -> Parsed {
    let mut inst = Instruction::new();
    let mut argv = TokenBuffer::default();
    let outcome = parse(line, &mut inst, &mut argv).expect("parse should not fail");
    Parsed {
        inst,
        residual: argv.to_vec(),
        outcome,
    }
}

/// Sample ids covering sign, zero and the i32 bounds.
pub const SAMPLE_IDS: &[i32] = &[0, 1, 9, 42, 1000, -1, -250, i32::MAX, i32::MIN];
