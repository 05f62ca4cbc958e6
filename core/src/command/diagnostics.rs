use std::fmt::Write as _;

use super::tokens::TokenBuffer;
use super::types::Instruction;

const RULE: &str = "-----------------------";

/// True when `line` is absent or made only of whitespace.
pub fn is_whitespace(line: Option<&str>) -> bool {
    line.is_none_or(|s| s.chars().all(char::is_whitespace))
}

/// Human-readable dump of one parse: origin, line, instruction, tokens.
pub fn render_parse(
    cmdline: Option<&str>,
    inst: Option<&Instruction>,
    argv: Option<&TokenBuffer>,
    loc: Option<&str>,
) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{RULE}");
    if let Some(loc) = loc {
        let _ = writeln!(out, "- {loc}");
        let _ = writeln!(out, "{RULE}");
    }
    if let Some(line) = cmdline {
        let _ = writeln!(out, "cmdline     = {line}");
    }
    if let Some(inst) = inst {
        let _ = writeln!(out, "instruction = {}", inst.name().unwrap_or("(null)"));
        match inst.task_id() {
            Some(id) => {
                let _ = writeln!(out, "buffer ID   = {id}");
            }
            None => {
                let _ = writeln!(out, "buffer ID   = (default)");
            }
        }
        if let Some(file) = inst.file() {
            let _ = writeln!(out, "file        = {file}");
        }
    }
    if let Some(argv) = argv {
        for (i, tok) in argv.iter().enumerate() {
            let _ = writeln!(out, "argv[{i}] == {tok}");
        }
    }
    let _ = writeln!(out, "{RULE}");
    out
}

/// Emits the parse result as one structured debug event.
pub fn debug_print_parse(
    cmdline: Option<&str>,
    inst: Option<&Instruction>,
    argv: Option<&TokenBuffer>,
    loc: Option<&str>,
) {
    tracing::debug!(
        loc = loc.unwrap_or(""),
        cmdline = cmdline.unwrap_or(""),
        instruction = inst.and_then(Instruction::name).unwrap_or(""),
        id = ?inst.and_then(Instruction::task_id),
        file = inst.and_then(Instruction::file).unwrap_or(""),
        argv = ?argv.map(TokenBuffer::to_vec).unwrap_or_default(),
        "parsed command line"
    );
}
