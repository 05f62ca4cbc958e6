//! Text and JSON views of one parse result.

use serde_json::json;
use taskline_core::command::instruct::INSTRUCTIONS;
use taskline_core::{IdArg, IdError, Instruction, ParseOutcome, TokenBuffer};

pub fn render_text(inst: &Instruction, argv: &TokenBuffer, outcome: ParseOutcome) -> String {
    let mut out = inst.to_string();

    if let IdArg::Rejected(e) = inst.id_arg {
        if !matches!(e, IdError::Absent | IdError::NotAccepted) {
            out.push_str(&format!(" (id ignored: {e})"));
        }
    }

    if outcome == ParseOutcome::FreeForm {
        out.push_str(&format!(" [free-form: {}]", argv.to_vec().join(" ")));
    }
    out
}

/// JSON object with the outcome, the instruction and the retained tokens.
/// `id_error_code` is null unless the id rule rejected a token.
pub fn render_json(inst: &Instruction, argv: &TokenBuffer, outcome: ParseOutcome) -> String {
    let id_error_code = match inst.id_arg {
        IdArg::Rejected(e) => Some(e.error_code().as_u16()),
        _ => None,
    };
    json!({
        "outcome": outcome,
        "instruction": inst,
        "id_error_code": id_error_code,
        "argv": argv,
    })
    .to_string()
}

/// Instruction table shown for `help`.
pub fn help_text() -> String {
    let mut out = String::from("instructions:\n");
    for kind in INSTRUCTIONS {
        out.push_str(&format!("  {}\n", kind.usage()));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use taskline_core::parse;

    fn parsed(line: &str) -> (Instruction, TokenBuffer, ParseOutcome) {
        let mut inst = Instruction::new();
        let mut argv = TokenBuffer::default();
        let outcome = parse(line, &mut inst, &mut argv).unwrap();
        (inst, argv, outcome)
    }

    #[test]
    fn text_for_builtin() {
        let (inst, argv, outcome) = parsed("run 3 job.sh");
        assert_eq!(render_text(&inst, &argv, outcome), "run id=3 file=job.sh");
    }

    #[test]
    fn text_notes_ignored_id() {
        let (inst, argv, outcome) = parsed("cancel 4x");
        assert_eq!(
            render_text(&inst, &argv, outcome),
            "cancel (id ignored: identifier has trailing characters)"
        );
    }

    #[test]
    fn text_for_free_form() {
        let (inst, argv, outcome) = parsed("ls -la /tmp");
        assert_eq!(
            render_text(&inst, &argv, outcome),
            "ls [free-form: ls -la /tmp]"
        );
    }

    #[test]
    fn json_carries_all_parts() {
        let (inst, argv, outcome) = parsed("foo bar");
        let v: serde_json::Value =
            serde_json::from_str(&render_json(&inst, &argv, outcome)).unwrap();
        assert_eq!(v["outcome"]["kind"], "free_form");
        assert_eq!(v["instruction"]["name"], "foo");
        assert_eq!(v["argv"], json!(["foo", "bar"]));
    }

    #[test]
    fn json_reports_id_error_code() {
        let (inst, argv, outcome) = parsed("cancel 4x");
        let v: serde_json::Value =
            serde_json::from_str(&render_json(&inst, &argv, outcome)).unwrap();
        assert_eq!(v["id_error_code"], 14);
        assert_eq!(v["instruction"]["id_arg"], "trailing_characters");

        let (inst, argv, outcome) = parsed("suspend 99999999999");
        let v: serde_json::Value =
            serde_json::from_str(&render_json(&inst, &argv, outcome)).unwrap();
        assert_eq!(v["id_error_code"], 15);

        let (inst, argv, outcome) = parsed("delete 2");
        let v: serde_json::Value =
            serde_json::from_str(&render_json(&inst, &argv, outcome)).unwrap();
        assert!(v["id_error_code"].is_null());
    }

    #[test]
    fn help_lists_every_instruction() {
        let text = help_text();
        assert!(text.contains("run <id> [file]"));
        assert!(text.contains("tasks"));
        assert_eq!(text.lines().count(), INSTRUCTIONS.len() + 1);
    }
}
