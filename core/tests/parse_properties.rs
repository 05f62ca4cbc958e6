mod common;

use common::{parse_line, SAMPLE_IDS};
use pretty_assertions::assert_eq;
use taskline_core::command::instruct::{INSTRUCTIONS, INSTRUCTIONS_WITH_FILE, INSTRUCTIONS_WITH_ID};
use taskline_core::command::{free_command, Command, IdArg, Instruction, ParseOutcome, TokenBuffer};
use taskline_core::IdError;

#[test]
fn every_builtin_alone_has_defaults_and_no_residual() {
    for kind in INSTRUCTIONS {
        let p = parse_line(kind.as_str());
        assert_eq!(p.inst.name(), Some(kind.as_str()));
        assert_eq!(p.inst.id, 0);
        assert_eq!(p.inst.file, None);
        assert!(p.residual.is_empty());
        assert_eq!(p.outcome, ParseOutcome::Builtin(*kind));
    }
}

#[test]
fn id_instructions_take_any_valid_integer() {
    for kind in INSTRUCTIONS_WITH_ID {
        for &k in SAMPLE_IDS {
            let p = parse_line(&format!("{kind} {k}"));
            assert_eq!(p.inst.id, k, "line: {kind} {k}");
            assert_eq!(p.inst.id_arg, IdArg::Parsed(k));
        }
    }
}

#[test]
fn non_numeric_id_is_default_zero() {
    for kind in INSTRUCTIONS_WITH_ID {
        let p = parse_line(&format!("{kind} abc"));
        assert_eq!(p.inst.id, 0);
        assert_eq!(p.inst.task_id(), None);
    }
}

#[test]
fn file_instructions_take_id_and_file() {
    for kind in INSTRUCTIONS_WITH_FILE {
        let p = parse_line(&format!("{kind} 3 myfile.txt"));
        assert_eq!(p.inst.id, 3);
        assert_eq!(p.inst.file(), Some("myfile.txt"));
    }
}

#[test]
fn instructions_without_id_ignore_numbers() {
    for kind in INSTRUCTIONS.iter().filter(|k| !k.accepts_id()) {
        let p = parse_line(&format!("{kind} 42"));
        assert_eq!(p.inst.id, 0);
        assert_eq!(p.inst.id_arg, IdArg::Rejected(IdError::NotAccepted));
    }
}

#[test]
fn instructions_without_file_ignore_third_token() {
    for kind in INSTRUCTIONS.iter().filter(|k| !k.accepts_file()) {
        let p = parse_line(&format!("{kind} 1 extra.txt"));
        assert_eq!(p.inst.file, None, "{kind} must not take a file");
    }
}

#[test]
fn empty_and_blank_lines() {
    for line in ["", "   ", " "] {
        let p = parse_line(line);
        assert_eq!(p.inst, Instruction::default());
        assert!(p.residual.is_empty());
        assert_eq!(p.outcome, ParseOutcome::Empty);
    }
}

#[test]
fn unrecognized_instruction_keeps_all_tokens() {
    let p = parse_line("foo bar baz");
    assert_eq!(p.inst.name(), Some("foo"));
    assert_eq!(p.inst.id, 0);
    assert_eq!(p.inst.file, None);
    assert_eq!(p.residual, vec!["foo", "bar", "baz"]);
    assert_eq!(p.outcome, ParseOutcome::FreeForm);
}

#[test]
fn task_zero_is_a_real_id() {
    let p = parse_line("delete 0");
    assert_eq!(p.inst.id, 0);
    assert_eq!(p.inst.task_id(), Some(0));

    let p = parse_line("delete");
    assert_eq!(p.inst.id, 0);
    assert_eq!(p.inst.task_id(), None);
    assert_eq!(p.inst.id_arg, IdArg::Rejected(IdError::Absent));
}

#[test]
fn release_twice_is_safe() {
    let mut inst = Instruction::new();
    let mut argv = TokenBuffer::default();
    taskline_core::parse("anything goes here", &mut inst, &mut argv).unwrap();

    free_command(&mut inst, &mut argv);
    free_command(&mut inst, &mut argv);
    assert!(inst.is_empty());
    assert!(argv.is_empty());

    let mut cmd = Command::default();
    cmd.release();
    cmd.release();
}

#[test]
fn unicode_spaces_do_not_prefix_an_id() {
    for line in ["run \u{a0}5", "cancel \u{3000}5", "bg \u{2003}7"] {
        let p = parse_line(line);
        assert_eq!(p.inst.id, 0, "line: {line:?}");
        assert_eq!(p.inst.id_arg, IdArg::Rejected(IdError::Invalid));
    }
}

#[test]
fn fields_are_only_set_alongside_a_name() {
    let lines = [
        "", "run", "run 3", "run 3 a.sh", "run x a.sh", "help 1 2", "foo 1 2", "log 99999999999 f",
    ];
    for line in lines {
        let p = parse_line(line);
        if p.inst.name.is_none() {
            assert_eq!(p.inst, Instruction::default(), "line: {line:?}");
        } else {
            assert_ne!(p.inst.id_arg, IdArg::Unset, "line: {line:?}");
        }
    }
}
