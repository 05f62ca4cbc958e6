use serde::Serialize;

use super::instruct::InstructionKind;
use crate::error::IdError;

/// Outcome of the identifier rule for one parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IdArg {
    /// No parse has run, or the line was empty.
    #[default]
    Unset,
    Parsed(i32),
    Rejected(IdError),
}

impl IdArg {
    pub fn value(&self) -> Option<i32> {
        match self {
            Self::Parsed(id) => Some(*id),
            _ => None,
        }
    }
}

impl Serialize for IdArg {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Unset => serializer.serialize_str("unset"),
            Self::Parsed(_) => serializer.serialize_str("parsed"),
            Self::Rejected(e) => serializer.serialize_str(match e {
                IdError::Absent => "absent",
                IdError::NotAccepted => "not_accepted",
                IdError::Empty => "empty",
                IdError::Invalid => "invalid",
                IdError::TrailingCharacters => "trailing_characters",
                IdError::Overflow => "overflow",
            }),
        }
    }
}

/// One parsed command line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Instruction {
    /// First token of the line; `None` for an empty line.
    pub name: Option<String>,
    /// Task id, `0` unless parsed. See `id_arg` to tell "0" from "missing".
    pub id: i32,
    pub id_arg: IdArg,
    pub file: Option<String>,
}

impl Instruction {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn file(&self) -> Option<&str> {
        self.file.as_deref()
    }

    /// The identifier only when one was actually parsed.
    pub fn task_id(&self) -> Option<i32> {
        self.id_arg.value()
    }

    pub fn kind(&self) -> Option<InstructionKind> {
        self.name().and_then(InstructionKind::from_name)
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none()
    }

    /// Drops owned fields and restores defaults. Safe to call repeatedly.
    pub fn clear(&mut self) {
        self.name = None;
        self.id = 0;
        self.id_arg = IdArg::Unset;
        self.file = None;
    }
}

impl std::fmt::Display for Instruction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.name() {
            Some(name) => write!(f, "{name}")?,
            None => return f.write_str("(empty)"),
        }
        if let Some(id) = self.task_id() {
            write!(f, " id={id}")?;
        }
        if let Some(file) = self.file() {
            write!(f, " file={file}")?;
        }
        Ok(())
    }
}

/// What a successful parse produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "instruction", rename_all = "snake_case")]
pub enum ParseOutcome {
    /// Blank line; the instruction is all defaults.
    Empty,
    /// Recognized instruction; residual tokens were released.
    Builtin(InstructionKind),
    /// Unrecognized name; tokens are kept for the caller.
    FreeForm,
}

impl ParseOutcome {
    pub fn is_builtin(&self) -> bool {
        matches!(self, Self::Builtin(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_shows_only_populated_fields() {
        let mut inst = Instruction::new();
        assert_eq!(inst.to_string(), "(empty)");

        inst.name = Some("run".to_string());
        inst.id = 3;
        inst.id_arg = IdArg::Parsed(3);
        inst.file = Some("job.sh".to_string());
        assert_eq!(inst.to_string(), "run id=3 file=job.sh");
    }

    #[test]
    fn zero_id_is_distinguishable_from_missing() {
        let mut parsed = Instruction::new();
        parsed.id_arg = IdArg::Parsed(0);
        let mut rejected = Instruction::new();
        rejected.id_arg = IdArg::Rejected(IdError::Invalid);

        assert_eq!(parsed.id, rejected.id);
        assert_eq!(parsed.task_id(), Some(0));
        assert_eq!(rejected.task_id(), None);
    }

    #[test]
    fn clear_resets_everything() {
        let mut inst = Instruction {
            name: Some("log".to_string()),
            id: 9,
            id_arg: IdArg::Parsed(9),
            file: Some("x".to_string()),
        };
        inst.clear();
        assert_eq!(inst, Instruction::default());
        inst.clear();
        assert!(inst.is_empty());
    }

    #[test]
    fn serializes_for_json_output() {
        let inst = Instruction {
            name: Some("cancel".to_string()),
            id: 0,
            id_arg: IdArg::Rejected(IdError::TrailingCharacters),
            file: None,
        };
        let v = serde_json::to_value(&inst).unwrap();
        assert_eq!(v["name"], "cancel");
        assert_eq!(v["id"], 0);
        assert_eq!(v["id_arg"], "trailing_characters");
        assert!(v["file"].is_null());

        let outcome = serde_json::to_value(ParseOutcome::Builtin(InstructionKind::Bg)).unwrap();
        assert_eq!(outcome["kind"], "builtin");
        assert_eq!(outcome["instruction"], "bg");
    }
}
