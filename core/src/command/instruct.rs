//! Instruction vocabulary and the three membership lookups.
//!
//! The tables are constants; every lookup is an exact, case-sensitive match
//! against the full instruction name.

use serde::Serialize;

/// Every instruction the task manager understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InstructionKind {
    Help,
    Quit,
    Tasks,
    Delete,
    Run,
    Bg,
    Cancel,
    Log,
    Output,
    Suspend,
    Resume,
}

/// Full recognized instruction list.
pub const INSTRUCTIONS: &[InstructionKind] = &[
    InstructionKind::Help,
    InstructionKind::Quit,
    InstructionKind::Tasks,
    InstructionKind::Delete,
    InstructionKind::Run,
    InstructionKind::Bg,
    InstructionKind::Cancel,
    InstructionKind::Log,
    InstructionKind::Output,
    InstructionKind::Suspend,
    InstructionKind::Resume,
];

/// Instructions which may use an ID argument.
pub const INSTRUCTIONS_WITH_ID: &[InstructionKind] = &[
    InstructionKind::Delete,
    InstructionKind::Run,
    InstructionKind::Bg,
    InstructionKind::Cancel,
    InstructionKind::Log,
    InstructionKind::Output,
    InstructionKind::Suspend,
    InstructionKind::Resume,
];

/// Instructions which may use a filename argument.
pub const INSTRUCTIONS_WITH_FILE: &[InstructionKind] = &[
    InstructionKind::Run,
    InstructionKind::Bg,
    InstructionKind::Log,
];

impl InstructionKind {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "help" => Some(Self::Help),
            "quit" => Some(Self::Quit),
            "tasks" => Some(Self::Tasks),
            "delete" => Some(Self::Delete),
            "run" => Some(Self::Run),
            "bg" => Some(Self::Bg),
            "cancel" => Some(Self::Cancel),
            "log" => Some(Self::Log),
            "output" => Some(Self::Output),
            "suspend" => Some(Self::Suspend),
            "resume" => Some(Self::Resume),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Help => "help",
            Self::Quit => "quit",
            Self::Tasks => "tasks",
            Self::Delete => "delete",
            Self::Run => "run",
            Self::Bg => "bg",
            Self::Cancel => "cancel",
            Self::Log => "log",
            Self::Output => "output",
            Self::Suspend => "suspend",
            Self::Resume => "resume",
        }
    }

    pub fn accepts_id(self) -> bool {
        match self {
            Self::Delete
            | Self::Run
            | Self::Bg
            | Self::Cancel
            | Self::Log
            | Self::Output
            | Self::Suspend
            | Self::Resume => true,
            Self::Help | Self::Quit | Self::Tasks => false,
        }
    }

    pub fn accepts_file(self) -> bool {
        match self {
            Self::Run | Self::Bg | Self::Log => true,
            Self::Help
            | Self::Quit
            | Self::Tasks
            | Self::Delete
            | Self::Cancel
            | Self::Output
            | Self::Suspend
            | Self::Resume => false,
        }
    }

    /// Usage line shown by the shell's `help` listing.
    pub fn usage(self) -> &'static str {
        match self {
            Self::Help => "help",
            Self::Quit => "quit",
            Self::Tasks => "tasks",
            Self::Delete => "delete <id>",
            Self::Run => "run <id> [file]",
            Self::Bg => "bg <id> [file]",
            Self::Cancel => "cancel <id>",
            Self::Log => "log <id> [file]",
            Self::Output => "output <id>",
            Self::Suspend => "suspend <id>",
            Self::Resume => "resume <id>",
        }
    }
}

impl std::fmt::Display for InstructionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn is_recognized(name: &str) -> bool {
    InstructionKind::from_name(name).is_some()
}

pub fn accepts_id(name: &str) -> bool {
    InstructionKind::from_name(name).is_some_and(InstructionKind::accepts_id)
}

pub fn accepts_file(name: &str) -> bool {
    InstructionKind::from_name(name).is_some_and(InstructionKind::accepts_file)
}
