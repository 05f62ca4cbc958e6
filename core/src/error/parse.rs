use std::num::IntErrorKind;

use thiserror::Error;

/// Stable numeric codes for parse failures. The CLI reports them as
/// `id_error_code` in JSON output and as `code` on its error log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u16)]
pub enum ErrorCode {
    InvalidArgument = 2,
    IdAbsent = 10,
    IdNotAccepted = 11,
    IdEmpty = 12,
    IdInvalid = 13,
    IdTrailing = 14,
    IdOverflow = 15,
    OutOfMemory = 40,
}

impl ErrorCode {
    pub fn as_u16(self) -> u16 {
        self as u16
    }
}

/// Failures of the parse pipeline itself. An empty line is not one of them.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("out of memory copying a {requested}-byte token")]
    OutOfMemory { requested: usize },

    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl ParseError {
    pub fn error_code(&self) -> ErrorCode {
        match self {
            Self::OutOfMemory { .. } => ErrorCode::OutOfMemory,
            Self::InvalidArgument(_) => ErrorCode::InvalidArgument,
        }
    }
}

/// Why the identifier rule left `id` at its default.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdError {
    #[error("no identifier token")]
    Absent,

    #[error("instruction does not take an identifier")]
    NotAccepted,

    #[error("identifier token is empty")]
    Empty,

    #[error("identifier is not a base-10 integer")]
    Invalid,

    #[error("identifier has trailing characters")]
    TrailingCharacters,

    #[error("identifier is out of range")]
    Overflow,
}

impl IdError {
    pub fn error_code(&self) -> ErrorCode {
        match self {
            Self::Absent => ErrorCode::IdAbsent,
            Self::NotAccepted => ErrorCode::IdNotAccepted,
            Self::Empty => ErrorCode::IdEmpty,
            Self::Invalid => ErrorCode::IdInvalid,
            Self::TrailingCharacters => ErrorCode::IdTrailing,
            Self::Overflow => ErrorCode::IdOverflow,
        }
    }
}

impl From<&IntErrorKind> for IdError {
    fn from(kind: &IntErrorKind) -> Self {
        match kind {
            IntErrorKind::Empty => Self::Empty,
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => Self::Overflow,
            _ => Self::Invalid,
        }
    }
}
