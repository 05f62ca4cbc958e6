//! Identifier and filename rules. Each looks at one token and the
//! instruction name and decides whether the field gets populated.

use super::instruct::{accepts_file, accepts_id};
use super::tokens::dup_token;
use crate::error::{IdError, ParseError};

/// Parses the task id from the second token.
///
/// The whole token must be a base-10 integer: optional leading ASCII
/// whitespace (the C `isspace` set), one optional sign, then digits and
/// nothing else. Out-of-range values are rejected rather than wrapped.
pub fn parse_id_token(token: Option<&str>, name: &str) -> Result<i32, IdError> {
    let token = token.ok_or(IdError::Absent)?;

    if !accepts_id(name) {
        return Err(IdError::NotAccepted);
    }

    let body = token.trim_start_matches(is_c_space);
    if body.is_empty() {
        return Err(IdError::Empty);
    }

    let sign_len = usize::from(body.starts_with(['+', '-']));
    let digits_len = body[sign_len..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();
    if digits_len == 0 {
        return Err(IdError::Invalid);
    }

    let (number, rest) = body.split_at(sign_len + digits_len);
    if !rest.is_empty() {
        return Err(IdError::TrailingCharacters);
    }

    number.parse::<i32>().map_err(|e| IdError::from(e.kind()))
}

fn is_c_space(c: char) -> bool {
    c.is_ascii_whitespace() || c == '\x0b'
}

/// Copies the third token as the filename, verbatim.
///
/// `Ok(None)` when there is no token or the instruction takes no file.
pub fn parse_file_token(token: Option<&str>, name: &str) -> Result<Option<String>, ParseError> {
    let Some(token) = token else {
        return Ok(None);
    };

    if !accepts_file(name) {
        return Ok(None);
    }

    dup_token(token).map(Some)
}
