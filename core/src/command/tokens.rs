use serde::ser::{Serialize, SerializeSeq, Serializer};

use crate::error::ParseError;

/// Token delimiter. Only the space character splits; tabs stay inside tokens.
pub const DELIMITER: char = ' ';

/// Fixed-capacity, reusable sequence of owned tokens.
///
/// Slots are filled front to back; `len` counts the leading filled slots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenBuffer {
    slots: Vec<Option<String>>,
    len: usize,
}

impl TokenBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: vec![None; capacity],
            len: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.slots.get(index).and_then(|s| s.as_deref())
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.slots[..self.len].iter().filter_map(|s| s.as_deref())
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.iter().map(str::to_string).collect()
    }

    /// Drops every token and marks all slots empty. Safe to call repeatedly.
    pub fn clear(&mut self) {
        for slot in self.slots.iter_mut() {
            *slot = None;
        }
        self.len = 0;
    }

    /// Appends a token; returns false when the buffer is full.
    pub(crate) fn push(&mut self, token: String) -> bool {
        match self.slots.get_mut(self.len) {
            Some(slot) => {
                *slot = Some(token);
                self.len += 1;
                true
            }
            None => false,
        }
    }
}

impl Default for TokenBuffer {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_MAX_ARGS)
    }
}

impl Serialize for TokenBuffer {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.len))?;
        for token in self.iter() {
            seq.serialize_element(token)?;
        }
        seq.end()
    }
}

/// Heap copy of `s` that reports allocation failure instead of aborting.
pub fn dup_token(s: &str) -> Result<String, ParseError> {
    let mut out = String::new();
    out.try_reserve_exact(s.len())
        .map_err(|_| ParseError::OutOfMemory { requested: s.len() })?;
    out.push_str(s);
    Ok(out)
}

/// Bounded view of `line`: at most `max_line - 1` bytes, cut on a char boundary.
pub fn bounded(line: &str, max_line: usize) -> &str {
    let limit = max_line.saturating_sub(1);
    if line.len() <= limit {
        return line;
    }
    let mut end = limit;
    while !line.is_char_boundary(end) {
        end -= 1;
    }
    tracing::warn!(
        len = line.len(),
        kept = end,
        "command line exceeds max_line; truncating"
    );
    &line[..end]
}

/// Splits the bounded copy of `line` into at most `n` tokens in `out`.
///
/// `out` is cleared first. Returns the number of tokens written.
pub fn tokenize(
    line: &str,
    max_line: usize,
    out: &mut TokenBuffer,
    n: usize,
) -> Result<usize, ParseError> {
    out.clear();

    let limit = n.min(out.capacity());
    for word in bounded(line, max_line)
        .split(DELIMITER)
        .filter(|w| !w.is_empty())
        .take(limit)
    {
        out.push(dup_token(word)?);
    }

    Ok(out.len())
}
