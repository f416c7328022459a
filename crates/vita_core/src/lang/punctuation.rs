//! Punctuation vocabulary: parentheses, curly braces and the comma.
//!
//! ## Examples
//! ```rust
//! use vita_core::lang::punctuation::{self, PunctuationId};
//!
//! assert_eq!(punctuation::from_char('{'), Some(PunctuationId::LeftCurly));
//! assert_eq!(punctuation::as_char(PunctuationId::Comma), ',');
//! ```

use std::fmt;

/// Stable identifier for punctuation tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PunctuationId {
    LeftParen,
    RightParen,
    LeftCurly,
    RightCurly,
    Comma,
}

/// Registry of all punctuation, as `(id, spelling)` pairs.
pub const PUNCTUATION: &[(PunctuationId, char)] = &[
    (PunctuationId::LeftParen, '('),
    (PunctuationId::RightParen, ')'),
    (PunctuationId::LeftCurly, '{'),
    (PunctuationId::RightCurly, '}'),
    (PunctuationId::Comma, ','),
];

impl fmt::Display for PunctuationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Lookup by spelling.
pub fn from_char(c: char) -> Option<PunctuationId> {
    PUNCTUATION.iter().find(|(_, p)| *p == c).map(|(id, _)| *id)
}

/// Canonical spelling.
pub fn as_char(id: PunctuationId) -> char {
    PUNCTUATION
        .iter()
        .find(|(p, _)| *p == id)
        .map(|(_, c)| *c)
        .expect("INVARIANT: every PunctuationId has a PUNCTUATION entry")
}
