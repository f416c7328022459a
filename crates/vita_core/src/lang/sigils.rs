//! Identifier sigils.
//!
//! Names are never bare in VitaLang: a `$` prefix introduces a constant and a `£` prefix
//! (code point 163) introduces a variable. A bare word is a string literal.

use std::fmt;

/// Stable identifier for each sigil.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SigilId {
    Const,
    Variable,
}

impl fmt::Display for SigilId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", as_char(*self))
    }
}

/// Lookup by sigil character.
pub fn from_char(c: char) -> Option<SigilId> {
    match c {
        '$' => Some(SigilId::Const),
        '\u{a3}' => Some(SigilId::Variable),
        _ => None,
    }
}

/// The sigil character.
pub fn as_char(id: SigilId) -> char {
    match id {
        SigilId::Const => '$',
        SigilId::Variable => '\u{a3}',
    }
}
