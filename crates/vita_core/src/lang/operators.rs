//! Operator vocabulary.
//!
//! VitaLang only has single-character binary operators. Each carries a precedence used by the
//! parser's precedence-climbing loop; higher binds tighter, and all operators associate left.
//!
//! ## Examples
//! ```rust
//! use vita_core::lang::operators::{self, OperatorId};
//!
//! assert_eq!(operators::from_char('*'), Some(OperatorId::Star));
//! assert!(operators::precedence(OperatorId::Star) > operators::precedence(OperatorId::Plus));
//! ```

use std::fmt;

/// Stable identifier for every operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorId {
    Plus,
    Minus,
    Star,
    Slash,
}

/// Metadata for an operator.
#[derive(Debug, Clone, Copy)]
pub struct OperatorInfo {
    pub id: OperatorId,
    pub symbol: char,
    pub precedence: u8,
}

/// Registry of all operators.
pub const OPERATORS: &[OperatorInfo] = &[
    OperatorInfo {
        id: OperatorId::Plus,
        symbol: '+',
        precedence: 1,
    },
    OperatorInfo {
        id: OperatorId::Minus,
        symbol: '-',
        precedence: 1,
    },
    OperatorInfo {
        id: OperatorId::Star,
        symbol: '*',
        precedence: 2,
    },
    OperatorInfo {
        id: OperatorId::Slash,
        symbol: '/',
        precedence: 2,
    },
];

impl fmt::Display for OperatorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", as_char(*self))
    }
}

/// Lookup by symbol.
pub fn from_char(c: char) -> Option<OperatorId> {
    OPERATORS.iter().find(|o| o.symbol == c).map(|o| o.id)
}

/// Canonical symbol.
pub fn as_char(id: OperatorId) -> char {
    info_for(id).symbol
}

/// Binding strength: `*` and `/` are 2, `+` and `-` are 1.
pub fn precedence(id: OperatorId) -> u8 {
    info_for(id).precedence
}

/// Full metadata entry.
pub fn info_for(id: OperatorId) -> &'static OperatorInfo {
    OPERATORS
        .iter()
        .find(|o| o.id == id)
        .expect("INVARIANT: every OperatorId has an OPERATORS entry")
}
