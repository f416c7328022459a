//! Define the reserved keyword vocabulary for VitaLang.
//!
//! VitaLang keywords are **phrases**: several are multi-word, and several are textual prefixes of
//! others (`sweet` / `sweet but stout`, `not particularly` / `not not particularly`). This module
//! is the single source of truth for those phrases: a stable identifier ([`KeywordId`]) plus a
//! const metadata table ([`KEYWORDS`]).
//!
//! ## Notes
//! - Lookup via [`from_str`] is exact and **case-sensitive**.
//! - Matching inside source text must prefer the longest phrase. Never iterate [`KEYWORDS`] for
//!   that; use [`by_length_desc`] / [`matches_at`], which are sorted once by phrase length.
//!
//! ## Examples
//! ```rust
//! use vita_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("owners"), Some(KeywordId::EndOfAssign));
//! assert_eq!(keywords::longest_match("sweet but stout {").map(|k| k.id), Some(KeywordId::ElseIf));
//! ```

use std::cmp::Reverse;
use std::fmt;
use std::sync::LazyLock;

use super::registry::Stability;

/// Stable identifier for every keyword phrase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordId {
    // Bindings
    Define,
    Assign,
    EndOfAssign,

    // Control flow
    If,
    Else,
    ElseIf,
    For,
    While,
    Break,

    // Literals
    True,
    False,
    None,

    // Imports
    Import,
    ImportAll,
}

impl fmt::Display for KeywordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// High-level grouping for documentation and tooling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordCategory {
    Binding,
    ControlFlow,
    Literal,
    Import,
}

impl KeywordCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            KeywordCategory::Binding => "binding",
            KeywordCategory::ControlFlow => "control",
            KeywordCategory::Literal => "literal",
            KeywordCategory::Import => "import",
        }
    }
}

/// Metadata for a keyword phrase.
#[derive(Debug, Clone, Copy)]
pub struct KeywordInfo {
    pub id: KeywordId,
    pub phrase: &'static str,
    pub category: KeywordCategory,
    pub stability: Stability,
    pub description: &'static str,
}

/// Registry of every keyword phrase, in declaration order.
pub const KEYWORDS: &[KeywordInfo] = &[
    // Bindings
    info(
        KeywordId::Define,
        "I would love to own a plot of land in the 1800s called",
        KeywordCategory::Binding,
        Stability::Stable,
        "Starts an assignment; followed by a `$const` or `£variable` name.",
    ),
    info(
        KeywordId::Assign,
        "and lease it to",
        KeywordCategory::Binding,
        Stability::Stable,
        "Separates the assigned name from its value.",
    ),
    info(
        KeywordId::EndOfAssign,
        "owners",
        KeywordCategory::Binding,
        Stability::Stable,
        "Terminates the value of an assignment.",
    ),
    // Control flow
    info(
        KeywordId::If,
        "sweet",
        KeywordCategory::ControlFlow,
        Stability::Stable,
        "Conditional: `sweet <condition> { ... }`.",
    ),
    info(
        KeywordId::Else,
        "stout",
        KeywordCategory::ControlFlow,
        Stability::Stable,
        "Fallback branch of a conditional.",
    ),
    info(
        KeywordId::ElseIf,
        "sweet but stout",
        KeywordCategory::ControlFlow,
        Stability::Stable,
        "Chained conditional branch.",
    ),
    info(
        KeywordId::For,
        "lolsie",
        KeywordCategory::ControlFlow,
        Stability::Stable,
        "Counted loop; each trailing `s` adds one repetition (`lolsiesss` runs three times).",
    ),
    info(
        KeywordId::While,
        "yarp'",
        KeywordCategory::ControlFlow,
        Stability::Stable,
        "Loop suffix: `(<condition>) yarp' { ... }`.",
    ),
    info(
        KeywordId::Break,
        "jump off the bandwagon",
        KeywordCategory::ControlFlow,
        Stability::Reserved,
        "Leaves the innermost loop.",
    ),
    // Literals
    info(
        KeywordId::True,
        "not particularly",
        KeywordCategory::Literal,
        Stability::Reserved,
        "Boolean true.",
    ),
    info(
        KeywordId::False,
        "not not particularly",
        KeywordCategory::Literal,
        Stability::Reserved,
        "Boolean false.",
    ),
    info(
        KeywordId::None,
        "context",
        KeywordCategory::Literal,
        Stability::Reserved,
        "The absent value.",
    ),
    // Imports
    info(
        KeywordId::Import,
        "scammy",
        KeywordCategory::Import,
        Stability::Reserved,
        "Imports a single module.",
    ),
    info(
        KeywordId::ImportAll,
        "American",
        KeywordCategory::Import,
        Stability::Reserved,
        "Imports everything from a module.",
    ),
];

static BY_LENGTH_DESC: LazyLock<Vec<&'static KeywordInfo>> = LazyLock::new(|| {
    let mut sorted: Vec<&'static KeywordInfo> = KEYWORDS.iter().collect();
    // Stable sort: equal-length phrases keep declaration order.
    sorted.sort_by_key(|k| Reverse(k.phrase.len()));
    sorted
});

/// Keyword phrases in matching order: strictly longest first.
///
/// Computed once per process and shared read-only afterwards.
pub fn by_length_desc() -> &'static [&'static KeywordInfo] {
    &BY_LENGTH_DESC
}

/// Every phrase that `text` starts with, longest first.
///
/// ## Notes
/// - No word-boundary rule is applied here; the lexer decides which candidate to accept.
pub fn matches_at(text: &str) -> impl Iterator<Item = &'static KeywordInfo> + '_ {
    by_length_desc().iter().copied().filter(move |k| text.starts_with(k.phrase))
}

/// The longest phrase that `text` starts with, if any.
pub fn longest_match(text: &str) -> Option<&'static KeywordInfo> {
    matches_at(text).next()
}

/// Whether a phrase match is accepted even when an identifier character follows it.
///
/// Only `lolsie` qualifies: the run of `s` after it is its repetition count.
pub fn accepts_identifier_trailer(id: KeywordId) -> bool {
    matches!(id, KeywordId::For)
}

/// Canonical phrase.
pub fn as_str(id: KeywordId) -> &'static str {
    info_for(id).phrase
}

/// Full metadata entry.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (a bug in [`KEYWORDS`], caught by the guardrail tests).
pub fn info_for(id: KeywordId) -> &'static KeywordInfo {
    KEYWORDS
        .iter()
        .find(|k| k.id == id)
        .expect("INVARIANT: every KeywordId has a KEYWORDS entry")
}

/// Lookup by exact phrase.
pub fn from_str(s: &str) -> Option<KeywordId> {
    KEYWORDS.iter().find(|k| k.phrase == s).map(|k| k.id)
}

// --- helpers -----------------------------------------------------------------

const fn info(
    id: KeywordId,
    phrase: &'static str,
    category: KeywordCategory,
    stability: Stability,
    description: &'static str,
) -> KeywordInfo {
    KeywordInfo {
        id,
        phrase,
        category,
        stability,
        description,
    }
}
