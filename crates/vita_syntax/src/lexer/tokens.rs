//! Token types for the VitaLang lexer.
//!
//! The lexer uses **registry-backed IDs** for language vocabulary:
//! - `Keyword(KeywordId)` for keyword phrases
//! - `Operator(OperatorId)` for the single-character binary operators
//! - `Punctuation(PunctuationId)` for parentheses, curly braces and the comma
//!
//! ## Notes
//! - Every token owns a copy of its text, so the token stream outlives the source buffer.
//! - Use `crate::token_helpers` for ergonomic token matching at call sites.

use std::fmt;

use crate::ast::Span;
use vita_core::lang::keywords::KeywordId;
use vita_core::lang::operators::OperatorId;
use vita_core::lang::punctuation::PunctuationId;

// ============================================================================
// TOKEN TYPES
// ============================================================================

/// Kind of token produced by the lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // ========== Keyword / operator / punctuation (ID-based) ==========
    Keyword(KeywordId),
    Operator(OperatorId),
    Punctuation(PunctuationId),

    // ========== Literal-bearing ==========
    /// Bare alphabetic word.
    String,
    Number,
    /// `$name`; the token text is the name without its sigil.
    Const,
    /// `£name`; the token text is the name without its sigil.
    Variable,

    // ========== Layout ==========
    Newline,
    Indent,
    Dedent,

    // ========== Special ==========
    /// A single character nothing else recognized.
    Unknown,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Keyword(id) => write!(f, "{id}"),
            TokenKind::Operator(_) => write!(f, "BinaryOperator"),
            TokenKind::Punctuation(id) => write!(f, "{id}"),
            other => fmt::Debug::fmt(other, f),
        }
    }
}

/// A token with its kind, matched text and source span.
///
/// ## Notes
/// - For `Keyword(For)` the text is the decimal repetition count, not the keyword phrase.
/// - Layout tokens carry `"\n"` (Newline) or an empty string (Indent/Dedent).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub span: Span,
}

impl Token {
    /// Construct a new token.
    pub fn new(kind: TokenKind, text: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            text: text.into(),
            span,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.kind.is_layout() {
            write!(f, "{}", self.kind)
        } else {
            write!(f, "{} {:?}", self.kind, self.text)
        }
    }
}
