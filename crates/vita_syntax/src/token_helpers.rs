//! Small helper APIs for working with `Token` / `TokenKind`.
//!
//! Kind predicates used by the parser, plus the token wording used in diagnostics.

use crate::lexer::{Token, TokenKind};
use vita_core::lang::keywords::KeywordId;
use vita_core::lang::operators::OperatorId;

impl TokenKind {
    /// Return `true` if this is the given keyword.
    pub fn is_keyword(&self, id: KeywordId) -> bool {
        matches!(self, TokenKind::Keyword(k) if *k == id)
    }

    /// Return the operator id, if this is an operator token.
    pub fn operator_id(&self) -> Option<OperatorId> {
        match self {
            TokenKind::Operator(id) => Some(*id),
            _ => None,
        }
    }

    /// Return `true` if this token is layout (Newline / Indent / Dedent).
    pub fn is_layout(&self) -> bool {
        matches!(self, TokenKind::Newline | TokenKind::Indent | TokenKind::Dedent)
    }

    /// Return `true` if this token can stand alone as an operand.
    pub fn is_literal(&self) -> bool {
        matches!(
            self,
            TokenKind::Number | TokenKind::String | TokenKind::Const | TokenKind::Variable
        )
    }
}

impl Token {
    /// Convenience wrapper for `self.kind.operator_id()`.
    pub fn operator_id(&self) -> Option<OperatorId> {
        self.kind.operator_id()
    }

    /// Short human-readable description for error messages, e.g. ``Number `42` ``.
    ///
    /// Layout tokens are described by kind only.
    pub fn describe(&self) -> String {
        if self.kind.is_layout() {
            self.kind.to_string()
        } else {
            format!("{} `{}`", self.kind, self.text)
        }
    }
}
