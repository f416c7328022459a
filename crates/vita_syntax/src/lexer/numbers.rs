//! Numeric literal scanning.

use super::Lexer;
use crate::lexer::TokenKind;

impl<'a> Lexer<'a> {
    /// Digits with at most one decimal point, which must be followed by a digit.
    ///
    /// `7.` lexes as `7` followed by an Unknown `.`.
    pub(super) fn scan_number(&mut self, start: usize) {
        self.advance_while(|c| c.is_ascii_digit());
        if self.peek() == Some('.') && self.peek_next().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
            self.advance_while(|c| c.is_ascii_digit());
        }
        self.add_token(TokenKind::Number, start);
    }
}
