//! Comment trivia.
//!
//! Comments never produce tokens. A line comment stops before its `\n` so the newline and the
//! indentation that follows are still processed. A block comment swallows everything up to and
//! including its closer, newlines included; an unterminated one runs to end of input.

use super::Lexer;
use vita_core::lang::comments;

impl<'a> Lexer<'a> {
    /// Skip a comment at the cursor. Returns `true` if one was skipped.
    pub(super) fn skip_comment(&mut self) -> bool {
        let rest = self.rest();
        if rest.starts_with(comments::LINE) {
            let len = rest.find('\n').unwrap_or(rest.len());
            self.pos += len;
            return true;
        }
        if let Some(body) = rest.strip_prefix(comments::BLOCK_OPEN) {
            let len = match body.find(comments::BLOCK_CLOSE) {
                Some(i) => comments::BLOCK_OPEN.len() + i + comments::BLOCK_CLOSE.len(),
                None => rest.len(),
            };
            self.pos += len;
            return true;
        }
        false
    }
}
