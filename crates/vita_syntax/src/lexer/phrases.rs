//! Keyword phrase matching.
//!
//! Phrases are tried longest first, so a phrase that is a textual prefix of another
//! (`sweet` / `sweet but stout`) never wins when the longer one is present. A candidate whose
//! next character would continue an identifier is skipped and the next shorter one is tried.

use super::{Lexer, is_ident_continue};
use crate::ast::Span;
use crate::lexer::{Token, TokenKind};
use vita_core::lang::keywords::{self, KeywordId, KeywordInfo};

/// The `s` run after `lolsie` counts repetitions.
const REPEAT_MARK: char = 's';

impl<'a> Lexer<'a> {
    /// Try to match a keyword phrase at the cursor. Returns `true` if a token was emitted.
    pub(super) fn scan_keyword_phrase(&mut self, start: usize) -> bool {
        let rest = self.rest();
        let Some(info) = keywords::matches_at(rest).find(|k| accepts_at(rest, k)) else {
            return false;
        };

        self.pos += info.phrase.len();
        if info.id == KeywordId::For {
            let run_start = self.pos;
            self.advance_while(|c| c == REPEAT_MARK);
            let count = self.pos - run_start;
            tracing::trace!(count, "counted loop keyword");
            self.tokens.push(Token::new(
                TokenKind::Keyword(KeywordId::For),
                count.to_string(),
                Span::new(start, self.pos),
            ));
        } else {
            self.add_token(TokenKind::Keyword(info.id), start);
        }
        true
    }
}

fn accepts_at(rest: &str, info: &KeywordInfo) -> bool {
    if keywords::accepts_identifier_trailer(info.id) {
        return true;
    }
    !rest[info.phrase.len()..].chars().next().is_some_and(is_ident_continue)
}
