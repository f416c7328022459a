//! INDENT/DEDENT handling.

use super::Lexer;
use crate::ast::Span;
use crate::lexer::{Token, TokenKind};
use vita_core::lang::comments;

impl<'a> Lexer<'a> {
    /// Measure the indentation of the line that starts at the cursor and emit INDENT/DEDENT.
    ///
    /// Called right after a Newline token. Consumes the leading spaces and tabs.
    pub(super) fn handle_indentation(&mut self) {
        let start = self.pos;
        let mut width: usize = 0;
        while let Some(c) = self.peek() {
            match c {
                ' ' => width += 1,
                '\t' => width = width.saturating_add(self.config.tab_width),
                _ => break,
            }
            self.advance();
        }

        if self.is_blank_line() {
            return;
        }

        let top = self.current_indent();
        if width > top {
            tracing::trace!(width, top, "indent");
            self.indent_stack.push(width);
            self.tokens.push(Token::new(TokenKind::Indent, "", Span::new(start, self.pos)));
            return;
        }
        while self.indent_stack.len() > 1 && width < self.current_indent() {
            self.indent_stack.pop();
            tracing::trace!(width, "dedent");
            self.tokens.push(Token::new(TokenKind::Dedent, "", Span::new(self.pos, self.pos)));
        }
    }

    /// Emit a DEDENT for every level still open at end of input.
    pub(super) fn close_open_blocks(&mut self) {
        let end = self.source.len();
        while self.indent_stack.len() > 1 {
            self.indent_stack.pop();
            self.tokens.push(Token::new(TokenKind::Dedent, "", Span::new(end, end)));
        }
    }

    fn current_indent(&self) -> usize {
        self.indent_stack.last().copied().unwrap_or(0)
    }

    /// The rest of the line holds nothing but comments.
    ///
    /// A leading block comment is looked through; an unterminated one makes the line blank.
    fn is_blank_line(&self) -> bool {
        let mut rest = self.rest();
        if let Some(body) = rest.strip_prefix(comments::BLOCK_OPEN) {
            rest = match body.find(comments::BLOCK_CLOSE) {
                Some(i) => body[i + comments::BLOCK_CLOSE.len()..].trim_start_matches([' ', '\t']),
                None => "",
            };
        }
        rest.is_empty() || rest.starts_with(['\n', '\r']) || rest.starts_with(comments::LINE)
    }
}

#[cfg(test)]
mod tests {
    use crate::lexer::{LexerConfig, TokenKind, tokenize, tokenize_with_config};

    fn layout(source: &str) -> Vec<TokenKind> {
        tokenize(source)
            .into_iter()
            .map(|t| t.kind)
            .filter(|k| matches!(k, TokenKind::Indent | TokenKind::Dedent))
            .collect()
    }

    #[test]
    fn test_indentation() {
        let tokens = tokenize("a\n    b\nc");
        let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::String,
                TokenKind::Newline,
                TokenKind::Indent,
                TokenKind::String,
                TokenKind::Newline,
                TokenKind::Dedent,
                TokenKind::String,
            ]
        );
        assert_eq!(tokens[2].text, "");
        assert_eq!(tokens[1].text, "\n");
    }

    #[test]
    fn test_multiple_dedents() {
        let source = "a\n  b\n    c\nd";
        assert_eq!(
            layout(source),
            vec![TokenKind::Indent, TokenKind::Indent, TokenKind::Dedent, TokenKind::Dedent]
        );
    }

    #[test]
    fn test_unclosed_levels_dedent_at_end() {
        let tokens = tokenize("a\n  b\n    c");
        let dedents: Vec<_> = tokens.iter().filter(|t| t.kind == TokenKind::Dedent).collect();
        assert_eq!(dedents.len(), 2);
        assert!(dedents.iter().all(|t| t.span.start == 11 && t.span.end == 11));
    }

    #[test]
    fn test_equal_width_emits_nothing() {
        assert!(layout("a\nb\nc").is_empty());
        assert_eq!(layout("a\n  b\n  c"), vec![TokenKind::Indent, TokenKind::Dedent]);
    }

    #[test]
    fn test_blank_and_comment_lines_keep_level() {
        let source = "a\n    b\n\n  \neurope -> note\n    c\n";
        assert_eq!(layout(source), vec![TokenKind::Indent, TokenKind::Dedent]);
    }

    #[test]
    fn test_block_comment_lines_keep_level() {
        let source = "a\n    b\nasia -> note <- asia\n    c\n";
        assert_eq!(layout(source), vec![TokenKind::Indent, TokenKind::Dedent]);

        let trailing = "a\n    b\nasia -> note <- asia  europe -> more\n    c\n";
        assert_eq!(layout(trailing), vec![TokenKind::Indent, TokenKind::Dedent]);
    }

    #[test]
    fn test_code_after_block_comment_is_measured() {
        let source = "a\n    b\nasia -> note <- asia c\n    d\n";
        assert_eq!(
            layout(source),
            vec![TokenKind::Indent, TokenKind::Dedent, TokenKind::Indent, TokenKind::Dedent]
        );
    }

    #[test]
    fn test_huge_tab_width_saturates() {
        let tokens = tokenize_with_config("a\n\t\tb", &LexerConfig::new().with_tab_width(usize::MAX));
        let kinds: Vec<TokenKind> = tokens.into_iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![TokenKind::String, TokenKind::Newline, TokenKind::Indent, TokenKind::String, TokenKind::Dedent]
        );
    }

    #[test]
    fn test_tab_counts_as_configured_width() {
        // With width 4 the tab line is deeper than 2 spaces; with width 2 it is level with them.
        let source = "a\n  b\n\tc";
        assert_eq!(layout(source), vec![TokenKind::Indent, TokenKind::Indent, TokenKind::Dedent, TokenKind::Dedent]);

        let narrow = tokenize_with_config(source, &LexerConfig::new().with_tab_width(2));
        let kinds: Vec<TokenKind> = narrow
            .into_iter()
            .map(|t| t.kind)
            .filter(|k| matches!(k, TokenKind::Indent | TokenKind::Dedent))
            .collect();
        assert_eq!(kinds, vec![TokenKind::Indent, TokenKind::Dedent]);
    }

    #[test]
    fn test_partial_dedent_stops_at_lower_level() {
        // Levels [0, 4]; a line at width 2 pops back to 0 without emitting an INDENT.
        assert_eq!(layout("a\n    b\n  c"), vec![TokenKind::Indent, TokenKind::Dedent]);
    }
}
