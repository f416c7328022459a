//! Lexer for VitaLang
//!
//! Handles tokenization including:
//! - Multi-word keyword phrases, resolved by longest match
//! - The counted-loop keyword and its trailing `s` repetition run
//! - Sigil-prefixed names (`$const`, `£variable`), bare words and numbers
//! - Single-character operators and punctuation
//! - Indentation-based blocks (INDENT/DEDENT tokens)
//!
//! ## Module Structure
//!
//! - `tokens` - Token types (TokenKind, Token)
//! - `config` - Tab width and other tunables
//! - `phrases` - Keyword phrase matching
//! - `numbers` - Numeric literal scanning
//! - `comments` - Comment trivia
//! - `indent` - INDENT/DEDENT handling

mod comments;
mod config;
mod indent;
mod numbers;
mod phrases;
pub mod tokens;

pub use config::LexerConfig;
pub use tokens::{Token, TokenKind};

use crate::ast::Span;
use vita_core::lang::{operators, punctuation, sigils};

// ============================================================================
// LEXER STATE
// ----------------------------------------------------------------------------
// After every '\n' the lexer measures the next line's leading whitespace and
// compares it to the indent stack:
//
// [Newline] → measure width w → w > top  → push, INDENT
//                             → w < top  → pop until top <= w, one DEDENT each
//                             → w == top → nothing
//
// Blank and comment-only lines are skipped without touching the stack.
// ============================================================================

/// Lexer for VitaLang source code.
///
/// Tokenizing is total: anything unrecognized becomes an [`TokenKind::Unknown`] token and is left
/// for the parser to reject.
pub struct Lexer<'a> {
    source: &'a str,
    /// Byte offset of the next unread character.
    pos: usize,
    /// Never empty; the base level is 0.
    indent_stack: Vec<usize>,
    config: LexerConfig,
    tokens: Vec<Token>,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer with the default configuration.
    pub fn new(source: &'a str) -> Self {
        Self::with_config(source, LexerConfig::default())
    }

    pub fn with_config(source: &'a str, config: LexerConfig) -> Self {
        Self {
            source,
            pos: 0,
            indent_stack: vec![0],
            config,
            tokens: Vec::new(),
        }
    }

    /// Tokenize the entire source.
    ///
    /// Every INDENT emitted is matched by a DEDENT before the stream ends.
    pub fn tokenize(mut self) -> Vec<Token> {
        while !self.is_at_end() {
            self.scan_token();
        }
        self.close_open_blocks();
        tracing::debug!(token_count = self.tokens.len(), "tokenized");
        self.tokens
    }

    // ========================================================================
    // Core character handling
    // ========================================================================

    fn is_at_end(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// Unread remainder of the source.
    fn rest(&self) -> &'a str {
        &self.source[self.pos..]
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn peek_next(&self) -> Option<char> {
        let mut chars = self.rest().chars();
        chars.next();
        chars.next()
    }

    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    /// Consume characters while `pred` holds.
    fn advance_while(&mut self, pred: impl Fn(char) -> bool) {
        while self.peek().is_some_and(&pred) {
            self.advance();
        }
    }

    // ========================================================================
    // Main scanning dispatch
    // ========================================================================

    fn scan_token(&mut self) {
        let start = self.pos;
        let Some(c) = self.peek() else {
            return;
        };

        match c {
            '\n' => {
                self.advance();
                self.tokens.push(Token::new(TokenKind::Newline, "\n", Span::new(start, self.pos)));
                self.handle_indentation();
            }
            ' ' | '\t' | '\r' => {
                self.advance();
            }
            _ => self.scan_significant(c, start),
        }
    }

    fn scan_significant(&mut self, c: char, start: usize) {
        if let Some(id) = punctuation::from_char(c) {
            self.advance();
            self.add_token(TokenKind::Punctuation(id), start);
            return;
        }
        if let Some(id) = operators::from_char(c) {
            self.advance();
            self.add_token(TokenKind::Operator(id), start);
            return;
        }
        if self.skip_comment() || self.scan_keyword_phrase(start) {
            return;
        }
        if let Some(sigil) = sigils::from_char(c) {
            self.scan_sigil(sigil, start);
            return;
        }
        if c.is_ascii_alphabetic() {
            self.advance_while(|c| c.is_ascii_alphabetic());
            self.add_token(TokenKind::String, start);
            return;
        }
        if c.is_ascii_digit() {
            self.scan_number(start);
            return;
        }
        self.advance();
        self.add_token(TokenKind::Unknown, start);
    }

    // ========================================================================
    // Token helpers
    // ========================================================================

    /// Push a token whose text is exactly the source slice `start..pos`.
    fn add_token(&mut self, kind: TokenKind, start: usize) {
        let text = &self.source[start..self.pos];
        self.tokens.push(Token::new(kind, text, Span::new(start, self.pos)));
    }

    /// `$name` / `£name`. The token text drops the sigil; the span keeps it.
    fn scan_sigil(&mut self, sigil: sigils::SigilId, start: usize) {
        self.advance();
        let name_start = self.pos;
        self.advance_while(|c| c.is_ascii_alphabetic());
        if self.pos == name_start {
            self.add_token(TokenKind::Unknown, start);
            return;
        }
        let kind = match sigil {
            sigils::SigilId::Const => TokenKind::Const,
            sigils::SigilId::Variable => TokenKind::Variable,
        };
        let name = &self.source[name_start..self.pos];
        self.tokens.push(Token::new(kind, name, Span::new(start, self.pos)));
    }
}

// ============================================================================
// Helper functions
// ============================================================================

/// Check if a character can continue an identifier (ASCII-only).
///
/// A keyword phrase followed by one of these is not a keyword (`sweetie` is a bare word).
fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Tokenize a source string with the default configuration.
///
/// This is a shorthand for `Lexer::new(source).tokenize()`.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn tokenize(source: &str) -> Vec<Token> {
    Lexer::new(source).tokenize()
}

/// Tokenize a source string with an explicit configuration.
#[tracing::instrument(skip_all, fields(source_len = source.len(), tab_width = config.tab_width))]
pub fn tokenize_with_config(source: &str, config: &LexerConfig) -> Vec<Token> {
    Lexer::with_config(source, *config).tokenize()
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use vita_core::lang::keywords::{self, KeywordId};
    use vita_core::lang::operators::OperatorId;
    use vita_core::lang::punctuation::PunctuationId;

    fn kinds(source: &str) -> Vec<TokenKind> {
        tokenize(source).into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_keyword_registry_parity() {
        for info in keywords::KEYWORDS {
            let tokens = tokenize(info.phrase);
            assert_eq!(tokens.len(), 1, "phrase {:?} should be one token", info.phrase);
            assert_eq!(tokens[0].kind, TokenKind::Keyword(info.id));
        }
    }

    #[test]
    fn test_operator_registry_parity() {
        for info in operators::OPERATORS {
            let tokens = tokenize(&info.symbol.to_string());
            assert_eq!(tokens.len(), 1);
            assert_eq!(tokens[0].kind, TokenKind::Operator(info.id));
            assert_eq!(tokens[0].text, info.symbol.to_string());
        }
    }

    #[test]
    fn test_punctuation_registry_parity() {
        for &(id, c) in punctuation::PUNCTUATION {
            assert_eq!(kinds(&c.to_string()), vec![TokenKind::Punctuation(id)]);
        }
    }

    #[test]
    fn test_else_if_is_single_token() {
        let tokens = tokenize("sweet but stout");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::Keyword(KeywordId::ElseIf));
        assert_eq!(tokens[0].text, "sweet but stout");
    }

    #[test]
    fn test_false_is_single_token() {
        let tokens = tokenize("not not particularly");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::Keyword(KeywordId::False));
    }

    #[test]
    fn test_boundary_rule_rejects_keyword_prefix_of_word() {
        let tokens = tokenize("sweetie");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::String);
        assert_eq!(tokens[0].text, "sweetie");
    }

    #[test]
    fn test_boundary_falls_back_to_shorter_phrase() {
        // `sweet but stouter` cannot be ElseIf, but `sweet` on its own still is If.
        assert_eq!(
            kinds("sweet but stouter"),
            vec![
                TokenKind::Keyword(KeywordId::If),
                TokenKind::String,
                TokenKind::String
            ]
        );
    }

    #[test]
    fn test_for_counts() {
        for (source, count) in [("lolsie", "0"), ("lolsies", "1"), ("lolsiesssss", "5")] {
            let tokens = tokenize(source);
            assert_eq!(tokens.len(), 1);
            assert_eq!(tokens[0].kind, TokenKind::Keyword(KeywordId::For));
            assert_eq!(tokens[0].text, count);
            assert_eq!(tokens[0].span, Span::new(0, source.len()));
        }
    }

    #[test]
    fn test_for_accepts_identifier_trailer() {
        // Only the `s` run is consumed; the rest is a separate word.
        let tokens = tokenize("lolsiessx");
        assert_eq!(tokens[0].kind, TokenKind::Keyword(KeywordId::For));
        assert_eq!(tokens[0].text, "2");
        assert_eq!(tokens[1].kind, TokenKind::String);
        assert_eq!(tokens[1].text, "x");
    }

    #[test]
    fn test_sigils() {
        let tokens = tokenize("$name £other");
        assert_eq!(tokens[0].kind, TokenKind::Const);
        assert_eq!(tokens[0].text, "name");
        assert_eq!(tokens[0].span, Span::new(0, 5));
        assert_eq!(tokens[1].kind, TokenKind::Variable);
        assert_eq!(tokens[1].text, "other");
        // `£` is two bytes in UTF-8
        assert_eq!(tokens[1].span, Span::new(6, 13));
    }

    #[test]
    fn test_empty_sigil_is_unknown() {
        let tokens = tokenize("$ 1");
        assert_eq!(tokens[0].kind, TokenKind::Unknown);
        assert_eq!(tokens[0].text, "$");
        assert_eq!(tokens[1].kind, TokenKind::Number);
    }

    #[test]
    fn test_numbers() {
        let tokens = tokenize("42 3.14 7.");
        let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["42", "3.14", "7", "."]);
        assert_eq!(tokens[3].kind, TokenKind::Unknown);
    }

    #[test]
    fn test_expression_tokens() {
        assert_eq!(
            kinds("(1 + £x) * 2"),
            vec![
                TokenKind::Punctuation(PunctuationId::LeftParen),
                TokenKind::Number,
                TokenKind::Operator(OperatorId::Plus),
                TokenKind::Variable,
                TokenKind::Punctuation(PunctuationId::RightParen),
                TokenKind::Operator(OperatorId::Star),
                TokenKind::Number,
            ]
        );
    }

    #[test]
    fn test_unknown_characters() {
        let tokens = tokenize("@ é");
        assert_eq!(tokens.len(), 2);
        assert!(tokens.iter().all(|t| t.kind == TokenKind::Unknown));
        assert_eq!(tokens[1].text, "é");
    }

    #[test]
    fn test_assignment_line() {
        let source = "I would love to own a plot of land in the 1800s called £x and lease it to 5 owners";
        assert_eq!(
            kinds(source),
            vec![
                TokenKind::Keyword(KeywordId::Define),
                TokenKind::Variable,
                TokenKind::Keyword(KeywordId::Assign),
                TokenKind::Number,
                TokenKind::Keyword(KeywordId::EndOfAssign),
            ]
        );
    }

    #[test]
    fn test_literal_text_matches_source_slice() {
        let source = "sweet 12.5 + word - $c {";
        for token in tokenize(source) {
            if matches!(token.kind, TokenKind::Number | TokenKind::String) {
                assert_eq!(&source[token.span.start..token.span.end], token.text);
            }
        }
    }

    #[test]
    fn test_tab_width_config() {
        let source = "sweet 1 {\n\tx\n}";
        let default = tokenize(source);
        let wide = tokenize_with_config(source, &LexerConfig::new().with_tab_width(8));
        assert_eq!(
            default.iter().map(|t| t.kind).collect::<Vec<_>>(),
            wide.iter().map(|t| t.kind).collect::<Vec<_>>()
        );
    }
}
