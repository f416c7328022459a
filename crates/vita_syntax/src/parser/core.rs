/// Parser core types and entrypoint.
///
/// This chunk defines the [`Parser`] type and its top-level `parse()` entrypoint, plus the
/// expected-kind sets shared by the other chunks.
///
/// ## Notes
/// - This file is `include!`'d into `crate::parser` to keep all parser methods in a
///   single module while avoiding a single “god file”.
const LITERAL_KINDS: [TokenKind; 4] = [TokenKind::Number, TokenKind::String, TokenKind::Const, TokenKind::Variable];

const BINDING_KINDS: [TokenKind; 2] = [TokenKind::Const, TokenKind::Variable];

const BINARY_OPERATORS: [TokenKind; 4] = [
    TokenKind::Operator(OperatorId::Plus),
    TokenKind::Operator(OperatorId::Minus),
    TokenKind::Operator(OperatorId::Star),
    TokenKind::Operator(OperatorId::Slash),
];

const STATEMENT_STARTS: [TokenKind; 4] = [
    TokenKind::Keyword(KeywordId::Define),
    TokenKind::Keyword(KeywordId::If),
    TokenKind::Keyword(KeywordId::For),
    TokenKind::Punctuation(PunctuationId::LeftParen),
];

/// Parser state.
///
/// ## Notes
/// - There is no error recovery: the first error aborts the parse.
/// - Condition and assignment runs are re-parsed by a sub-parser over a slice of the same
///   token stream; `end_offset` tells that sub-parser where its input "ends" in the source.
pub struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
    end_offset: usize,
}

impl<'a> Parser<'a> {
    /// Create a new parser for a token stream.
    ///
    /// ## Parameters
    /// - `tokens`: Token stream produced by `vita_syntax::lexer`.
    pub fn new(tokens: &'a [Token]) -> Self {
        let end_offset = tokens.last().map_or(0, |t| t.span.end);
        Self::with_end_offset(tokens, end_offset)
    }

    fn with_end_offset(tokens: &'a [Token], end_offset: usize) -> Self {
        Self {
            tokens,
            pos: 0,
            end_offset,
        }
    }

    /// Parse the entire token stream into a [`Program`].
    ///
    /// Stray newlines between top-level statements are skipped, and bare top-level blocks are
    /// flattened into the program.
    ///
    /// ## Errors
    /// Returns the first [`ParseError`]; no partial program is produced.
    pub fn parse(mut self) -> Result<Program, ParseError> {
        let mut statements = Vec::new();

        while let Some(token) = self.peek() {
            match token.kind {
                TokenKind::Newline => {
                    self.advance();
                }
                TokenKind::Punctuation(PunctuationId::LeftCurly) => statements.extend(self.block()?),
                _ => statements.push(self.statement()?),
            }
        }

        tracing::debug!(statement_count = statements.len(), "parsed program");
        Ok(Program { statements })
    }
}
