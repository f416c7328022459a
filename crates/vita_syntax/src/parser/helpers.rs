/// Token-stream helpers.
///
/// This chunk contains the low-level primitives used throughout parsing:
/// - Peeking/consuming tokens (`peek`, `advance`)
/// - Matching / expecting token kinds
/// - Collecting delimited token runs for sub-parsing
impl<'a> Parser<'a> {
    // ========================================================================
    // Helpers
    // ========================================================================

    fn is_at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    /// Return the current token without consuming it.
    fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    fn peek_kind(&self) -> Option<TokenKind> {
        self.peek().map(|t| t.kind)
    }

    /// Consume the current token and return it.
    fn advance(&mut self) -> Option<&'a Token> {
        let token = self.tokens.get(self.pos)?;
        self.pos += 1;
        Some(token)
    }

    /// Return `true` if the current token is of `kind`.
    ///
    /// IDs of keyword/operator/punctuation tokens must match too.
    fn check(&self, kind: TokenKind) -> bool {
        self.peek_kind() == Some(kind)
    }

    /// If the current token is of `kind`, consume it and return `true`.
    fn match_token(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn expect(&mut self, kind: TokenKind) -> Result<&'a Token, ParseError> {
        self.expect_one_of(&[kind])
    }

    /// Consume the current token if it is one of `kinds`.
    fn expect_one_of(&mut self, kinds: &[TokenKind]) -> Result<&'a Token, ParseError> {
        match self.peek() {
            Some(token) if kinds.contains(&token.kind) => {
                self.pos += 1;
                Ok(token)
            }
            _ => Err(self.unexpected(kinds)),
        }
    }

    /// Build the error for a lookahead outside `expected`.
    fn unexpected(&self, expected: &[TokenKind]) -> ParseError {
        match self.peek() {
            Some(token) => ParseError::UnexpectedToken {
                found: token.clone(),
                expected: expected.to_vec(),
            },
            None => ParseError::UnexpectedEof {
                expected: expected.to_vec(),
                offset: self.end_offset,
            },
        }
    }

    fn skip_newlines(&mut self) {
        while self.match_token(TokenKind::Newline) {}
    }

    /// End offset of the most recently consumed token.
    fn previous_end(&self) -> usize {
        self.pos
            .checked_sub(1)
            .and_then(|i| self.tokens.get(i))
            .map_or(0, |t| t.span.end)
    }

    /// Consume tokens up to (not including) the first `stop`, returning them.
    ///
    /// ## Errors
    /// `UnexpectedEof` if `stop` never appears.
    fn collect_until(&mut self, stop: TokenKind) -> Result<&'a [Token], ParseError> {
        let start = self.pos;
        while !self.check(stop) {
            if self.advance().is_none() {
                return Err(self.unexpected(&[stop]));
            }
        }
        let tokens = self.tokens;
        Ok(&tokens[start..self.pos])
    }

    /// Index of the `RightParen` closing the `LeftParen` at `open`, tracking nesting.
    fn matching_paren(&self, open: usize) -> Option<usize> {
        let mut depth = 0usize;
        for (i, token) in self.tokens.iter().enumerate().skip(open) {
            match token.kind {
                TokenKind::Punctuation(PunctuationId::LeftParen) => depth += 1,
                TokenKind::Punctuation(PunctuationId::RightParen) => {
                    depth = depth.saturating_sub(1);
                    if depth == 0 {
                        return Some(i);
                    }
                }
                _ => {}
            }
        }
        None
    }

    /// Parse a delimited run of tokens as one expression with a fresh sub-parser.
    ///
    /// `end_offset` is where the run's terminator starts; an empty run reports end of input there.
    /// With `allow_array`, a run containing a comma is parsed as an array.
    fn parse_run(run: &'a [Token], end_offset: usize, allow_array: bool) -> Result<Expr, ParseError> {
        let mut sub = Parser::with_end_offset(run, end_offset);
        let comma = TokenKind::Punctuation(PunctuationId::Comma);
        let is_array = allow_array && run.iter().any(|t| t.kind == comma);
        let expr = if is_array { sub.array()? } else { sub.expression(0)? };

        if !sub.is_at_end() {
            let mut expected = BINARY_OPERATORS.to_vec();
            if is_array {
                expected.push(comma);
            }
            return Err(sub.unexpected(&expected));
        }
        Ok(expr)
    }
}
