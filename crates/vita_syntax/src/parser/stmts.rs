/// Statement and block parsing.
///
/// Dispatch is on the lookahead token:
/// - `lolsie...` → counted loop
/// - `sweet` → conditional (with optional `sweet but stout` / `stout` clauses)
/// - `(` whose matching `)` is followed by `yarp'` → while loop
/// - `I would love to own ...` → assignment
impl<'a> Parser<'a> {
    fn statement(&mut self) -> Result<Spanned<Statement>, ParseError> {
        let Some(token) = self.peek() else {
            return Err(self.unexpected(&STATEMENT_STARTS));
        };
        tracing::debug!(kind = %token.kind, offset = token.span.start, "statement");
        let start = token.span.start;

        let stmt = match token.kind {
            TokenKind::Keyword(KeywordId::For) => self.for_stmt()?,
            TokenKind::Keyword(KeywordId::If) => self.if_stmt()?,
            TokenKind::Punctuation(PunctuationId::LeftParen) if self.is_while_ahead() => self.while_stmt()?,
            TokenKind::Keyword(KeywordId::Define) => self.assignment()?,
            _ => return Err(ParseError::UnrecognizedStatement { found: token.clone() }),
        };

        Ok(Spanned::new(stmt, Span::new(start, self.previous_end())))
    }

    /// `{ Newline Indent <statements> Dedent }`
    ///
    /// Stray newlines between statements are skipped.
    fn block(&mut self) -> Result<Block, ParseError> {
        self.expect(TokenKind::Punctuation(PunctuationId::LeftCurly))?;
        self.expect(TokenKind::Newline)?;
        self.expect(TokenKind::Indent)?;

        let mut body = Vec::new();
        loop {
            match self.peek_kind() {
                Some(TokenKind::Dedent) => break,
                Some(TokenKind::Newline) => {
                    self.advance();
                }
                Some(_) => body.push(self.statement()?),
                None => return Err(self.unexpected(&[TokenKind::Dedent])),
            }
        }

        self.expect(TokenKind::Dedent)?;
        self.expect(TokenKind::Punctuation(PunctuationId::RightCurly))?;
        Ok(body)
    }

    /// `Define <Const|Variable> Assign <tokens...> EndOfAssign`
    fn assignment(&mut self) -> Result<Statement, ParseError> {
        self.expect(TokenKind::Keyword(KeywordId::Define))?;
        let name = self.expect_one_of(&BINDING_KINDS)?.clone();
        self.expect(TokenKind::Keyword(KeywordId::Assign))?;

        let end = TokenKind::Keyword(KeywordId::EndOfAssign);
        let run = self.collect_until(end)?;
        let terminator = self.expect(end)?;
        let value = Self::parse_run(run, terminator.span.start, true)?;

        Ok(Statement::Assignment(Assignment { name, value }))
    }

    /// `If <tokens...> Block`, then any `ElseIf <tokens...> Block` clauses and an optional `Else Block`.
    fn if_stmt(&mut self) -> Result<Statement, ParseError> {
        self.expect(TokenKind::Keyword(KeywordId::If))?;
        let (condition, body) = self.condition_and_block()?;

        let mut else_ifs = Vec::new();
        let mut else_body = None;
        loop {
            let before_newlines = self.pos;
            self.skip_newlines();
            if self.match_token(TokenKind::Keyword(KeywordId::ElseIf)) {
                let (condition, body) = self.condition_and_block()?;
                else_ifs.push(ElseIf { condition, body });
            } else if self.match_token(TokenKind::Keyword(KeywordId::Else)) {
                else_body = Some(self.block()?);
                break;
            } else {
                // Not part of this statement; leave the newlines to the caller.
                self.pos = before_newlines;
                break;
            }
        }

        Ok(Statement::If(IfStmt {
            condition,
            body,
            else_ifs,
            else_body,
        }))
    }

    /// Condition tokens up to `{`, then the block.
    fn condition_and_block(&mut self) -> Result<(Expr, Block), ParseError> {
        let left_curly = TokenKind::Punctuation(PunctuationId::LeftCurly);
        let run = self.collect_until(left_curly)?;
        let end_offset = self.peek().map_or(self.end_offset, |t| t.span.start);
        let condition = Self::parse_run(run, end_offset, false)?;
        let body = self.block()?;
        Ok((condition, body))
    }

    /// Lookahead: the `(` at the cursor closes with a `)` immediately followed by `yarp'`.
    ///
    /// Consumes nothing.
    fn is_while_ahead(&self) -> bool {
        self.matching_paren(self.pos)
            .and_then(|close| self.tokens.get(close + 1))
            .is_some_and(|t| t.kind.is_keyword(KeywordId::While))
    }

    /// `( <tokens...> ) While Block`
    fn while_stmt(&mut self) -> Result<Statement, ParseError> {
        let open = self.pos;
        self.expect(TokenKind::Punctuation(PunctuationId::LeftParen))?;
        let close = self
            .matching_paren(open)
            .ok_or_else(|| self.unexpected(&[TokenKind::Punctuation(PunctuationId::RightParen)]))?;

        let tokens = self.tokens;
        let run = &tokens[self.pos..close];
        self.pos = close;
        let closer = self.expect(TokenKind::Punctuation(PunctuationId::RightParen))?;
        let condition = Self::parse_run(run, closer.span.start, false)?;
        self.expect(TokenKind::Keyword(KeywordId::While))?;
        let body = self.block()?;

        Ok(Statement::While(WhileStmt { condition, body }))
    }

    /// `For Variable Block`; the For token's text is the decoded repetition count.
    fn for_stmt(&mut self) -> Result<Statement, ParseError> {
        let keyword = self.expect(TokenKind::Keyword(KeywordId::For))?;
        let count = keyword
            .text
            .parse::<u64>()
            .map_err(|_| ParseError::InvalidRepeatCount { found: keyword.clone() })?;
        let binding = self.expect(TokenKind::Variable)?.clone();
        let body = self.block()?;

        Ok(Statement::For(ForStmt { count, binding, body }))
    }
}
