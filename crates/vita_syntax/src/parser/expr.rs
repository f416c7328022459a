/// Expression parsing.
///
/// Precedence climbing over the single-character binary operators. Operator strength comes from
/// `vita_core::lang::operators`; equal-precedence chains associate left because the right-hand
/// side is parsed with `precedence + 1`.
impl<'a> Parser<'a> {
    /// A single Number, String, Const or Variable token.
    fn primary(&mut self) -> Result<Expr, ParseError> {
        match self.peek() {
            Some(token) if token.kind.is_literal() => {
                self.advance();
                Ok(Expr::Literal(LiteralExpr { token: token.clone() }))
            }
            Some(token) => Err(ParseError::UnidentifiableOperand { found: token.clone() }),
            None => Err(self.unexpected(&LITERAL_KINDS)),
        }
    }

    fn expression(&mut self, min_precedence: u8) -> Result<Expr, ParseError> {
        let mut left = self.primary()?;

        while let Some(token) = self.peek() {
            let Some(op) = token.operator_id() else {
                break;
            };
            let precedence = operators::precedence(op);
            if precedence < min_precedence {
                break;
            }
            self.advance();
            let right = self.expression(precedence + 1)?;
            left = Expr::Binary(BinaryExpr {
                left: Box::new(left),
                op: token.clone(),
                right: Box::new(right),
            });
        }

        Ok(left)
    }

    /// One expression, then any number of `, <expression>`.
    fn array(&mut self) -> Result<Expr, ParseError> {
        let mut elements = vec![self.expression(0)?];
        while self.match_token(TokenKind::Punctuation(PunctuationId::Comma)) {
            elements.push(self.expression(0)?);
        }
        Ok(Expr::Array(ArrayExpr { elements }))
    }
}
