//! Abstract Syntax Tree definitions for VitaLang
//!
//! Every node owns its children directly. Expressions keep the tokens they were built from, so
//! literal text and operator identity are recoverable without the source buffer.

use std::fmt;

use crate::lexer::{Token, TokenKind};
use vita_core::lang::operators::OperatorId;
use vita_core::lang::sigils::{self, SigilId};

/// Source location span (byte offsets)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn merge(self, other: Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<Span> for miette::SourceSpan {
    fn from(span: Span) -> Self {
        (span.start, span.len()).into()
    }
}

/// A node with source location
#[derive(Debug, Clone, PartialEq)]
pub struct Spanned<T> {
    pub node: T,
    pub span: Span,
}

impl<T> Spanned<T> {
    pub fn new(node: T, span: Span) -> Self {
        Self { node, span }
    }
}

/// A sequence of statements; the body of a block or branch.
pub type Block = Vec<Spanned<Statement>>;

/// A program is the ordered sequence of top-level statements.
///
/// Bare top-level blocks are flattened into this sequence by the parser.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    pub statements: Block,
}

// ============================================================================
// Statements
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Assignment(Assignment),
    If(IfStmt),
    While(WhileStmt),
    For(ForStmt),
}

/// `I would love to own a plot of land in the 1800s called <name> and lease it to <expr> owners`
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    /// The `Const` or `Variable` token being bound.
    pub name: Token,
    pub value: Expr,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IfStmt {
    pub condition: Expr,
    pub body: Block,
    pub else_ifs: Vec<ElseIf>,
    pub else_body: Option<Block>,
}

/// One `sweet but stout <condition> { ... }` clause.
#[derive(Debug, Clone, PartialEq)]
pub struct ElseIf {
    pub condition: Expr,
    pub body: Block,
}

/// `(<condition>) yarp' { ... }`
#[derive(Debug, Clone, PartialEq)]
pub struct WhileStmt {
    pub condition: Expr,
    pub body: Block,
}

/// `lolsie<s...> £binding { ... }`
#[derive(Debug, Clone, PartialEq)]
pub struct ForStmt {
    /// Number of repetitions, decoded from the trailing `s` run of the keyword.
    pub count: u64,
    pub binding: Token,
    pub body: Block,
}

// ============================================================================
// Expressions
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Literal(LiteralExpr),
    Binary(BinaryExpr),
    Array(ArrayExpr),
}

/// A single Number, String, Const or Variable token.
#[derive(Debug, Clone, PartialEq)]
pub struct LiteralExpr {
    pub token: Token,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpr {
    pub left: Box<Expr>,
    pub op: Token,
    pub right: Box<Expr>,
}

impl BinaryExpr {
    pub fn operator(&self) -> Option<OperatorId> {
        self.op.kind.operator_id()
    }
}

/// Comma-separated expressions. Never empty when produced by the parser.
#[derive(Debug, Clone, PartialEq)]
pub struct ArrayExpr {
    pub elements: Vec<Expr>,
}

impl Expr {
    /// Span covering every token of the expression.
    pub fn span(&self) -> Span {
        match self {
            Expr::Literal(lit) => lit.token.span,
            Expr::Binary(bin) => bin.left.span().merge(bin.right.span()),
            Expr::Array(arr) => match (arr.elements.first(), arr.elements.last()) {
                (Some(first), Some(last)) => first.span().merge(last.span()),
                _ => Span::default(),
            },
        }
    }
}

// ============================================================================
// Rendering
// ============================================================================

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Literal(lit) => match lit.token.kind {
                TokenKind::Const => write!(f, "{}{}", sigils::as_char(SigilId::Const), lit.token.text),
                TokenKind::Variable => write!(f, "{}{}", sigils::as_char(SigilId::Variable), lit.token.text),
                _ => write!(f, "{}", lit.token.text),
            },
            Expr::Binary(bin) => write!(f, "({} {} {})", bin.op.text, bin.left, bin.right),
            Expr::Array(arr) => {
                write!(f, "[")?;
                for (i, element) in arr.elements.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{element}")?;
                }
                write!(f, "]")
            }
        }
    }
}

fn write_line(f: &mut fmt::Formatter<'_>, depth: usize, line: fmt::Arguments<'_>) -> fmt::Result {
    writeln!(f, "{:width$}{line}", "", width = depth * 2)
}

fn write_block(f: &mut fmt::Formatter<'_>, body: &[Spanned<Statement>], depth: usize) -> fmt::Result {
    for stmt in body {
        write_statement(f, &stmt.node, depth)?;
    }
    Ok(())
}

fn write_statement(f: &mut fmt::Formatter<'_>, stmt: &Statement, depth: usize) -> fmt::Result {
    match stmt {
        Statement::Assignment(assign) => {
            let name = Expr::Literal(LiteralExpr {
                token: assign.name.clone(),
            });
            write_line(f, depth, format_args!("assign {} {}", name, assign.value))
        }
        Statement::If(stmt) => {
            write_line(f, depth, format_args!("if {}", stmt.condition))?;
            write_block(f, &stmt.body, depth + 1)?;
            for clause in &stmt.else_ifs {
                write_line(f, depth, format_args!("else-if {}", clause.condition))?;
                write_block(f, &clause.body, depth + 1)?;
            }
            if let Some(body) = &stmt.else_body {
                write_line(f, depth, format_args!("else"))?;
                write_block(f, body, depth + 1)?;
            }
            Ok(())
        }
        Statement::While(stmt) => {
            write_line(f, depth, format_args!("while {}", stmt.condition))?;
            write_block(f, &stmt.body, depth + 1)
        }
        Statement::For(stmt) => {
            write_line(
                f,
                depth,
                format_args!("repeat {} {}{}", stmt.count, sigils::as_char(SigilId::Variable), stmt.binding.text),
            )?;
            write_block(f, &stmt.body, depth + 1)
        }
    }
}

/// One line per statement, nested bodies indented by two spaces.
///
/// ```text
/// assign £x (+ 1 (* 2 3))
/// if £x
///   assign $y hello
/// ```
impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_block(f, &self.statements, 0)
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_statement(f, self, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vita_core::lang::operators::OperatorId;

    fn lit(kind: TokenKind, text: &str, start: usize) -> Expr {
        Expr::Literal(LiteralExpr {
            token: Token::new(kind, text, Span::new(start, start + text.len())),
        })
    }

    #[test]
    fn test_span_merge() {
        assert_eq!(Span::new(4, 6).merge(Span::new(1, 2)), Span::new(1, 6));
    }

    #[test]
    fn test_binary_span_covers_operands() {
        let expr = Expr::Binary(BinaryExpr {
            left: Box::new(lit(TokenKind::Number, "1", 0)),
            op: Token::new(TokenKind::Operator(OperatorId::Plus), "+", Span::new(2, 3)),
            right: Box::new(lit(TokenKind::Number, "22", 4)),
        });
        assert_eq!(expr.span(), Span::new(0, 6));
        assert_eq!(expr.to_string(), "(+ 1 22)");
    }

    #[test]
    fn test_sigils_rendered() {
        assert_eq!(lit(TokenKind::Const, "x", 0).to_string(), "$x");
        assert_eq!(lit(TokenKind::Variable, "y", 0).to_string(), "£y");
        assert_eq!(lit(TokenKind::String, "hi", 0).to_string(), "hi");
    }

    #[test]
    fn test_program_dump_indents_bodies() {
        let inner = Spanned::new(
            Statement::Assignment(Assignment {
                name: Token::new(TokenKind::Const, "y", Span::new(0, 2)),
                value: lit(TokenKind::Number, "2", 0),
            }),
            Span::default(),
        );
        let program = Program {
            statements: vec![Spanned::new(
                Statement::For(ForStmt {
                    count: 3,
                    binding: Token::new(TokenKind::Variable, "i", Span::new(0, 2)),
                    body: vec![inner],
                }),
                Span::default(),
            )],
        };
        assert_eq!(program.to_string(), "repeat 3 £i\n  assign $y 2\n");
    }
}
