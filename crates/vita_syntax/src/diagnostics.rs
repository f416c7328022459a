//! Parse errors and source-position helpers.
//!
//! The parser never recovers: the first error aborts the parse and is returned as a single
//! [`ParseError`]. Every variant carries the offending token (or the end-of-input offset) and,
//! where meaningful, the token kinds that would have been accepted.

use std::fmt;

use miette::{Diagnostic, LabeledSpan};
use thiserror::Error;

use crate::ast::Span;
use crate::lexer::{Token, TokenKind};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error("unexpected {}, expected {}", .found.describe(), describe_expected(.expected))]
    UnexpectedToken { found: Token, expected: Vec<TokenKind> },

    #[error("unexpected end of input, expected {}", describe_expected(.expected))]
    UnexpectedEof { expected: Vec<TokenKind>, offset: usize },

    #[error("unidentifiable operand {}", .found.describe())]
    UnidentifiableOperand { found: Token },

    #[error("unrecognized statement starting with {}", .found.describe())]
    UnrecognizedStatement { found: Token },

    #[error("invalid repetition count `{}`", .found.text)]
    InvalidRepeatCount { found: Token },
}

impl ParseError {
    /// The token the parser stopped at, if input had not run out.
    pub fn offending_token(&self) -> Option<&Token> {
        match self {
            ParseError::UnexpectedToken { found, .. }
            | ParseError::UnidentifiableOperand { found }
            | ParseError::UnrecognizedStatement { found }
            | ParseError::InvalidRepeatCount { found } => Some(found),
            ParseError::UnexpectedEof { .. } => None,
        }
    }

    /// Token kinds that would have been accepted at the failure point.
    ///
    /// Empty for errors that are not about a single expected set.
    pub fn expected_kinds(&self) -> &[TokenKind] {
        match self {
            ParseError::UnexpectedToken { expected, .. } | ParseError::UnexpectedEof { expected, .. } => expected,
            _ => &[],
        }
    }

    pub fn span(&self) -> Span {
        match self {
            ParseError::UnexpectedEof { offset, .. } => Span::new(*offset, *offset),
            _ => self.offending_token().map(|t| t.span).unwrap_or_default(),
        }
    }

    fn label(&self) -> &'static str {
        match self {
            ParseError::UnexpectedToken { .. } => "unexpected token",
            ParseError::UnexpectedEof { .. } => "input ends here",
            ParseError::UnidentifiableOperand { .. } => "not an operand",
            ParseError::UnrecognizedStatement { .. } => "no statement starts like this",
            ParseError::InvalidRepeatCount { .. } => "repetition count out of range",
        }
    }
}

impl Diagnostic for ParseError {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match self {
            ParseError::UnexpectedToken { .. } => "vita::parse::unexpected_token",
            ParseError::UnexpectedEof { .. } => "vita::parse::unexpected_eof",
            ParseError::UnidentifiableOperand { .. } => "vita::parse::unidentifiable_operand",
            ParseError::UnrecognizedStatement { .. } => "vita::parse::unrecognized_statement",
            ParseError::InvalidRepeatCount { .. } => "vita::parse::invalid_repeat_count",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let block_kinds = [TokenKind::Newline, TokenKind::Indent, TokenKind::Dedent];
        let help = match self {
            ParseError::UnexpectedToken { expected, .. } | ParseError::UnexpectedEof { expected, .. }
                if expected.iter().any(|k| block_kinds.contains(k)) =>
            {
                "a block is `{`, a line break, an indented body, then `}` back at the outer indentation"
            }
            ParseError::UnidentifiableOperand { .. } => {
                "operands are numbers, bare words, `$constants` or `£variables`"
            }
            ParseError::UnrecognizedStatement { .. } => {
                "statements start with `I would love to own a plot of land in the 1800s called`, `sweet`, `lolsie`, or `(condition) yarp'`"
            }
            ParseError::InvalidRepeatCount { .. } => "use fewer trailing `s` characters",
            _ => return None,
        };
        Some(Box::new(help))
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        Some(Box::new(std::iter::once(LabeledSpan::new_with_span(
            Some(self.label().to_string()),
            self.span(),
        ))))
    }
}

/// Render an expected-kind set as `A`, `A or B`, or `A, B or C`, dropping duplicate names.
fn describe_expected(kinds: &[TokenKind]) -> String {
    let mut names: Vec<String> = Vec::new();
    for kind in kinds {
        let name = kind.to_string();
        if !names.contains(&name) {
            names.push(name);
        }
    }
    match names.split_last() {
        None => "nothing".to_string(),
        Some((last, [])) => last.clone(),
        Some((last, rest)) => format!("{} or {}", rest.join(", "), last),
    }
}

/// Resolve a byte offset to a 1-based `(line, column, line_text)`.
///
/// Columns count characters, not bytes. Offsets past the end clamp to the end of input.
pub fn line_col(source: &str, offset: usize) -> (usize, usize, &str) {
    let mut offset = offset.min(source.len());
    while !source.is_char_boundary(offset) {
        offset -= 1;
    }
    let line_start = source[..offset].rfind('\n').map_or(0, |i| i + 1);
    let line_end = source[offset..].find('\n').map_or(source.len(), |i| offset + i);
    let line = source[..line_start].matches('\n').count() + 1;
    let col = source[line_start..offset].chars().count() + 1;
    (line, col, &source[line_start..line_end])
}
