//! Parser for VitaLang
//!
//! Converts a token stream into an AST: recursive descent for statements and blocks, precedence
//! climbing for binary expressions.
//!
//! ## Examples
//!
//! ```rust
//! use vita_syntax::{lexer, parser};
//!
//! let source = "sweet £x {\n    I would love to own a plot of land in the 1800s called $y and lease it to 2 * 3 owners\n}";
//! let tokens = lexer::tokenize(source);
//! let program = parser::parse(&tokens).unwrap();
//! assert_eq!(program.statements.len(), 1);
//! ```

use crate::ast::*;
use crate::diagnostics::ParseError;
use crate::lexer::{Token, TokenKind};
use vita_core::lang::keywords::KeywordId;
use vita_core::lang::operators::{self, OperatorId};
use vita_core::lang::punctuation::PunctuationId;

// NOTE: This module is split across multiple files using `include!` to keep all parser
// methods in the same Rust module (preserving privacy + call patterns) while avoiding
// a single large source file.

include!("parser/core.rs");
include!("parser/helpers.rs");
include!("parser/stmts.rs");
include!("parser/expr.rs");
include!("parser/api.rs");
include!("parser/tests.rs");
