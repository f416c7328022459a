//! Syntax frontend for VitaLang: lexer, parser, AST, diagnostics.
//!
//! The pipeline is strictly one-directional: source text → tokens → AST.
//!
//! ## Notes
//! - This crate is intentionally “syntax-only”: no name resolution, no type checking, no evaluation.
//! - Vocabulary identity (keyword phrases, operators, punctuation, sigils) comes from `vita_core::lang`.
//! - Tokenizing never fails; unrecognized characters become `Unknown` tokens and are rejected by the parser.
//!
//! ## Examples
//! ```rust
//! use vita_syntax::{lexer, parser};
//!
//! let tokens = lexer::tokenize("I would love to own a plot of land in the 1800s called £x and lease it to 1 + 2 owners");
//! let program = parser::parse(&tokens).unwrap();
//! assert_eq!(program.statements.len(), 1);
//! ```

pub mod ast;
pub mod diagnostics;
pub mod lexer;
pub mod parser;
pub mod token_helpers;
