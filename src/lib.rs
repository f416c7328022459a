#![forbid(unsafe_code)]
//! VitaLang language frontend
//!
//! VitaLang is a small language with phrase keywords (`sweet but stout`), sigil-prefixed names
//! (`$const`, `£variable`) and indentation-delimited blocks. This crate ties the frontend
//! together: vocabulary from `vita_core`, tokenizer/parser/AST from `vita_syntax`, and the
//! `vita` command-line driver.
//!
//! ## Panic Policy
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module
//!   enforces `#![deny(clippy::unwrap_used)]`.
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//! - **True invariants**: If a panic represents a registry bug, use `.expect("INVARIANT: reason")`.

pub mod cli;

pub use vita_core::lang;
pub use vita_syntax::ast;
pub use vita_syntax::diagnostics;
pub use vita_syntax::lexer;
pub use vita_syntax::parser;

pub use vita_syntax::diagnostics::ParseError;
pub use vita_syntax::lexer::{LexerConfig, Token, TokenKind, tokenize, tokenize_with_config};
pub use vita_syntax::parser::parse;
