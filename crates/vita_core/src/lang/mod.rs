//! VitaLang vocabulary registries.
//!
//! Callers work with **stable IDs** (e.g. `KeywordId`, `OperatorId`) and look up spellings and
//! metadata via registry tables, instead of comparing strings all over the frontend.
//!
//! ## Notes
//! - Registries are intentionally **pure**: no AST types, no IO, no side effects.
//! - The lexer/parser enforce syntax; registries provide spellings and metadata for shared use
//!   (diagnostics, the `vita keywords` listing, tests).
//!
//! ## Examples
//! ```rust
//! use vita_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("sweet"), Some(KeywordId::If));
//! assert_eq!(keywords::as_str(KeywordId::ElseIf), "sweet but stout");
//! ```

pub mod comments;
pub mod keywords;
pub mod operators;
pub mod punctuation;
pub mod registry;
pub mod sigils;
