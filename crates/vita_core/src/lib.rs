//! Canonical language vocabulary for VitaLang.
//!
//! This crate is intentionally small and dependency-free. It holds the spellings and metadata the
//! lexer, parser and driver share: multi-word keyword phrases, operators (with precedence),
//! punctuation, identifier sigils and comment markers.
//!
//! ## Notes
//!
//! - This is a “vocabulary” crate: **no IO**, no AST types, and nothing mutable. The only global is
//!   the lazily-sorted keyword matching order, computed once and then read-only.

pub mod lang;
