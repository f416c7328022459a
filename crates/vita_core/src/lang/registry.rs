//! Shared metadata for `vita_core::lang` registries.
//!
//! ## Notes
//! - These types are `Copy` so registries can live in `const` tables.
//! - Metadata is meant for tooling/docs/diagnostics; enforcement of syntax rules still lives
//!   in the lexer/parser.

/// Describe how far the frontend supports a vocabulary item.
///
/// ## Examples
/// ```rust
/// use vita_core::lang::registry::Stability;
///
/// let s = Stability::Reserved;
/// assert_eq!(s.as_str(), "reserved");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stability {
    /// Recognized by the lexer and consumed by a parser production.
    Stable,
    /// Recognized by the lexer only; no grammar uses it yet.
    Reserved,
}

impl Stability {
    /// Lowercase label used in listings.
    pub const fn as_str(self) -> &'static str {
        match self {
            Stability::Stable => "stable",
            Stability::Reserved => "reserved",
        }
    }
}
