//! Lexer configuration.

/// Tunables for the tokenizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LexerConfig {
    /// Indentation width contributed by one tab character. Spaces always count 1.
    pub tab_width: usize,
}

impl Default for LexerConfig {
    fn default() -> Self {
        Self { tab_width: 4 }
    }
}

impl LexerConfig {
    /// Create a config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the width of a tab character
    pub fn with_tab_width(mut self, width: usize) -> Self {
        self.tab_width = width;
        self
    }
}
