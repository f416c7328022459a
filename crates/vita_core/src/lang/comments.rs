//! Comment markers.
//!
//! - `europe ->` starts a comment running to the end of the line.
//! - `asia ->` opens a block comment closed by `<- asia`; it may span lines.
//!
//! Comments are trivia: the lexer skips them and never emits a token for them.

/// Line comment marker.
pub const LINE: &str = "europe ->";

/// Block comment opener.
pub const BLOCK_OPEN: &str = "asia ->";

/// Block comment closer.
pub const BLOCK_CLOSE: &str = "<- asia";
