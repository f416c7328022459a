#![no_main]

use libfuzzer_sys::fuzz_target;
use vita::{lexer, parser};

fuzz_target!(|data: &[u8]| {
    // Convert bytes to UTF-8 string (ignore invalid UTF-8)
    if let Ok(s) = std::str::from_utf8(data) {
        // Tokenizing is total; every token stream must parse or fail cleanly.
        let tokens = lexer::tokenize(s);
        let _ = parser::parse(&tokens);
    }
});
