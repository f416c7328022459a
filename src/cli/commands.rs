//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use miette::{NamedSource, Report};
use vita_core::lang::keywords;
use vita_syntax::ast::Program;
use vita_syntax::diagnostics::{self, ParseError};
use vita_syntax::lexer::{self, LexerConfig, Token};
use vita_syntax::parser;

use super::{CliError, CliResult, ExitCode};

/// Maximum source file size (100 MB)
const MAX_SOURCE_SIZE: u64 = 100 * 1024 * 1024;

/// Read a source file.
///
/// Returns an error if:
/// - The file cannot be read (I/O error)
/// - The file exceeds `MAX_SOURCE_SIZE` (100 MB)
pub fn read_source(path: &Path) -> CliResult<String> {
    let shown = path.display();
    let metadata = fs::metadata(path).map_err(|e| CliError::failure(format!("Cannot access file '{shown}': {e}")))?;

    if metadata.len() > MAX_SOURCE_SIZE {
        return Err(CliError::failure(format!(
            "Source file '{}' is too large ({} bytes, max {} bytes)",
            shown,
            metadata.len(),
            MAX_SOURCE_SIZE
        )));
    }

    fs::read_to_string(path).map_err(|e| CliError::failure(format!("Error reading file '{shown}': {e}")))
}

/// Lex and display tokens.
#[tracing::instrument(skip_all, fields(path = %path.display()))]
pub fn lex_file(path: &Path, config: &LexerConfig, spans: bool) -> CliResult<ExitCode> {
    let source = read_source(path)?;
    let tokens = lexer::tokenize_with_config(&source, config);
    tracing::debug!(token_count = tokens.len(), "lexed");
    print!("{}", render_tokens(&source, &tokens, spans));
    Ok(ExitCode::SUCCESS)
}

/// Parse and display the syntax tree.
#[tracing::instrument(skip_all, fields(path = %path.display()))]
pub fn parse_file(path: &Path, config: &LexerConfig) -> CliResult<ExitCode> {
    let source = read_source(path)?;
    let program = parse_source(&source, config).map_err(|err| {
        tracing::debug!(offset = err.span().start, "parse failed");
        CliError::failure(render_parse_error(&path.display().to_string(), &source, err))
    })?;
    tracing::debug!(statement_count = program.statements.len(), "parsed");
    print!("{program}");
    Ok(ExitCode::SUCCESS)
}

/// Print the keyword phrase table.
pub fn list_keywords() -> CliResult<ExitCode> {
    print!("{}", render_keywords());
    Ok(ExitCode::SUCCESS)
}

/// Tokenize then parse.
pub fn parse_source(source: &str, config: &LexerConfig) -> Result<Program, ParseError> {
    let tokens = lexer::tokenize_with_config(source, config);
    parser::parse(&tokens)
}

/// One token per line; with `spans`, prefixed by the 1-based `line:col` of its first character.
pub fn render_tokens(source: &str, tokens: &[Token], spans: bool) -> String {
    let mut out = String::new();
    for token in tokens {
        if spans {
            let (line, col, _) = diagnostics::line_col(source, token.span.start);
            let _ = write!(out, "{line}:{col}\t");
        }
        let _ = writeln!(out, "{token}");
    }
    out
}

/// Keyword phrases in matching order (longest first), with category and stability.
pub fn render_keywords() -> String {
    let mut out = String::new();
    for info in keywords::by_length_desc() {
        let _ = writeln!(
            out,
            "{:<12} {:<8} {:<9} {}",
            info.id.to_string(),
            info.category.as_str(),
            info.stability.as_str(),
            info.phrase
        );
    }
    out
}

/// Render a parse error with the offending source line highlighted.
pub fn render_parse_error(name: &str, source: &str, err: ParseError) -> String {
    let report = Report::new(err).with_source_code(NamedSource::new(name, source.to_string()));
    format!("{report:?}")
}
