//! CLI module for the VitaLang frontend
//!
//! ## Commands
//!
//! - `<file>` - Tokenize and print the token stream (default action)
//! - `lex <file>` - Print one token per line, optionally with source positions
//! - `parse <file>` - Print the syntax tree, or a rendered diagnostic on failure
//! - `keywords` - Print the keyword phrase table in matching order
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand};
use thiserror::Error;
use vita_syntax::lexer::LexerConfig;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    /// Create a new CLI error with a message and exit code.
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Clap CLI definition
// ============================================================================

/// The VitaLang frontend: tokenizer and parser
#[derive(Parser, Debug)]
#[command(name = "vita")]
#[command(version = VERSION)]
#[command(about = "Tokenize and parse VitaLang source files", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// File to tokenize (default action when no subcommand given)
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,
}

/// Options shared by every command that runs the tokenizer.
#[derive(Args, Debug, Clone, Copy)]
pub struct LexOptions {
    /// Indentation width of a tab character
    #[arg(long, value_name = "N", default_value_t = 4)]
    pub tab_width: usize,
}

impl LexOptions {
    pub fn config(&self) -> LexerConfig {
        LexerConfig::new().with_tab_width(self.tab_width)
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Tokenize a file and print one token per line
    Lex {
        /// Source file to tokenize
        #[arg(value_name = "FILE")]
        file: PathBuf,
        #[command(flatten)]
        options: LexOptions,
        /// Prefix each token with its line:column
        #[arg(long)]
        spans: bool,
    },

    /// Parse a file and print its syntax tree
    Parse {
        /// Source file to parse
        #[arg(value_name = "FILE")]
        file: PathBuf,
        #[command(flatten)]
        options: LexOptions,
    },

    /// List keyword phrases in the order the tokenizer tries them
    Keywords,
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command and return result.
fn execute(cli: Cli) -> CliResult<ExitCode> {
    match cli.command {
        Some(Command::Lex { file, options, spans }) => commands::lex_file(&file, &options.config(), spans),
        Some(Command::Parse { file, options }) => commands::parse_file(&file, &options.config()),
        Some(Command::Keywords) => commands::list_keywords(),
        None => {
            // Default: print the token stream
            if let Some(file) = cli.file {
                commands::lex_file(&file, &LexerConfig::default(), false)
            } else {
                Err(CliError::failure("no input file given; run `vita --help` for usage"))
            }
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
