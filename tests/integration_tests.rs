//! Integration tests for the VitaLang frontend

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use vita::ast::{Expr, Statement};
use vita::lang::keywords::KeywordId;
use vita::{ParseError, TokenKind, lexer, parser};

/// Helper to run the full pipeline on a source file
fn parse_file(path: &Path) -> Result<vita::ast::Program, ParseError> {
    let source = fs::read_to_string(path).unwrap_or_else(|e| panic!("{}: {e}", path.display()));
    let tokens = lexer::tokenize(&source);
    parser::parse(&tokens)
}

fn fixtures(dir: &str) -> Vec<PathBuf> {
    let mut paths: Vec<PathBuf> = fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().path())
        .filter(|path| path.extension().is_some_and(|e| e == "vita"))
        .collect();
    paths.sort();
    paths
}

/// Test that all valid fixtures parse successfully
#[test]
fn test_valid_fixtures() {
    let paths = fixtures("tests/fixtures/valid");
    assert!(!paths.is_empty());
    for path in paths {
        let result = parse_file(&path);
        assert!(
            result.is_ok(),
            "Expected {} to parse, got: {}",
            path.display(),
            result.unwrap_err()
        );
    }
}

/// Test that invalid fixtures produce errors
#[test]
fn test_invalid_fixtures() {
    let paths = fixtures("tests/fixtures/invalid");
    assert!(!paths.is_empty());
    for path in paths {
        assert!(parse_file(&path).is_err(), "Expected {} to fail", path.display());
    }
}

#[test]
fn test_longest_match_keywords() {
    let tokens = lexer::tokenize("sweet but stout not not particularly");
    let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![TokenKind::Keyword(KeywordId::ElseIf), TokenKind::Keyword(KeywordId::False)]
    );
}

#[test]
fn test_indent_balance_on_fixtures() {
    for path in fixtures("tests/fixtures/valid") {
        let source = fs::read_to_string(&path).unwrap();
        let tokens = lexer::tokenize(&source);
        let indents = tokens.iter().filter(|t| t.kind == TokenKind::Indent).count();
        let dedents = tokens.iter().filter(|t| t.kind == TokenKind::Dedent).count();
        assert_eq!(indents, dedents, "unbalanced layout in {}", path.display());
    }
}

#[test]
fn test_literals_round_trip_to_source() {
    let path = Path::new("tests/fixtures/valid/assignments.vita");
    let source = fs::read_to_string(path).unwrap();
    let program = parse_file(path).unwrap();

    fn visit<'a>(expr: &'a Expr, out: &mut Vec<&'a vita::Token>) {
        match expr {
            Expr::Literal(lit) => out.push(&lit.token),
            Expr::Binary(bin) => {
                visit(&bin.left, out);
                visit(&bin.right, out);
            }
            Expr::Array(arr) => arr.elements.iter().for_each(|e| visit(e, out)),
        }
    }

    let mut literals = Vec::new();
    for stmt in &program.statements {
        if let Statement::Assignment(a) = &stmt.node {
            visit(&a.value, &mut literals);
        }
    }
    assert!(!literals.is_empty());
    for token in literals {
        let slice = &source[token.span.start..token.span.end];
        assert!(slice.ends_with(token.text.as_str()), "{slice:?} vs {:?}", token.text);
        if matches!(token.kind, TokenKind::Number | TokenKind::String) {
            assert_eq!(slice, token.text);
        }
    }
}

#[test]
fn test_error_positions_point_into_source() {
    let path = Path::new("tests/fixtures/invalid/inline_block.vita");
    let source = fs::read_to_string(path).unwrap();
    let err = parse_file(path).unwrap_err();
    let span = err.span();
    assert_eq!(&source[span.start..span.end], "word");
    assert_eq!(vita::diagnostics::line_col(&source, span.start).0, 1);
}

// ============================================================================
// Binary
// ============================================================================

fn vita_bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_vita"))
}

#[test]
fn test_cli_default_prints_tokens() {
    let output = vita_bin().arg("tests/fixtures/valid/loops.vita").output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.lines().any(|l| l == "For \"3\""));
    assert!(stdout.lines().any(|l| l == "Indent"));
}

#[test]
fn test_cli_parse_prints_tree() {
    let output = vita_bin()
        .args(["parse", "tests/fixtures/valid/control_flow.vita"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("if £tenants\n"));
}

#[test]
fn test_cli_parse_error_exits_nonzero() {
    let output = vita_bin()
        .args(["parse", "tests/fixtures/invalid/stray_word.vita"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("hello"));
}

#[test]
fn test_cli_missing_file_exits_nonzero() {
    let output = vita_bin().args(["lex", "tests/fixtures/nope.vita"]).output().unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Cannot access file"));
}
