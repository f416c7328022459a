//! Layering guardrails between the workspace crates.
//!
//! - `vita_core` holds only vocabulary tables and takes no dependencies at all.
//! - `vita_syntax` is a library: CLI parsing and subscriber setup belong to the `vita` driver.
//!
//! These tests scan the member manifests' `[dependencies]` tables.

/// Dependency names listed in the `[dependencies]` table of a manifest.
fn main_dependencies(manifest: &str) -> Vec<String> {
    let mut in_dependencies = false;
    let mut names = Vec::new();

    for raw_line in manifest.lines() {
        let line = raw_line.trim();
        // Track when we enter/exit the `[dependencies]` table.
        if line.starts_with('[') {
            in_dependencies = line == "[dependencies]";
            continue;
        }
        if !in_dependencies || line.is_empty() || line.starts_with('#') {
            continue;
        }
        // Strip inline comments for robustness.
        let line_no_comment = line.split('#').next().unwrap_or("").trim();
        if let Some((name, _)) = line_no_comment.split_once('=') {
            names.push(name.trim().to_string());
        }
    }
    names
}

#[test]
fn core_has_no_dependencies() {
    let deps = main_dependencies(include_str!("../crates/vita_core/Cargo.toml"));
    assert!(deps.is_empty(), "vita_core must stay dependency-free, found {deps:?}");
}

#[test]
fn syntax_does_not_depend_on_driver_crates() {
    let deps = main_dependencies(include_str!("../crates/vita_syntax/Cargo.toml"));
    for forbidden in ["clap", "tracing-subscriber", "vita"] {
        assert!(
            !deps.iter().any(|d| d == forbidden),
            "`{forbidden}` must not appear in vita_syntax [dependencies]"
        );
    }
    assert!(deps.iter().any(|d| d == "vita_core"));
}

#[test]
fn syntax_leaves_report_rendering_to_the_driver() {
    let manifest = include_str!("../crates/vita_syntax/Cargo.toml");
    let miette = manifest
        .lines()
        .find(|line| line.trim_start().starts_with("miette"))
        .unwrap_or_default();
    assert!(!miette.contains("fancy"), "graphical miette reports belong to the `vita` package");
    assert!(!manifest.contains("[dev-dependencies]"), "vita_syntax tests use only the standard harness");
}
