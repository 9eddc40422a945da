//! Hygiene — enforces coding standards at test time
//!
//! These tests scan `src/` for antipatterns that violate project standards.
//! Each pattern has a budget (ideally zero) that never grows. A second group
//! keeps the form core free of browser and UI framework types.
#![allow(clippy::absurd_extreme_comparisons)]

use std::fs;
use std::path::Path;

/// Modules that must compile and test without a browser.
const CORE_MODULES: &[&str] = &["src/form.rs", "src/mode.rs", "src/file.rs", "src/validate.rs", "src/config.rs"];

struct SourceFile {
    path: String,
    content: String,
}

/// Production `.rs` files under `src/`, excluding `*_test.rs`.
fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect_rs_files(Path::new("src"), &mut files);
    files
}

fn collect_rs_files(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_rs_files(&path, out);
        } else if path.extension().is_some_and(|e| e == "rs") {
            let path_str = path.to_string_lossy().replace('\\', "/");
            if path_str.ends_with("_test.rs") {
                continue;
            }
            if let Ok(content) = fs::read_to_string(&path) {
                out.push(SourceFile { path: path_str, content });
            }
        }
    }
}

fn hits(files: &[SourceFile], pattern: &str) -> Vec<(String, usize)> {
    files
        .iter()
        .filter_map(|file| {
            let count = file.content.lines().filter(|line| line.contains(pattern)).count();
            (count > 0).then(|| (file.path.clone(), count))
        })
        .collect()
}

fn assert_budget(pattern: &str, max: usize) {
    let found = hits(&source_files(), pattern);
    let count: usize = found.iter().map(|(_, c)| c).sum();
    let detail = found
        .iter()
        .map(|(path, c)| format!("  {path}: {c}"))
        .collect::<Vec<_>>()
        .join("\n");
    assert!(count <= max, "`{pattern}` budget exceeded: found {count}, max {max}.\n{detail}");
}

// =============================================================
// Panics
// =============================================================

#[test]
fn unwrap_budget() {
    assert_budget(".unwrap()", 0);
}

#[test]
fn expect_budget() {
    assert_budget(".expect(", 0);
}

#[test]
fn panic_budget() {
    assert_budget("panic!(", 0);
}

#[test]
fn unreachable_budget() {
    assert_budget("unreachable!(", 0);
}

#[test]
fn todo_budget() {
    assert_budget("todo!(", 0);
    assert_budget("unimplemented!(", 0);
}

// =============================================================
// Silent loss
// =============================================================

#[test]
fn silent_discard_budget() {
    assert_budget("let _ =", 0);
}

#[test]
fn dot_ok_budget() {
    assert_budget(".ok()", 0);
}

#[test]
fn allow_dead_code_budget() {
    assert_budget("#[allow(dead_code)]", 0);
}

// =============================================================
// Core boundary
// =============================================================

#[test]
fn sources_were_found() {
    let files = source_files();
    for core in CORE_MODULES {
        assert!(files.iter().any(|f| f.path.ends_with(core)), "{core} not scanned");
    }
}

#[test]
fn core_modules_stay_browser_free() {
    let offenders: Vec<_> = source_files()
        .into_iter()
        .filter(|f| CORE_MODULES.iter().any(|core| f.path.ends_with(core)))
        .filter(|f| f.content.contains("web_sys") || f.content.contains("leptos"))
        .map(|f| f.path)
        .collect();
    assert!(offenders.is_empty(), "browser types leaked into core modules: {offenders:?}");
}
