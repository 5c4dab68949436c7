#![allow(clippy::unwrap_used)]
//! Integration tests for the `license-header` CLI.
//!
//! These drive `cli::run_with` directly with parsed arguments and a capture
//! buffer, covering:
//! - Fix mode writes headers and exits 0
//! - Check mode exits 1 on missing headers, 0 when clean
//! - `--json` emits the report contract on the provided writer
//! - `--max-lines` reaches deeply buried markers
//! - Nonexistent path is a hard error

use std::fs;

use clap::Parser;
use license_header::{ATTRIBUTION_MARKER, has_marker};
use license_header_cli::cli::{Args, run_with};
use tempfile::TempDir;

fn parse(argv: &[&str]) -> Args {
    Args::try_parse_from(argv).unwrap()
}

#[test]
fn test_fix_mode_writes_headers() {
    let tmp = TempDir::new().unwrap();
    let js = tmp.path().join("app.js");
    fs::write(&js, "let a = 1;\n").unwrap();

    let args = parse(&["license-header", tmp.path().to_str().unwrap()]);
    let mut out = Vec::<u8>::new();
    let code = run_with(&args, &mut out).unwrap();

    assert_eq!(code, 0);
    assert!(has_marker(&fs::read_to_string(&js).unwrap()));
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("Headers added:   1"));
}

#[test]
fn test_check_mode_exit_codes() {
    let tmp = TempDir::new().unwrap();
    let css = tmp.path().join("style.css");
    fs::write(&css, "a {}\n").unwrap();

    let args = parse(&["license-header", "--check", tmp.path().to_str().unwrap()]);
    let mut out = Vec::<u8>::new();
    assert_eq!(run_with(&args, &mut out).unwrap(), 1);
    // Check mode must not have written anything.
    assert_eq!(fs::read_to_string(&css).unwrap(), "a {}\n");

    // Fix, then the same check passes.
    let fix_args = parse(&["license-header", tmp.path().to_str().unwrap()]);
    assert_eq!(run_with(&fix_args, &mut Vec::<u8>::new()).unwrap(), 0);
    assert_eq!(run_with(&args, &mut Vec::<u8>::new()).unwrap(), 0);
}

#[test]
fn test_json_output() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("page.html"), "<p>x</p>\n").unwrap();

    let args = parse(&[
        "license-header",
        "--check",
        "--json",
        tmp.path().to_str().unwrap(),
    ]);
    let mut out = Vec::<u8>::new();
    let code = run_with(&args, &mut out).unwrap();

    assert_eq!(code, 1);
    let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(json["scanned_files"], 1);
    assert_eq!(json["missing"][0]["family"], "Markup");
    assert!(!json["ok"].as_bool().unwrap());
}

#[test]
fn test_max_lines_flag() {
    let tmp = TempDir::new().unwrap();
    let css = tmp.path().join("deep.css");
    let mut content = "\n".repeat(150);
    content.push_str("/* ");
    content.push_str(ATTRIBUTION_MARKER);
    content.push_str(" */\n");
    fs::write(&css, &content).unwrap();

    // Default bound misses the buried marker.
    let args = parse(&["license-header", "--check", tmp.path().to_str().unwrap()]);
    assert_eq!(run_with(&args, &mut Vec::<u8>::new()).unwrap(), 1);

    // A deeper bound finds it.
    let args = parse(&[
        "license-header",
        "--check",
        "--max-lines",
        "200",
        tmp.path().to_str().unwrap(),
    ]);
    assert_eq!(run_with(&args, &mut Vec::<u8>::new()).unwrap(), 0);
}

#[test]
fn test_nonexistent_path_is_fatal() {
    let tmp = TempDir::new().unwrap();
    let missing = tmp.path().join("nope");
    let args = parse(&["license-header", missing.to_str().unwrap()]);
    let result = run_with(&args, &mut Vec::<u8>::new());
    assert!(result.is_err());
}
