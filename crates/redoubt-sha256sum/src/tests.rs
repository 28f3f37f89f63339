// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::fs;
use std::io::Cursor;
use std::path::PathBuf;

use clap::Parser;

use super::{Cli, Summary, prompt_path, run};

const EMPTY_HEX: &str = "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";
const ABC_HEX: &str = "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad";

struct TempFile(PathBuf);

impl TempFile {
    fn with_contents(name: &str, contents: &[u8]) -> Self {
        let path = std::env::temp_dir().join(format!(
            "redoubt-sha256sum-{}-{}",
            std::process::id(),
            name
        ));
        fs::write(&path, contents).expect("Failed to write temp file");
        Self(path)
    }

    fn display(&self) -> String {
        self.0.display().to_string()
    }
}

impl Drop for TempFile {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.0);
    }
}

fn missing_path() -> String {
    std::env::temp_dir()
        .join(format!("redoubt-sha256sum-{}-missing", std::process::id()))
        .display()
        .to_string()
}

/// Run the CLI in-process, returning (summary, stdout, stderr)
fn run_with(args: &[&str], stdin: &str) -> (Summary, String, String) {
    let cli = Cli::try_parse_from(args.iter().copied()).expect("Failed to parse args");
    let mut input = Cursor::new(stdin.as_bytes().to_vec());
    let mut out = Vec::new();
    let mut err = Vec::new();

    let summary = run(&cli, &mut input, &mut out, &mut err).expect("run(..) failed");

    (
        summary,
        String::from_utf8(out).expect("stdout is utf-8"),
        String::from_utf8(err).expect("stderr is utf-8"),
    )
}

#[test]
fn hashes_each_path_in_order() {
    let a = TempFile::with_contents("order-a", b"abc");
    let b = TempFile::with_contents("order-b", b"");

    let (summary, out, err) =
        run_with(&["redoubt-sha256sum", &a.display(), &b.display()], "");

    assert_eq!(summary, Summary { hashed: 2, failed: 0 });
    assert_eq!(
        out,
        format!("{ABC_HEX}\n    {}\n{EMPTY_HEX}\n    {}\n", a.display(), b.display())
    );
    assert_eq!(err, "Hashing...\n");
}

#[test]
fn failing_path_is_reported_and_skipped() {
    let good = TempFile::with_contents("skip-good", b"abc");
    let missing = missing_path();

    let (summary, out, err) =
        run_with(&["redoubt-sha256sum", &missing, &good.display()], "");

    assert_eq!(summary, Summary { hashed: 1, failed: 1 });
    assert_eq!(out, format!("{ABC_HEX}\n    {}\n", good.display()));
    assert!(
        err.contains(&format!("{missing}: cannot open file")),
        "stderr was: {err}"
    );
}

#[test]
fn quiet_suppresses_progress() {
    let file = TempFile::with_contents("quiet", b"abc");

    let (_, _, err) = run_with(&["redoubt-sha256sum", "-q", &file.display()], "");

    assert!(err.is_empty(), "stderr was: {err}");
}

#[test]
fn prompts_for_path_without_arguments() {
    let file = TempFile::with_contents("prompt", b"abc");

    let (summary, out, err) =
        run_with(&["redoubt-sha256sum"], &format!("{}\n", file.display()));

    assert_eq!(summary, Summary { hashed: 1, failed: 0 });
    assert_eq!(out, format!("File: {ABC_HEX}\n    {}\n", file.display()));
    assert_eq!(err, format!("Hashing {}\n", file.display()));
}

#[test]
fn prompt_strips_crlf() {
    let mut input = Cursor::new(b"some/path\r\n".to_vec());
    let mut out = Vec::new();

    let path = prompt_path(&mut input, &mut out).expect("Failed to prompt_path(..)");

    assert_eq!(path, PathBuf::from("some/path"));
    assert_eq!(out, b"File: ");
}

#[test]
fn prompt_accepts_path_without_newline() {
    let mut input = Cursor::new(b"last-line".to_vec());
    let mut out = Vec::new();

    let path = prompt_path(&mut input, &mut out).expect("Failed to prompt_path(..)");

    assert_eq!(path, PathBuf::from("last-line"));
}

#[test]
fn prompt_fails_on_eof() {
    let cli = Cli::try_parse_from(["redoubt-sha256sum"]).expect("Failed to parse args");
    let mut input = Cursor::new(Vec::new());
    let mut out = Vec::new();
    let mut err = Vec::new();

    let result = run(&cli, &mut input, &mut out, &mut err);

    let error = result.expect_err("EOF must be an error");
    assert_eq!(error.to_string(), "no file path given");
}

#[test]
fn cli_parses_flags_and_paths() {
    let cli = Cli::try_parse_from(["redoubt-sha256sum", "--quiet", "a", "b"])
        .expect("Failed to parse args");

    assert!(cli.quiet);
    assert_eq!(cli.paths, vec![PathBuf::from("a"), PathBuf::from("b")]);
}
