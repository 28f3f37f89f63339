// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

// redoubt-sha256sum: print the SHA-256 digest of each file given.
//
// With no arguments, prompts for a single path on stdin.
// Digests go to stdout, progress and per-file errors to stderr.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result, bail};
use clap::Parser;

use redoubt_sha256::hash_file;

#[cfg(test)]
mod tests;

#[derive(Debug, Parser)]
#[command(name = "redoubt-sha256sum", version, about = "Print SHA-256 digests of files")]
struct Cli {
    /// Files to hash; prompts for one path when none are given
    paths: Vec<PathBuf>,

    /// Do not print progress messages
    #[arg(short, long)]
    quiet: bool,
}

/// How many paths were hashed and how many failed
#[derive(Debug, Default, PartialEq, Eq)]
struct Summary {
    hashed: usize,
    failed: usize,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let stderr = io::stderr();

    match run(&cli, &mut stdin.lock(), &mut stdout.lock(), &mut stderr.lock()) {
        Ok(summary) if summary.failed == 0 => ExitCode::SUCCESS,
        Ok(_) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("redoubt-sha256sum: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run<R, W, E>(cli: &Cli, input: &mut R, out: &mut W, err: &mut E) -> Result<Summary>
where
    R: BufRead,
    W: Write,
    E: Write,
{
    let mut summary = Summary::default();

    if cli.paths.is_empty() {
        let path = prompt_path(input, out)?;

        if !cli.quiet {
            writeln!(err, "Hashing {}", path.display())?;
        }
        hash_one(&path, out, err, &mut summary)?;

        return Ok(summary);
    }

    if !cli.quiet {
        writeln!(err, "Hashing...")?;
    }
    for path in &cli.paths {
        hash_one(path, out, err, &mut summary)?;
    }

    Ok(summary)
}

/// Hash one file and report it; a failing file is counted, not fatal.
fn hash_one<W, E>(path: &Path, out: &mut W, err: &mut E, summary: &mut Summary) -> Result<()>
where
    W: Write,
    E: Write,
{
    match hash_file(path) {
        Ok(digest) => {
            writeln!(out, "{digest}\n    {}", path.display()).context("failed to write digest")?;
            summary.hashed += 1;
        }
        Err(e) => {
            writeln!(err, "{}: {e}", path.display())?;
            summary.failed += 1;
        }
    }
    Ok(())
}

/// Ask for a path on `input`, stripping the line terminator.
fn prompt_path<R, W>(input: &mut R, out: &mut W) -> Result<PathBuf>
where
    R: BufRead,
    W: Write,
{
    write!(out, "File: ")?;
    out.flush().context("failed to flush prompt")?;

    let mut line = String::new();
    let read = input.read_line(&mut line).context("failed to read file path")?;
    if read == 0 {
        bail!("no file path given");
    }

    let path = line.strip_suffix('\n').unwrap_or(&line);
    let path = path.strip_suffix('\r').unwrap_or(path);

    Ok(PathBuf::from(path))
}
