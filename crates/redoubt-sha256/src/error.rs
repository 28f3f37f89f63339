// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Whole-file hashing error
#[derive(Error, Debug)]
pub enum Sha256Error {
    /// The file could not be opened (missing, permission denied, ...)
    #[error("cannot open file: {source}")]
    OpenFailed {
        /// Path passed to [`hash_file`](crate::hash_file)
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Reading failed part way through; no digest was produced
    #[error("read error: {source}")]
    ReadFailed {
        /// Path passed to [`hash_file`](crate::hash_file)
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },
}

impl Sha256Error {
    /// Path of the file that failed
    pub fn path(&self) -> &Path {
        match self {
            Self::OpenFailed { path, .. } | Self::ReadFailed { path, .. } => path,
        }
    }

    /// Underlying I/O error
    pub fn io_error(&self) -> &io::Error {
        match self {
            Self::OpenFailed { source, .. } | Self::ReadFailed { source, .. } => source,
        }
    }
}
