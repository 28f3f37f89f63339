// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Hashing of readers and files on top of the streaming context

use std::fs::File;
use std::io::{self, ErrorKind, Read};
use std::path::Path;

use zeroize::Zeroizing;

use crate::context::Sha256;
use crate::digest::Digest;
use crate::error::Sha256Error;

/// Size of each read fed to [`Sha256::update`]
pub const READ_CHUNK_LEN: usize = 16 * 1024;

/// Hash everything `reader` yields until EOF.
///
/// The reader is not closed. Reads interrupted by a signal are retried; any
/// other error aborts without producing a digest.
///
/// ```rust
/// use redoubt_sha256::hash_reader;
///
/// let digest = hash_reader(&b"abc"[..]).unwrap();
///
/// assert_eq!(
///     digest.to_string(),
///     "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
/// );
/// ```
pub fn hash_reader<R: Read>(mut reader: R) -> io::Result<Digest> {
    let mut chunk = Zeroizing::new(vec![0u8; READ_CHUNK_LEN]);
    let mut hasher = Sha256::new();

    loop {
        match reader.read(chunk.as_mut_slice()) {
            Ok(0) => break,
            Ok(n) => hasher.update(&chunk[..n]),
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }

    Ok(hasher.finalize())
}

/// Hash the contents of the file at `path`.
///
/// Fails with [`Sha256Error::OpenFailed`] when the file cannot be opened and
/// with [`Sha256Error::ReadFailed`] when reading breaks off. The file is
/// closed before returning on every path.
pub fn hash_file<P: AsRef<Path>>(path: P) -> Result<Digest, Sha256Error> {
    let path = path.as_ref();

    let file = File::open(path).map_err(|source| Sha256Error::OpenFailed {
        path: path.to_path_buf(),
        source,
    })?;

    hash_reader(file).map_err(|source| Sha256Error::ReadFailed {
        path: path.to_path_buf(),
        source,
    })
}
