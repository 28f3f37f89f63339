// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Shared helpers for the unit tests

use sha2::Digest as _;

use crate::Digest;

/// Reference digest from the `sha2` crate
pub(crate) fn reference_sha256(data: &[u8]) -> Digest {
    let mut out = [0u8; 32];
    out.copy_from_slice(&sha2::Sha256::digest(data));
    Digest::new(out)
}

/// Deterministic, non-repeating-per-block test message
pub(crate) fn test_message(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i.wrapping_mul(31) ^ (i >> 8)) as u8).collect()
}
