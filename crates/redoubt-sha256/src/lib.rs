// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Streaming SHA-256 with secure memory handling
//!
//! Implementation per FIPS 180-4. The state, the partial-block buffer and
//! every compression temporary are zeroized once they are no longer needed,
//! and a finalized context cannot be reused.
//!
//! - [`Sha256`]: init / update / finalize streaming context
//! - [`sha256`]: one-shot helper
//! - [`compress_block`]: the raw compression function
//! - [`hash_reader`], [`hash_file`]: I/O wrappers (`std` feature, on by default)
//!
//! References:
//! - FIPS 180-4: Secure Hash Standard (SHS)
//!   <https://nvlpubs.nist.gov/nistpubs/FIPS/NIST.FIPS.180-4.pdf>
//! - RFC 6234: US Secure Hash Algorithms (SHA and SHA-based HMAC and HKDF)
//!   <https://datatracker.ietf.org/doc/html/rfc6234>

#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![warn(missing_docs)]

#[cfg(test)]
mod tests;

mod compress;
mod consts;
mod context;
mod digest;
mod word32;

#[cfg(feature = "std")]
mod error;
#[cfg(feature = "std")]
mod file;

pub use compress::compress_block;
pub use consts::{BLOCK_LEN, H0, HASH_LEN, K256};
pub use context::{Sha256, sha256};
pub use digest::Digest;

#[cfg(feature = "std")]
pub use error::Sha256Error;
#[cfg(feature = "std")]
pub use file::{READ_CHUNK_LEN, hash_file, hash_reader};
