// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Streaming SHA-256 per FIPS 180-4 Sections 5.1.1 and 6.2

use core::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::compress::Compressor;
use crate::consts::{BLOCK_LEN, H0, HASH_LEN, LENGTH_OFFSET};
use crate::digest::Digest;
use crate::word32::Word32;

/// Streaming SHA-256 context.
///
/// Accepts input in arbitrarily sized pieces through [`update`](Self::update);
/// the digest only depends on the concatenation of those pieces.
///
/// [`finalize`](Self::finalize) consumes the context, so a finished context
/// cannot be fed again by accident. Every field (state, partial block,
/// length counter and compression scratch) is zeroized on drop.
///
/// # Example
///
/// ```rust
/// use redoubt_sha256::Sha256;
///
/// let mut hasher = Sha256::new();
/// hasher.update(b"a");
/// hasher.update(b"bc");
///
/// let digest = hasher.finalize();
///
/// assert_eq!(
///     digest.to_string(),
///     "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
/// );
/// ```
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct Sha256 {
    // Hash state H(i)
    h: [Word32; 8],

    // Tail of the message not yet forming a full block
    buffer: [u8; BLOCK_LEN],
    buffer_len: usize,

    // Message length in bytes since the last reset
    total_len: u64,

    compressor: Compressor,
}

impl Sha256 {
    /// Create a context initialized with H(0).
    pub fn new() -> Self {
        Self {
            h: initial_state(),
            buffer: [0u8; BLOCK_LEN],
            buffer_len: 0,
            total_len: 0,
            compressor: Compressor::new(),
        }
    }

    /// Append `data` to the message.
    ///
    /// Whole blocks are compressed straight from `data` whenever the internal
    /// buffer is empty; only a partial tail (< 64 bytes) is copied.
    pub fn update(&mut self, data: &[u8]) {
        self.total_len = self.total_len.wrapping_add(data.len() as u64);

        let mut rest = data;

        // Top up a partially filled buffer first
        if self.buffer_len > 0 {
            let copy_len = core::cmp::min(BLOCK_LEN - self.buffer_len, rest.len());
            let (head, tail) = rest.split_at(copy_len);

            self.buffer[self.buffer_len..self.buffer_len + copy_len].copy_from_slice(head);
            self.buffer_len += copy_len;
            rest = tail;

            if self.buffer_len < BLOCK_LEN {
                return;
            }

            self.compress_buffer();
        }

        // Full blocks straight from the caller's slice
        while let Some((block, tail)) = rest.split_first_chunk::<BLOCK_LEN>() {
            self.compressor.compress(&mut self.h, block);
            rest = tail;
        }

        // Buffer the remainder
        self.buffer[..rest.len()].copy_from_slice(rest);
        self.buffer_len = rest.len();
    }

    /// Pad the message, process the final block(s) and return the digest.
    ///
    /// The context is consumed and its memory zeroized.
    pub fn finalize(mut self) -> Digest {
        self.finish()
    }

    /// Like [`finalize`](Self::finalize), but leaves `self` wiped and
    /// re-initialized for the next message.
    pub fn finalize_reset(&mut self) -> Digest {
        let digest = self.finish();
        self.reset();
        digest
    }

    /// Wipe the context and re-initialize it with H(0).
    pub fn reset(&mut self) {
        self.zeroize();
        self.h = initial_state();
    }

    /// Padding per FIPS 180-4 Section 5.1.1, then output H(N).
    ///
    /// Leaves the hash state zeroized; callers must reset or drop.
    fn finish(&mut self) -> Digest {
        let bit_len = encode_bit_len(self.total_len);

        // Append the '1' bit (0x80)
        self.buffer[self.buffer_len] = 0x80;
        self.buffer_len += 1;

        // No room left for the 64-bit length: pad this block out and start a new one
        if self.buffer_len > LENGTH_OFFSET {
            self.buffer[self.buffer_len..].fill(0);
            self.compress_buffer();
        }

        self.buffer[self.buffer_len..LENGTH_OFFSET].fill(0);
        self.buffer[LENGTH_OFFSET..].copy_from_slice(&bit_len);
        self.compress_buffer();

        let mut out = [0u8; HASH_LEN];
        for (hv, bytes) in self.h.iter_mut().zip(out.chunks_exact_mut(4)) {
            hv.take_be(bytes);
        }

        Digest::new(out)
    }

    /// Compress the (full) internal buffer and clear it
    fn compress_buffer(&mut self) {
        self.compressor.compress(&mut self.h, &self.buffer);
        self.buffer.zeroize();
        self.buffer_len = 0;
    }

    #[cfg(test)]
    pub(crate) fn buffer_len(&self) -> usize {
        self.buffer_len
    }

    #[cfg(test)]
    pub(crate) fn total_len(&self) -> u64 {
        self.total_len
    }

    #[cfg(test)]
    pub(crate) fn state_words(&self) -> [u32; 8] {
        core::array::from_fn(|i| self.h[i].as_u32())
    }

    #[cfg(test)]
    pub(crate) fn buffer(&self) -> &[u8; BLOCK_LEN] {
        &self.buffer
    }
}

impl Default for Sha256 {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Sha256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sha256")
            .field("buffer_len", &self.buffer_len)
            .field("total_len", &self.total_len)
            .finish_non_exhaustive()
    }
}

fn initial_state() -> [Word32; 8] {
    H0.map(Word32::new)
}

/// Message length in bits as the big-endian 64-bit trailer.
///
/// FIPS 180-4 defines the length modulo 2^64 bits.
pub(crate) fn encode_bit_len(total_len: u64) -> [u8; 8] {
    total_len.wrapping_mul(8).to_be_bytes()
}

/// One-shot SHA-256 of `data`.
///
/// ```rust
/// use redoubt_sha256::sha256;
///
/// assert_eq!(
///     sha256(b"").to_string(),
///     "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
/// );
/// ```
pub fn sha256(data: &[u8]) -> Digest {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize()
}
