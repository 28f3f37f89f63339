// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! SHA-256 compression function per FIPS 180-4 Section 6.2.2

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::consts::{BLOCK_LEN, K256};
use crate::word32::Word32;

/// Scratch memory for one block compression.
///
/// Kept outside the call stack so every intermediate value can be wiped,
/// and reused across blocks by the streaming context.
#[derive(Zeroize, ZeroizeOnDrop)]
pub(crate) struct Compressor {
    // Message schedule W[0..63]
    w: [Word32; 64],

    // Working variables a..h
    wv: [Word32; 8],

    // Temporaries
    t1: Word32,
    t2: Word32,
    scratch: Word32,
}

impl Compressor {
    pub(crate) fn new() -> Self {
        Self {
            w: core::array::from_fn(|_| Word32::zero()),
            wv: core::array::from_fn(|_| Word32::zero()),
            t1: Word32::zero(),
            t2: Word32::zero(),
            scratch: Word32::zero(),
        }
    }

    /// Fold one 512-bit block into the hash state `h`.
    ///
    /// Leaves every scratch word zeroized on return.
    pub(crate) fn compress(&mut self, h: &mut [Word32; 8], block: &[u8; BLOCK_LEN]) {
        for (wv, hv) in self.wv.iter_mut().zip(h.iter()) {
            wv.copy_from(hv);
        }

        self.expand_schedule(block);
        self.run_rounds();

        // H(i) = H(i-1) + working variables
        for (hv, wv) in h.iter_mut().zip(self.wv.iter_mut()) {
            hv.wrapping_add_assign_val(wv.take());
        }
    }

    /// Step 1: prepare the message schedule W[0..63]
    fn expand_schedule(&mut self, block: &[u8; BLOCK_LEN]) {
        // W[0..15] from the block, big-endian
        for (wt, bytes) in self.w[..16].iter_mut().zip(block.chunks_exact(4)) {
            wt.load_be(bytes);
        }

        // W[t] = σ1(W[t-2]) + W[t-7] + σ0(W[t-15]) + W[t-16]
        for t in 16..64 {
            let (prev, rest) = self.w.split_at_mut(t);
            let wt = &mut rest[0];

            wt.copy_from(&prev[t - 16]);
            wt.wrapping_add_assign(&prev[t - 7]);

            Word32::set_ssig1(&mut self.scratch, &prev[t - 2]);
            wt.wrapping_add_assign(&self.scratch);

            Word32::set_ssig0(&mut self.scratch, &prev[t - 15]);
            wt.wrapping_add_assign(&self.scratch);
        }

        self.scratch.zeroize();
    }

    /// Steps 2-3: 64 rounds over the working variables
    fn run_rounds(&mut self) {
        for (k, wt) in K256.iter().zip(self.w.iter_mut()) {
            // T1 = h + Σ1(e) + Ch(e,f,g) + K[t] + W[t]
            self.t1.copy_from(&self.wv[7]);

            Word32::set_bsig1(&mut self.scratch, &self.wv[4]);
            self.t1.wrapping_add_assign(&self.scratch);

            Word32::set_ch(&mut self.scratch, &self.wv[4], &self.wv[5], &self.wv[6]);
            self.t1.wrapping_add_assign(&self.scratch);

            self.t1.wrapping_add_assign_val(*k);
            self.t1.wrapping_add_assign(wt);

            // W[t] is consumed by this round
            wt.zeroize();

            // T2 = Σ0(a) + Maj(a,b,c)
            Word32::set_bsig0(&mut self.t2, &self.wv[0]);
            Word32::set_maj(&mut self.scratch, &self.wv[0], &self.wv[1], &self.wv[2]);
            self.t2.wrapping_add_assign(&self.scratch);

            // h=g, g=f, f=e, e=d, d=c, c=b, b=a; the old h lands in slot 0
            self.wv.rotate_right(1);

            // e = d + T1
            self.wv[4].wrapping_add_assign(&self.t1);

            // a = T1 + T2 (overwrites the old h)
            self.wv[0].copy_from(&self.t1);
            self.wv[0].wrapping_add_assign(&self.t2);

            self.t1.zeroize();
            self.t2.zeroize();
        }

        self.scratch.zeroize();
    }

    #[cfg(test)]
    pub(crate) fn is_zeroized(&self) -> bool {
        self.w.iter().chain(self.wv.iter()).all(Word32::is_zeroized)
            && self.t1.is_zeroized()
            && self.t2.is_zeroized()
            && self.scratch.is_zeroized()
    }
}

/// SHA-256 compression function (single block).
///
/// Updates `state` with one 512-bit message block. No padding is applied:
/// `block` is consumed exactly as given.
///
/// # Example
///
/// ```rust
/// use redoubt_sha256::{compress_block, H0};
///
/// // "abc" padded by hand: 0x80 terminator, zeros, bit length 24
/// let mut block = [0u8; 64];
/// block[..3].copy_from_slice(b"abc");
/// block[3] = 0x80;
/// block[63] = 0x18;
///
/// let mut state = H0;
/// compress_block(&mut state, &block);
///
/// assert_eq!(state[0], 0xba7816bf);
/// ```
pub fn compress_block(state: &mut [u32; 8], block: &[u8; BLOCK_LEN]) {
    let mut compressor = Compressor::new();
    let mut h: [Word32; 8] = core::array::from_fn(|i| Word32::new(state[i]));

    compressor.compress(&mut h, block);

    for (out, hv) in state.iter_mut().zip(h.iter_mut()) {
        *out = hv.take();
    }
}
