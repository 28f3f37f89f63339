// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Word32 - 32-bit word wrapper with guaranteed zeroization on drop.
//!
//! All operations mutate in place so no intermediate value outlives the
//! call that produced it. The SHA-256 logical functions keep their own
//! temporaries and wipe them before returning.

use zeroize::Zeroize;

/// 32-bit word wrapper with guaranteed zeroization.
///
/// - `#[repr(transparent)]` keeps the layout of `u32`
/// - Drop asserts the word was wiped (debug builds), then wipes it anyway
/// - Arithmetic is modulo 2^32
#[derive(Default)]
#[repr(transparent)]
pub(crate) struct Word32(u32);

impl Word32 {
    #[inline(always)]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    #[inline(always)]
    pub const fn zero() -> Self {
        Self(0)
    }

    #[inline(always)]
    pub fn copy_from(&mut self, src: &Word32) {
        self.0 = src.0;
    }

    /// Load a big-endian word from exactly four bytes.
    #[inline(always)]
    pub fn load_be(&mut self, bytes: &[u8]) {
        debug_assert_eq!(bytes.len(), 4, "Word32::load_be expects 4 bytes");

        self.0 = bytes
            .iter()
            .fold(0u32, |acc, byte| (acc << 8) | u32::from(*byte));
    }

    /// Move the value out as big-endian bytes, leaving the word zeroized.
    #[inline(always)]
    pub fn take_be(&mut self, out: &mut [u8]) {
        debug_assert_eq!(out.len(), 4, "Word32::take_be expects 4 bytes");

        for (shift, byte) in [24u32, 16, 8, 0].into_iter().zip(out.iter_mut()) {
            *byte = (self.0 >> shift) as u8;
        }
        self.0.zeroize();
    }

    /// Move the value out, leaving the word zeroized.
    #[inline(always)]
    pub fn take(&mut self) -> u32 {
        core::mem::take(&mut self.0)
    }

    // ═══════════════════════════════════════════════════════════════════════════
    // Arithmetic and bitwise operations (in-place)
    // ═══════════════════════════════════════════════════════════════════════════

    /// self += rhs (mod 2^32)
    #[inline(always)]
    pub fn wrapping_add_assign(&mut self, rhs: &Word32) {
        self.0 = self.0.wrapping_add(rhs.0);
    }

    /// self += rhs (mod 2^32, raw value)
    #[inline(always)]
    pub fn wrapping_add_assign_val(&mut self, rhs: u32) {
        self.0 = self.0.wrapping_add(rhs);
    }

    #[inline(always)]
    pub fn xor_assign(&mut self, rhs: &Word32) {
        self.0 ^= rhs.0;
    }

    #[inline(always)]
    pub fn and_assign(&mut self, rhs: &Word32) {
        self.0 &= rhs.0;
    }

    #[inline(always)]
    pub fn not_assign(&mut self) {
        self.0 = !self.0;
    }

    // ═══════════════════════════════════════════════════════════════════════════
    // SHA-256 logical functions per FIPS 180-4 Section 4.1.2
    // Each writes `out` in full; `out` may hold anything on entry.
    // ═══════════════════════════════════════════════════════════════════════════

    /// Ch(x,y,z) = (x ∧ y) ⊕ (¬x ∧ z)
    #[inline(always)]
    pub fn set_ch(out: &mut Word32, x: &Word32, y: &Word32, z: &Word32) {
        // out = x & y
        out.copy_from(x);
        out.and_assign(y);

        // not_x_z = !x & z
        let mut not_x_z = Word32::zero();
        not_x_z.copy_from(x);
        not_x_z.not_assign();
        not_x_z.and_assign(z);

        out.xor_assign(&not_x_z);
        not_x_z.zeroize();
    }

    /// Maj(x,y,z) = (x ∧ y) ⊕ (x ∧ z) ⊕ (y ∧ z)
    ///
    /// Computed as (x & y) ^ (z & (x ^ y)), which is equivalent.
    #[inline(always)]
    pub fn set_maj(out: &mut Word32, x: &Word32, y: &Word32, z: &Word32) {
        // out = x & y
        out.copy_from(x);
        out.and_assign(y);

        // z_and_x_xor_y = z & (x ^ y)
        let mut z_and_x_xor_y = Word32::zero();
        z_and_x_xor_y.copy_from(x);
        z_and_x_xor_y.xor_assign(y);
        z_and_x_xor_y.and_assign(z);

        out.xor_assign(&z_and_x_xor_y);
        z_and_x_xor_y.zeroize();
    }

    /// Σ0(x) = ROTR^2(x) ⊕ ROTR^13(x) ⊕ ROTR^22(x)
    #[inline(always)]
    pub fn set_bsig0(out: &mut Word32, x: &Word32) {
        Self::set_rotations(out, x, [2, 13, 22]);
    }

    /// Σ1(x) = ROTR^6(x) ⊕ ROTR^11(x) ⊕ ROTR^25(x)
    #[inline(always)]
    pub fn set_bsig1(out: &mut Word32, x: &Word32) {
        Self::set_rotations(out, x, [6, 11, 25]);
    }

    /// σ0(x) = ROTR^7(x) ⊕ ROTR^18(x) ⊕ SHR^3(x)
    #[inline(always)]
    pub fn set_ssig0(out: &mut Word32, x: &Word32) {
        Self::set_rotations_shift(out, x, [7, 18], 3);
    }

    /// σ1(x) = ROTR^17(x) ⊕ ROTR^19(x) ⊕ SHR^10(x)
    #[inline(always)]
    pub fn set_ssig1(out: &mut Word32, x: &Word32) {
        Self::set_rotations_shift(out, x, [17, 19], 10);
    }

    /// out = ROTR^r0(x) ⊕ ROTR^r1(x) ⊕ ROTR^r2(x)
    #[inline(always)]
    fn set_rotations(out: &mut Word32, x: &Word32, rotations: [u32; 3]) {
        out.0 = 0;

        let mut v = Word32::zero();
        for n in rotations {
            v.0 = x.0.rotate_right(n);
            out.xor_assign(&v);
        }
        v.zeroize();
    }

    /// out = ROTR^r0(x) ⊕ ROTR^r1(x) ⊕ SHR^shift(x)
    #[inline(always)]
    fn set_rotations_shift(out: &mut Word32, x: &Word32, rotations: [u32; 2], shift: u32) {
        out.0 = x.0 >> shift;

        let mut v = Word32::zero();
        for n in rotations {
            v.0 = x.0.rotate_right(n);
            out.xor_assign(&v);
        }
        v.zeroize();
    }

    #[inline(always)]
    pub fn is_zeroized(&self) -> bool {
        self.0 == 0
    }

    /// Inner value for assertions only
    #[cfg(test)]
    #[inline(always)]
    pub(crate) fn as_u32(&self) -> u32 {
        self.0
    }
}

impl Zeroize for Word32 {
    fn zeroize(&mut self) {
        self.0.zeroize();
    }
}

impl Drop for Word32 {
    fn drop(&mut self) {
        debug_assert!(self.is_zeroized(), "Word32 dropped without zeroization");
        self.zeroize();
    }
}
