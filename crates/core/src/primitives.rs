//! Mixing primitives for the Water engine
//!
//! `mum` and `wow` are the two multiply-fold rounds every path bottoms out
//! in. `permute` and `splitmix64` only run when a salted functor is built.

use crate::params::B2;

/// One multiply-and-uniform-mix round
///
/// Operands are expected to carry their useful entropy in the low 32 bits.
/// The product's high half is subtracted back onto the low half, which is
/// the part the rest of the algorithm reads.
#[inline(always)]
pub const fn mum(a: u64, b: u64) -> u64 {
    let n = a.wrapping_mul(b);
    n.wrapping_sub(n >> 32)
}

/// Cross-rotate multiply with an xor fold
///
/// Stronger than [`mum`] for operands that use all 64 bits; only the lane
/// algorithm's tail needs it.
#[inline(always)]
pub const fn wow(a: u64, b: u64) -> u64 {
    let n = (a ^ b.rotate_left(39)).wrapping_mul(b ^ a.rotate_left(39));
    n ^ (n >> 32)
}

/// Single xor-rotate-multiply-xor avalanche round, used to derive salts
#[inline]
pub const fn permute(x: u64) -> u64 {
    let z = (x ^ x.rotate_left(41) ^ x.rotate_left(17)).wrapping_mul(B2);
    z ^ (z >> 28)
}

/// SplitMix64 output function (golden-ratio increment, two xorshift-multiply rounds)
#[inline]
pub const fn splitmix64(x: u64) -> u64 {
    let mut z = x.wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}
