//! Bulk hash core
//!
//! Consumes a canonicalized element sequence four elements at a time:
//!
//! ```text
//! seed = mum(mum(s[i-3] ^ B1, s[i-2] ^ B2) + seed, mum(s[i-1] ^ B3, s[i] ^ B4))
//! ```
//!
//! then folds the last `n mod 4` elements through one of four tail branches
//! and finalizes with the element count. The tree shape of the step is
//! neither associative nor commutative, so element order is part of the
//! fingerprint.
//!
//! The 32-bit and 64-bit outputs start from different seeds and finish
//! differently; neither is derivable from the other.

use crate::flavor::Flavor;
use crate::params::{B0, B1, B2, B3, B4, GROUP};
use crate::primitives::mum;

/// Run the bulk loop and the tail branch, returning the unfinalized seed
///
/// `shift` is the bit width two tail elements are packed at in the
/// three-element remainder branch.
#[inline]
fn accumulate<F, I>(flavor: &F, mut seed: u64, seq: I, shift: u32) -> u64
where
    F: Flavor,
    I: ExactSizeIterator<Item = u64>,
{
    let mut seq = seq.fuse();

    for _ in 0..seq.len() / GROUP {
        let (Some(a), Some(b), Some(c), Some(d)) = (seq.next(), seq.next(), seq.next(), seq.next())
        else {
            break;
        };
        let next = mum(mum(a ^ B1, b ^ B2).wrapping_add(seed), mum(c ^ B3, d ^ B4));
        seed = flavor.stir(seed, next);
    }

    // Empty tail still mixes, so an empty input never hashes to a constant zero
    let tail = match (seq.next(), seq.next(), seq.next()) {
        (None, _, _) => mum(B1 ^ seed, B4.wrapping_add(seed)),
        (Some(x), None, _) => mum(seed ^ B3, B4 ^ x),
        (Some(x), Some(y), None) => mum(seed ^ x, B3 ^ y),
        (Some(x), Some(y), Some(z)) => mum(seed ^ x ^ (y << shift), B1 ^ z),
    };
    flavor.stir(seed, tail)
}

/// Fold-mix finalizer of the 64-bit output
#[inline(always)]
pub(crate) const fn finish64(seed: u64, tag: u64) -> u64 {
    let t = (seed ^ (seed << 16)).wrapping_mul(tag);
    t.wrapping_sub(t >> 31).wrapping_add(t << 33)
}

/// Finalizer of the 32-bit output: one more `mum`, read from the low half
#[inline(always)]
pub(crate) const fn finish32(seed: u64, tag: u64) -> u32 {
    mum(seed ^ (seed << 16), tag) as u32
}

/// 64-bit bulk hash of a canonical sequence
#[inline]
pub(crate) fn hash64<F, I>(flavor: &F, seq: I, shift: u32) -> u64
where
    F: Flavor,
    I: ExactSizeIterator<Item = u64>,
{
    let len = seq.len() as u64;
    let seed = accumulate(flavor, flavor.initial64(), seq, shift);
    finish64(seed, len ^ B0)
}

/// 32-bit bulk hash of a canonical sequence
#[inline]
pub(crate) fn hash32<F, I>(flavor: &F, seq: I, shift: u32) -> u32
where
    F: Flavor,
    I: ExactSizeIterator<Item = u64>,
{
    let len = seq.len() as u64;
    let seed = accumulate(flavor, flavor.initial32(), seq, shift);
    finish32(seed, len ^ B0)
}
