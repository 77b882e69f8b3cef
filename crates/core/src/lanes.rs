//! Four-lane variant for 64-bit-wide elements
//!
//! `mum` assumes 32 useful bits per operand, so feeding it whole `i64`/`f64`
//! values would throw entropy away. The 64-bit output for wide elements
//! instead keeps four independent lanes, each with its own multiplier and
//! rotation, and only merges the leftover elements through `wow`.

use crate::flavor::Flavor;
use crate::params::{B0, B1, B2, B3, B4, B5, GROUP};
use crate::primitives::wow;
use crate::water::finish64;

/// Per-call lane state
struct Lanes {
    a: u64,
    b: u64,
    c: u64,
    d: u64,
}

impl Lanes {
    #[inline(always)]
    const fn new(seed: u64) -> Self {
        Self {
            a: seed.wrapping_add(B4),
            b: seed.wrapping_add(B3),
            c: seed.wrapping_add(B2),
            d: seed.wrapping_add(B1),
        }
    }

    /// Absorb one group of four elements and return the lane sum
    #[inline(always)]
    fn absorb(&mut self, x: [u64; GROUP]) -> u64 {
        self.a ^= x[0].wrapping_mul(B1);
        self.a = self.a.rotate_left(23).wrapping_mul(B3);
        self.b ^= x[1].wrapping_mul(B2);
        self.b = self.b.rotate_left(25).wrapping_mul(B4);
        self.c ^= x[2].wrapping_mul(B3);
        self.c = self.c.rotate_left(29).wrapping_mul(B5);
        self.d ^= x[3].wrapping_mul(B4);
        self.d = self.d.rotate_left(31).wrapping_mul(B1);
        self.a
            .wrapping_add(self.b)
            .wrapping_add(self.c)
            .wrapping_add(self.d)
    }
}

/// 64-bit lane hash of raw 64-bit element patterns
#[inline]
pub(crate) fn hash64<F, I>(flavor: &F, seq: I) -> u64
where
    F: Flavor,
    I: ExactSizeIterator<Item = u64>,
{
    let len = seq.len() as u64;
    let mut seq = seq.fuse();
    let mut seed = flavor.initial64();
    let mut lanes = Lanes::new(seed);

    for _ in 0..seq.len() / GROUP {
        let (Some(x0), Some(x1), Some(x2), Some(x3)) = (seq.next(), seq.next(), seq.next(), seq.next())
        else {
            break;
        };
        let sum = lanes.absorb([x0, x1, x2, x3]);
        seed = flavor.stir(seed, seed.wrapping_add(sum));
    }

    seed = seed.wrapping_add(B5);
    match (seq.next(), seq.next(), seq.next()) {
        (None, _, _) => {}
        (Some(x), None, _) => seed = flavor.stir(seed, wow(seed, B1 ^ x)),
        (Some(x), Some(y), None) => {
            seed = flavor.stir(seed, wow(seed.wrapping_add(x), B2.wrapping_add(y)));
        }
        (Some(x), Some(y), Some(z)) => {
            let merged = wow(seed.wrapping_add(x), B2.wrapping_add(y))
                ^ wow(seed.wrapping_add(z), seed ^ B3);
            seed = flavor.stir(seed, merged);
        }
    }

    finish64(seed, len ^ B0 ^ (seed >> 32))
}
