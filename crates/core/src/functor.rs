//! Salted functor families
//!
//! Both families derive a pair of salts from one 64-bit seed:
//!
//! ```text
//! salt1 = seed + permute(seed)
//! salt2 = splitmix64(splitmix64(seed ^ B5)) | 1
//! ```
//!
//! - [`Yolk`] starts the 64-bit and 32-bit paths from the bare salts and
//!   stirs every accumulation step with `next ^ (salt1 * prev + salt2)`.
//! - [`Mist`] starts from the unsalted seeds mixed with the salts and stirs
//!   with the salts wired the other way round, `next ^ (salt2 * prev + salt1)`.
//!
//! Both depend on both salts at every step, so two functors with different
//! seeds are uncorrelated hash functions suitable for two-choice or cuckoo
//! tables, and a yolk never coincides with the mist of the same seed.
//!
//! Salts are never exposed or serialized. A hash computed by a functor can
//! only be reproduced by rebuilding the functor from the same seed or label,
//! which is what [`Yolk::seed`] / [`Mist::seed`] return.

use core::fmt;

use crate::flavor::Flavor;
use crate::flavor::sealed::Sealed;
use crate::params::{B5, PREDEFINED_LABELS, SEED_32, SEED_64};
use crate::primitives::{permute, splitmix64};

#[cfg(feature = "std")]
use crate::params::PREDEFINED_COUNT;
#[cfg(feature = "std")]
use std::sync::LazyLock;

/// Something a functor seed can be derived from
pub trait SeedSource {
    /// The 64-bit seed
    fn into_seed(self) -> u64;
}

impl SeedSource for u64 {
    #[inline]
    fn into_seed(self) -> u64 {
        self
    }
}

impl SeedSource for i64 {
    #[inline]
    fn into_seed(self) -> u64 {
        self as u64
    }
}

impl SeedSource for i32 {
    #[inline]
    fn into_seed(self) -> u64 {
        self as i64 as u64
    }
}

/// Labels seed with their unsalted 64-bit hash
impl SeedSource for &str {
    #[inline]
    fn into_seed(self) -> u64 {
        crate::hash64(self) as u64
    }
}

impl SeedSource for &alloc::string::String {
    #[inline]
    fn into_seed(self) -> u64 {
        self.as_str().into_seed()
    }
}

/// Seed plus the two salts derived from it
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
struct Salts {
    seed: u64,
    salt1: u64,
    salt2: u64,
}

impl Salts {
    const fn derive(seed: u64) -> Self {
        Self {
            seed,
            salt1: seed.wrapping_add(permute(seed)),
            salt2: splitmix64(splitmix64(seed ^ B5)) | 1,
        }
    }

    /// Seed of the functor `randomize` derives
    #[inline]
    const fn reseed(&self) -> u64 {
        permute(self.salt1) ^ self.salt2
    }
}

/// Salted flavor seeded from the bare salts
///
/// # Example
///
/// ```rust
/// use water_core::{Flavor, Yolk};
///
/// let data = [1, 2, 3, 4, 5];
/// assert_ne!(Yolk::new("alpha").hash64(&data), Yolk::new("beta").hash64(&data));
/// assert_eq!(Yolk::new("alpha").hash64(&data), Yolk::new("alpha").hash64(&data));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Yolk {
    salts: Salts,
}

impl Yolk {
    /// Build from a numeric seed or a label
    #[inline]
    pub fn new<S: SeedSource>(seed: S) -> Self {
        Self::from_seed(seed.into_seed())
    }

    /// Build from a raw 64-bit seed
    #[inline]
    pub const fn from_seed(seed: u64) -> Self {
        Self {
            salts: Salts::derive(seed),
        }
    }

    /// The seed this functor was built from
    #[inline]
    pub const fn seed(&self) -> u64 {
        self.salts.seed
    }

    /// Derive a new, unrelated functor; `self` is left untouched
    #[inline]
    #[must_use]
    pub const fn randomize(&self) -> Self {
        Self::from_seed(self.salts.reseed())
    }

    /// Predefined functor `index`, seeded from [`PREDEFINED_LABELS`]
    pub fn predefined(index: usize) -> Option<Self> {
        #[cfg(feature = "std")]
        {
            YOLKS.get(index).copied()
        }

        #[cfg(not(feature = "std"))]
        {
            PREDEFINED_LABELS.get(index).map(|label| Self::new(*label))
        }
    }
}

impl fmt::Debug for Yolk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Yolk")
            .field("seed", &format_args!("{:#018x}", self.salts.seed))
            .finish_non_exhaustive()
    }
}

impl Sealed for Yolk {
    #[inline(always)]
    fn initial64(&self) -> u64 {
        self.salts.salt1
    }

    #[inline(always)]
    fn initial32(&self) -> u64 {
        self.salts.salt2
    }

    #[inline(always)]
    fn stir(&self, prev: u64, next: u64) -> u64 {
        next ^ self.salts.salt1.wrapping_mul(prev).wrapping_add(self.salts.salt2)
    }
}

impl Flavor for Yolk {}

/// Fully salted flavor: salted seeds plus a salted stir on every step
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Mist {
    salts: Salts,
}

impl Mist {
    /// Build from a numeric seed or a label
    #[inline]
    pub fn new<S: SeedSource>(seed: S) -> Self {
        Self::from_seed(seed.into_seed())
    }

    /// Build from a raw 64-bit seed
    #[inline]
    pub const fn from_seed(seed: u64) -> Self {
        Self {
            salts: Salts::derive(seed),
        }
    }

    /// The seed this functor was built from
    #[inline]
    pub const fn seed(&self) -> u64 {
        self.salts.seed
    }

    /// Derive a new, unrelated functor; `self` is left untouched
    #[inline]
    #[must_use]
    pub const fn randomize(&self) -> Self {
        Self::from_seed(self.salts.reseed())
    }

    /// Predefined functor `index`, seeded from [`PREDEFINED_LABELS`]
    pub fn predefined(index: usize) -> Option<Self> {
        #[cfg(feature = "std")]
        {
            MISTS.get(index).copied()
        }

        #[cfg(not(feature = "std"))]
        {
            PREDEFINED_LABELS.get(index).map(|label| Self::new(*label))
        }
    }
}

impl fmt::Debug for Mist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mist")
            .field("seed", &format_args!("{:#018x}", self.salts.seed))
            .finish_non_exhaustive()
    }
}

impl Sealed for Mist {
    #[inline(always)]
    fn initial64(&self) -> u64 {
        SEED_64 ^ self.salts.salt1
    }

    #[inline(always)]
    fn initial32(&self) -> u64 {
        SEED_32 ^ self.salts.salt2
    }

    #[inline(always)]
    fn stir(&self, prev: u64, next: u64) -> u64 {
        next ^ self.salts.salt2.wrapping_mul(prev).wrapping_add(self.salts.salt1)
    }
}

impl Flavor for Mist {}

/// Predefined [`Yolk`] table, built on first use
#[cfg(feature = "std")]
pub static YOLKS: LazyLock<[Yolk; PREDEFINED_COUNT]> =
    LazyLock::new(|| PREDEFINED_LABELS.map(Yolk::new));

/// Predefined [`Mist`] table, built on first use
#[cfg(feature = "std")]
pub static MISTS: LazyLock<[Mist; PREDEFINED_COUNT]> =
    LazyLock::new(|| PREDEFINED_LABELS.map(Mist::new));
