//! Element canonicalization and the composition rule
//!
//! Every element kind maps to a `u64` the mixers read. Primitive kinds are
//! widened (signed kinds sign-extend), floats contribute their raw IEEE-754
//! bits, and bools one of two odd sentinels. Nothing here branches on NaN.
//!
//! Composite elements (nested slices, strings, optional elements) are first
//! reduced to their own 32-bit hash under the same flavor, and that hash is
//! fed to the outer sequence as if it were an `i32`. An absent element
//! contributes `-1`, so it never collides with an element that hashed to 0.

#[cfg(not(feature = "std"))]
use alloc::{string::String, vec::Vec};
use core::borrow::Borrow;

use crate::flavor::Flavor;
use crate::hashable::Hashable;
use crate::params::{FALSE_BITS, NULL_ELEMENT, TRUE_BITS};
use crate::{lanes, water};

/// A kind of element the engine can hash a sequence of
pub trait Element: Sized {
    /// Bit width two elements are packed at in the three-element tail
    const PACK_SHIFT: u32;

    /// Canonical value fed to the bulk core
    fn canon<F: Flavor>(&self, flavor: &F) -> u64;

    /// 32-bit hash of a sequence of this element kind
    #[inline]
    fn fold32<F, I>(seq: I, flavor: &F) -> u32
    where
        F: Flavor,
        I: ExactSizeIterator,
        I::Item: Borrow<Self>,
    {
        water::hash32(
            flavor,
            seq.map(|e| Borrow::<Self>::borrow(&e).canon(flavor)),
            Self::PACK_SHIFT,
        )
    }

    /// 64-bit hash of a sequence of this element kind
    #[inline]
    fn fold64<F, I>(seq: I, flavor: &F) -> u64
    where
        F: Flavor,
        I: ExactSizeIterator,
        I::Item: Borrow<Self>,
    {
        water::hash64(
            flavor,
            seq.map(|e| Borrow::<Self>::borrow(&e).canon(flavor)),
            Self::PACK_SHIFT,
        )
    }
}

macro_rules! narrow_element {
    ($($t:ty => $shift:expr, |$v:ident| $canon:expr;)*) => {$(
        impl Element for $t {
            const PACK_SHIFT: u32 = $shift;

            #[inline(always)]
            fn canon<F: Flavor>(&self, _: &F) -> u64 {
                let $v = *self;
                $canon
            }
        }
    )*};
}

narrow_element! {
    bool => 8, |v| if v { TRUE_BITS } else { FALSE_BITS };
    i8 => 8, |v| v as i64 as u64;
    u8 => 8, |v| v as u64;
    i16 => 16, |v| v as i64 as u64;
    u16 => 16, |v| v as u64;
    char => 16, |v| v as u64;
    i32 => 32, |v| v as i64 as u64;
    u32 => 32, |v| v as u64;
    f32 => 32, |v| v.to_bits() as i32 as i64 as u64;
}

/// Fold a 64-bit pattern to the signed 32-bit value the 32-bit path reads
#[inline(always)]
const fn fold_wide(bits: u64) -> u64 {
    (bits ^ (bits >> 32)) as u32 as i32 as i64 as u64
}

// Wide kinds: folded into the bulk core for 32-bit output, four lanes for 64-bit
macro_rules! wide_element {
    ($($t:ty => |$v:ident| $bits:expr;)*) => {$(
        impl Element for $t {
            const PACK_SHIFT: u32 = 32;

            #[inline(always)]
            fn canon<F: Flavor>(&self, _: &F) -> u64 {
                let $v = *self;
                fold_wide($bits)
            }

            #[inline]
            fn fold64<F, I>(seq: I, flavor: &F) -> u64
            where
                F: Flavor,
                I: ExactSizeIterator,
                I::Item: Borrow<Self>,
            {
                lanes::hash64(flavor, seq.map(|e| {
                    let $v = *Borrow::<Self>::borrow(&e);
                    $bits
                }))
            }
        }
    )*};
}

wide_element! {
    i64 => |v| v as u64;
    u64 => |v| v;
    f64 => |v| v.to_bits();
}

/// Widen a nested element's 32-bit hash the way an `i32` element is widened
#[inline(always)]
const fn element_hash(hash: u32) -> u64 {
    hash as i32 as i64 as u64
}

impl<H: Hashable + ?Sized> Element for &H {
    const PACK_SHIFT: u32 = 32;

    #[inline]
    fn canon<F: Flavor>(&self, flavor: &F) -> u64 {
        element_hash((**self).hash32_with(flavor))
    }
}

impl<T: Element> Element for Vec<T> {
    const PACK_SHIFT: u32 = 32;

    #[inline]
    fn canon<F: Flavor>(&self, flavor: &F) -> u64 {
        element_hash(self.hash32_with(flavor))
    }
}

impl<T: Element, const N: usize> Element for [T; N] {
    const PACK_SHIFT: u32 = 32;

    #[inline]
    fn canon<F: Flavor>(&self, flavor: &F) -> u64 {
        element_hash(self.hash32_with(flavor))
    }
}

impl Element for String {
    const PACK_SHIFT: u32 = 32;

    #[inline]
    fn canon<F: Flavor>(&self, flavor: &F) -> u64 {
        element_hash(self.hash32_with(flavor))
    }
}

impl<H: Hashable> Element for Option<H> {
    const PACK_SHIFT: u32 = 32;

    #[inline]
    fn canon<F: Flavor>(&self, flavor: &F) -> u64 {
        match self {
            Some(inner) => element_hash(inner.hash32_with(flavor)),
            None => NULL_ELEMENT,
        }
    }
}

/// Opaque-object fallback for element types with no canonical form
///
/// The wrapped value is reduced with the standard library's
/// [`DefaultHasher`](std::collections::hash_map::DefaultHasher) and then
/// treated like any nested element. That hasher is deterministic within one
/// toolchain, but its output may change between Rust releases, so hashes of
/// `Opaque` values are not portable across builds the way every other input
/// kind is. Prefer a real [`Element`] or [`Hashable`] impl when the hash
/// leaves the process.
#[cfg(feature = "std")]
#[derive(Debug, Clone, Copy)]
pub struct Opaque<'a, T: ?Sized>(pub &'a T);

#[cfg(feature = "std")]
impl<T: std::hash::Hash + ?Sized> Opaque<'_, T> {
    fn identity(&self) -> u64 {
        use std::hash::Hasher;

        let mut hasher = std::collections::hash_map::DefaultHasher::new();
        self.0.hash(&mut hasher);
        hasher.finish()
    }
}

#[cfg(feature = "std")]
impl<T: std::hash::Hash + ?Sized> Element for Opaque<'_, T> {
    const PACK_SHIFT: u32 = 32;

    #[inline]
    fn canon<F: Flavor>(&self, _: &F) -> u64 {
        fold_wide(self.identity())
    }
}

#[cfg(feature = "std")]
impl<T: std::hash::Hash + ?Sized> Hashable for Opaque<'_, T> {
    #[inline]
    fn hash32_with<F: Flavor>(&self, flavor: &F) -> u32 {
        Self::fold32(core::iter::once(self), flavor)
    }

    #[inline]
    fn hash64_with<F: Flavor>(&self, flavor: &F) -> u64 {
        Self::fold64(core::iter::once(self), flavor)
    }
}
