//! Hash flavors
//!
//! A flavor fixes the initial seeds and the per-step stir of the engine.
//! [`Water`] is the unsalted flavor behind the crate-level functions;
//! [`Yolk`](crate::Yolk) and [`Mist`](crate::Mist) are the salted families.
//! Every hash operation is a provided method of [`Flavor`], so all flavors
//! share one algorithm and differ only in what they feed it.

use crate::element::Element;
use crate::hashable::{Hashable, Ranged};
use crate::params::{SEED_32, SEED_64};

pub(crate) mod sealed {
    /// Engine hooks; unreachable from outside the crate so salts stay private
    pub trait Sealed {
        /// Initial seed of the 64-bit paths
        fn initial64(&self) -> u64;

        /// Initial seed of the 32-bit paths
        fn initial32(&self) -> u64;

        /// Combine an accumulation step's result with the seed it started from
        #[inline(always)]
        fn stir(&self, _prev: u64, next: u64) -> u64 {
            next
        }
    }
}

/// A member of the Water hash family
///
/// Implemented by [`Water`], [`Yolk`](crate::Yolk) and [`Mist`](crate::Mist).
/// The trait is sealed.
pub trait Flavor: sealed::Sealed {
    /// 32-bit hash of `data`
    #[inline]
    fn hash<H: Hashable + ?Sized>(&self, data: &H) -> i32
    where
        Self: Sized,
    {
        data.hash32_with(self) as i32
    }

    /// 64-bit hash of `data`
    #[inline]
    fn hash64<H: Hashable + ?Sized>(&self, data: &H) -> i64
    where
        Self: Sized,
    {
        data.hash64_with(self) as i64
    }

    /// 32-bit hash of the elements in `[start, end)`
    ///
    /// `end` is clamped to the length; an empty or inverted range returns 0.
    #[inline]
    fn hash_range<R: Ranged + ?Sized>(&self, data: &R, start: usize, end: usize) -> i32
    where
        Self: Sized,
    {
        data.range_hash32_with(start, end, 1, self) as i32
    }

    /// 64-bit hash of the elements in `[start, end)`
    #[inline]
    fn hash64_range<R: Ranged + ?Sized>(&self, data: &R, start: usize, end: usize) -> i64
    where
        Self: Sized,
    {
        data.range_hash64_with(start, end, 1, self) as i64
    }

    /// 32-bit hash of every `step`-th element in `[start, end)`
    ///
    /// Returns 0 for an empty range or a zero step.
    #[inline]
    fn hash_strided<R: Ranged + ?Sized>(
        &self,
        data: &R,
        start: usize,
        end: usize,
        step: usize,
    ) -> i32
    where
        Self: Sized,
    {
        data.range_hash32_with(start, end, step, self) as i32
    }

    /// 64-bit hash of every `step`-th element in `[start, end)`
    #[inline]
    fn hash64_strided<R: Ranged + ?Sized>(
        &self,
        data: &R,
        start: usize,
        end: usize,
        step: usize,
    ) -> i64
    where
        Self: Sized,
    {
        data.range_hash64_with(start, end, step, self) as i64
    }

    /// 32-bit hash of a collection, e.g. a list or ordered set of strings
    ///
    /// Matches [`Flavor::hash`] of a slice holding the same elements in
    /// iteration order.
    #[inline]
    fn hash_iter<I>(&self, items: I) -> i32
    where
        Self: Sized,
        I: IntoIterator,
        I::IntoIter: ExactSizeIterator,
        I::Item: Element,
    {
        <I::Item as Element>::fold32(items.into_iter(), self) as i32
    }

    /// 64-bit hash of a collection
    #[inline]
    fn hash64_iter<I>(&self, items: I) -> i64
    where
        Self: Sized,
        I: IntoIterator,
        I::IntoIter: ExactSizeIterator,
        I::Item: Element,
    {
        <I::Item as Element>::fold64(items.into_iter(), self) as i64
    }
}

/// The unsalted engine
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Water;

impl sealed::Sealed for Water {
    #[inline(always)]
    fn initial64(&self) -> u64 {
        SEED_64
    }

    #[inline(always)]
    fn initial32(&self) -> u64 {
        SEED_32
    }
}

impl Flavor for Water {}
