//! # Water Hash Engine
//!
//! Deterministic, cross-platform 32-bit and 64-bit fingerprints of primitive
//! slices, strings, nested sequences and collections.
//!
//! **v0.3.0** - Water (unsalted), Yolk (seeded) and Mist (salted) families.
//!
//! ## Features
//!
//! - **Stable**: output depends only on the input's elements, never on the
//!   platform, pointer width or float representation
//! - **Two widths**: the 32-bit and 64-bit hashes start from unrelated seeds,
//!   so they act as two independent hash functions over one key
//! - **Salted families**: [`Yolk`] and [`Mist`] turn one algorithm into a
//!   family of decorrelated functions, with a fixed [predefined table](YOLKS)
//! - **Not cryptographic**: built for hash tables and fingerprints, not for
//!   adversarial input
//!
//! ## Algorithm
//!
//! Elements are canonicalized to `u64`, consumed four at a time through a
//! two-level `mum` tree, the last `n mod 4` elements go through one of four
//! tail branches, and the count is folded in at the end. Slices of `i64`,
//! `u64` and `f64` take a four-lane path for 64-bit output instead.
//!
//! ```text
//! hash(None)  = 0
//! hash([])    = finish(mum(B1 ^ S0, B4 + S0), 0)   // never 0 in general
//! ```
//!
//! ## Example
//!
//! ```rust
//! use water_core::{Flavor, Mist, hash, hash64};
//!
//! // Unsalted
//! let h = hash64(&[1i32, 2, 3]);
//! assert_eq!(h, hash64(&vec![1i32, 2, 3]));
//! assert_eq!(hash64(&None::<&[i32]>), 0);
//!
//! // Strings, nested slices and ranges
//! let words = ["alpha", "beta"];
//! let _ = hash(&words);
//! assert_eq!(water_core::hash_range("hello world", 6, 11), hash("world"));
//!
//! // Salted
//! let mist = Mist::new("table-a");
//! assert_ne!(mist.hash64(&[1i32, 2, 3]), h);
//! ```
//!
//! ## no_std Support
//!
//! This crate supports `no_std` environments with the `alloc` crate:
//!
//! ```toml
//! [dependencies]
//! water-core = { version = "0.3", default-features = false }
//! ```
//!
//! Without `std`, the predefined tables are rebuilt on each lookup and
//! [`Opaque`] is unavailable.

#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(test, deny(unused_imports, unused_variables))]

extern crate alloc;

mod element;
mod flavor;
mod functor;
mod hashable;
mod lanes;
mod params;
mod primitives;
mod water;

pub use element::Element;
#[cfg(feature = "std")]
pub use element::Opaque;
pub use flavor::{Flavor, Water};
#[cfg(feature = "std")]
pub use functor::{MISTS, YOLKS};
pub use functor::{Mist, SeedSource, Yolk};
pub use hashable::{Hashable, Ranged};
pub use params::*;
pub use primitives::{mum, permute, splitmix64, wow};

/// 32-bit unsalted hash; `None` inputs hash to 0
#[inline]
pub fn hash<H: Hashable + ?Sized>(data: &H) -> i32 {
    Water.hash(data)
}

/// 64-bit unsalted hash; `None` inputs hash to 0
#[inline]
pub fn hash64<H: Hashable + ?Sized>(data: &H) -> i64 {
    Water.hash64(data)
}

/// 32-bit unsalted hash of the elements in `[start, end)`
#[inline]
pub fn hash_range<R: Ranged + ?Sized>(data: &R, start: usize, end: usize) -> i32 {
    Water.hash_range(data, start, end)
}

/// 64-bit unsalted hash of the elements in `[start, end)`
#[inline]
pub fn hash64_range<R: Ranged + ?Sized>(data: &R, start: usize, end: usize) -> i64 {
    Water.hash64_range(data, start, end)
}

/// 32-bit unsalted hash of every `step`-th element in `[start, end)`
#[inline]
pub fn hash_strided<R: Ranged + ?Sized>(
    data: &R,
    start: usize,
    end: usize,
    step: usize,
) -> i32 {
    Water.hash_strided(data, start, end, step)
}

/// 64-bit unsalted hash of every `step`-th element in `[start, end)`
#[inline]
pub fn hash64_strided<R: Ranged + ?Sized>(
    data: &R,
    start: usize,
    end: usize,
    step: usize,
) -> i64 {
    Water.hash64_strided(data, start, end, step)
}

/// 32-bit unsalted hash of a collection in iteration order
#[inline]
pub fn hash_iter<I>(items: I) -> i32
where
    I: IntoIterator,
    I::IntoIter: ExactSizeIterator,
    I::Item: Element,
{
    Water.hash_iter(items)
}

/// 64-bit unsalted hash of a collection in iteration order
#[inline]
pub fn hash64_iter<I>(items: I) -> i64
where
    I: IntoIterator,
    I::IntoIter: ExactSizeIterator,
    I::Item: Element,
{
    Water.hash64_iter(items)
}

#[cfg(test)]
mod tests;
