//! Dispatch facade
//!
//! Routes every supported input shape to the element fold of its element
//! kind. Absent inputs (`None`) hash to 0 here, before any mixing happens;
//! the engine itself never sees absence.

#[cfg(not(feature = "std"))]
use alloc::{string::String, vec::Vec};

use crate::element::Element;
use crate::flavor::Flavor;
use crate::params::ABSENT;

/// An input the engine can fingerprint
pub trait Hashable {
    /// 32-bit hash under `flavor`
    fn hash32_with<F: Flavor>(&self, flavor: &F) -> u32;

    /// 64-bit hash under `flavor`
    fn hash64_with<F: Flavor>(&self, flavor: &F) -> u64;
}

impl<T: Element> Hashable for [T] {
    #[inline]
    fn hash32_with<F: Flavor>(&self, flavor: &F) -> u32 {
        T::fold32(self.iter(), flavor)
    }

    #[inline]
    fn hash64_with<F: Flavor>(&self, flavor: &F) -> u64 {
        T::fold64(self.iter(), flavor)
    }
}

impl<T: Element, const N: usize> Hashable for [T; N] {
    #[inline]
    fn hash32_with<F: Flavor>(&self, flavor: &F) -> u32 {
        self.as_slice().hash32_with(flavor)
    }

    #[inline]
    fn hash64_with<F: Flavor>(&self, flavor: &F) -> u64 {
        self.as_slice().hash64_with(flavor)
    }
}

impl<T: Element> Hashable for Vec<T> {
    #[inline]
    fn hash32_with<F: Flavor>(&self, flavor: &F) -> u32 {
        self.as_slice().hash32_with(flavor)
    }

    #[inline]
    fn hash64_with<F: Flavor>(&self, flavor: &F) -> u64 {
        self.as_slice().hash64_with(flavor)
    }
}

/// Strings hash as the sequence of their `char`s
///
/// Each element is a Unicode scalar value at a 16-bit pack width. A
/// character above U+FFFF is therefore one element here, where a UTF-16
/// based hasher would see a surrogate pair of two code units, so strings
/// outside the Basic Multilingual Plane do not match UTF-16 fingerprints.
impl Hashable for str {
    #[inline]
    fn hash32_with<F: Flavor>(&self, flavor: &F) -> u32 {
        char::fold32(Counted::new(self.chars(), self.chars().count()), flavor)
    }

    #[inline]
    fn hash64_with<F: Flavor>(&self, flavor: &F) -> u64 {
        char::fold64(Counted::new(self.chars(), self.chars().count()), flavor)
    }
}

impl Hashable for String {
    #[inline]
    fn hash32_with<F: Flavor>(&self, flavor: &F) -> u32 {
        self.as_str().hash32_with(flavor)
    }

    #[inline]
    fn hash64_with<F: Flavor>(&self, flavor: &F) -> u64 {
        self.as_str().hash64_with(flavor)
    }
}

impl<H: Hashable + ?Sized> Hashable for &H {
    #[inline]
    fn hash32_with<F: Flavor>(&self, flavor: &F) -> u32 {
        (**self).hash32_with(flavor)
    }

    #[inline]
    fn hash64_with<F: Flavor>(&self, flavor: &F) -> u64 {
        (**self).hash64_with(flavor)
    }
}

impl<H: Hashable> Hashable for Option<H> {
    #[inline]
    fn hash32_with<F: Flavor>(&self, flavor: &F) -> u32 {
        self.as_ref()
            .map_or(ABSENT as u32, |inner| inner.hash32_with(flavor))
    }

    #[inline]
    fn hash64_with<F: Flavor>(&self, flavor: &F) -> u64 {
        self.as_ref()
            .map_or(ABSENT, |inner| inner.hash64_with(flavor))
    }
}

/// An input that can be hashed over a sub-range of its elements
pub trait Ranged {
    /// 32-bit hash of every `step`-th element in `[start, end)`, or 0 if the range is empty
    fn range_hash32_with<F: Flavor>(
        &self,
        start: usize,
        end: usize,
        step: usize,
        flavor: &F,
    ) -> u32;

    /// 64-bit hash of every `step`-th element in `[start, end)`, or 0 if the range is empty
    fn range_hash64_with<F: Flavor>(
        &self,
        start: usize,
        end: usize,
        step: usize,
        flavor: &F,
    ) -> u64;
}

/// Clamp `end` to `len`; `None` for an empty range or a zero step
#[inline]
fn span(len: usize, start: usize, end: usize, step: usize) -> Option<(usize, usize)> {
    let end = end.min(len);
    (step != 0 && start < end).then_some((start, end))
}

impl<T: Element> Ranged for [T] {
    #[inline]
    fn range_hash32_with<F: Flavor>(
        &self,
        start: usize,
        end: usize,
        step: usize,
        flavor: &F,
    ) -> u32 {
        match span(self.len(), start, end, step) {
            Some((start, end)) => T::fold32(self[start..end].iter().step_by(step), flavor),
            None => ABSENT as u32,
        }
    }

    #[inline]
    fn range_hash64_with<F: Flavor>(
        &self,
        start: usize,
        end: usize,
        step: usize,
        flavor: &F,
    ) -> u64 {
        match span(self.len(), start, end, step) {
            Some((start, end)) => T::fold64(self[start..end].iter().step_by(step), flavor),
            None => ABSENT,
        }
    }
}

impl<T: Element, const N: usize> Ranged for [T; N] {
    #[inline]
    fn range_hash32_with<F: Flavor>(
        &self,
        start: usize,
        end: usize,
        step: usize,
        flavor: &F,
    ) -> u32 {
        self.as_slice().range_hash32_with(start, end, step, flavor)
    }

    #[inline]
    fn range_hash64_with<F: Flavor>(
        &self,
        start: usize,
        end: usize,
        step: usize,
        flavor: &F,
    ) -> u64 {
        self.as_slice().range_hash64_with(start, end, step, flavor)
    }
}

impl<T: Element> Ranged for Vec<T> {
    #[inline]
    fn range_hash32_with<F: Flavor>(
        &self,
        start: usize,
        end: usize,
        step: usize,
        flavor: &F,
    ) -> u32 {
        self.as_slice().range_hash32_with(start, end, step, flavor)
    }

    #[inline]
    fn range_hash64_with<F: Flavor>(
        &self,
        start: usize,
        end: usize,
        step: usize,
        flavor: &F,
    ) -> u64 {
        self.as_slice().range_hash64_with(start, end, step, flavor)
    }
}

/// Ranges over a string index `char`s, not bytes or UTF-16 code units
impl Ranged for str {
    #[inline]
    fn range_hash32_with<F: Flavor>(
        &self,
        start: usize,
        end: usize,
        step: usize,
        flavor: &F,
    ) -> u32 {
        match span(self.chars().count(), start, end, step) {
            Some((start, end)) => char::fold32(strided_chars(self, start, end, step), flavor),
            None => ABSENT as u32,
        }
    }

    #[inline]
    fn range_hash64_with<F: Flavor>(
        &self,
        start: usize,
        end: usize,
        step: usize,
        flavor: &F,
    ) -> u64 {
        match span(self.chars().count(), start, end, step) {
            Some((start, end)) => char::fold64(strided_chars(self, start, end, step), flavor),
            None => ABSENT,
        }
    }
}

impl Ranged for String {
    #[inline]
    fn range_hash32_with<F: Flavor>(
        &self,
        start: usize,
        end: usize,
        step: usize,
        flavor: &F,
    ) -> u32 {
        self.as_str().range_hash32_with(start, end, step, flavor)
    }

    #[inline]
    fn range_hash64_with<F: Flavor>(
        &self,
        start: usize,
        end: usize,
        step: usize,
        flavor: &F,
    ) -> u64 {
        self.as_str().range_hash64_with(start, end, step, flavor)
    }
}

/// Every `step`-th char of `s` in `[start, end)`; the range must already be clamped
#[inline]
fn strided_chars(
    s: &str,
    start: usize,
    end: usize,
    step: usize,
) -> Counted<impl Iterator<Item = char> + '_> {
    Counted::new(s.chars().skip(start).step_by(step), (end - start).div_ceil(step))
}

/// Iterator with a length known up front
///
/// `str::chars` cannot report an exact length, but the bulk core needs one
/// to pick its tail branch.
#[derive(Debug, Clone)]
pub(crate) struct Counted<I> {
    inner: I,
    remaining: usize,
}

impl<I> Counted<I> {
    #[inline]
    pub(crate) fn new(inner: I, len: usize) -> Self {
        Self {
            inner,
            remaining: len,
        }
    }
}

impl<I: Iterator> Iterator for Counted<I> {
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<I: Iterator> ExactSizeIterator for Counted<I> {}
