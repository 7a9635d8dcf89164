use std::fmt;

use crate::{
    iter::{DoubleEndedIterator, ExactSizeIterator, Iterator},
    option::Option::{self, None, Some},
};

/// Integer types a [`Range`] can count over.
pub trait Integer: Copy + Ord + fmt::Debug {
    const MAX: Self;

    /// `self + 1`. Only called below the upper end of a range.
    fn forward(self) -> Self;

    /// `self - 1`. Only called above the lower end of a range.
    fn backward(self) -> Self;

    /// `end - start` when `start <= end` and the distance fits in `usize`.
    fn steps_between(start: Self, end: Self) -> std::option::Option<usize>;
}

macro_rules! impl_integer {
    ($($t:ty)*) => {$(
        impl Integer for $t {
            const MAX: Self = <$t>::MAX;

            #[inline]
            fn forward(self) -> Self {
                self + 1
            }

            #[inline]
            fn backward(self) -> Self {
                self - 1
            }

            #[inline]
            fn steps_between(start: Self, end: Self) -> std::option::Option<usize> {
                if start > end {
                    return std::option::Option::None;
                }
                usize::try_from(end.abs_diff(start)).ok()
            }
        }
    )*};
}

impl_integer! { i8 i16 i32 i64 i128 isize u8 u16 u32 u64 u128 usize }

/// Integers in `[start, end)`.
///
/// ```rust
/// use gust::prelude::*;
/// use gust::iter;
///
/// assert_eq!(iter::from_range(2u8, 5).collect(), vec![2, 3, 4]);
/// assert_eq!(iter::from_range(5, 2).count(), 0);
/// ```
pub fn from_range<T: Integer>(start: T, end: T) -> Range<T> {
    if start >= end {
        return Range::exhausted(start);
    }
    Range { front: start, back: end.backward(), exhausted: false }
}

/// Integers in `[start, end]`.
///
/// ```rust
/// use gust::prelude::*;
/// use gust::iter;
///
/// assert_eq!(iter::from_range_inclusive(-1i64, 1).collect(), vec![-1, 0, 1]);
/// assert_eq!(iter::from_range_inclusive(250u8, 255).count(), 6);
/// ```
pub fn from_range_inclusive<T: Integer>(start: T, end: T) -> Range<T> {
    if start > end {
        return Range::exhausted(start);
    }
    Range { front: start, back: end, exhausted: false }
}

/// Integers counting up from `start`. Stops after the type's maximum.
pub fn from_range_from<T: Integer>(start: T) -> Range<T> {
    from_range_inclusive(start, T::MAX)
}

/// A range of integers, iterable from both ends.
///
/// Stored as the closed interval `[front, back]` plus an exhausted flag, so
/// ranges ending at the type's maximum need no overflow handling.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Range<T> {
    front: T,
    back: T,
    exhausted: bool,
}

impl<T: Integer> Range<T> {
    fn exhausted(at: T) -> Self {
        Range { front: at, back: at, exhausted: true }
    }

    /// Returns `true` if `x` has not been yielded yet and lies in the range.
    pub fn contains(&self, x: &T) -> bool {
        !self.exhausted && self.front <= *x && *x <= self.back
    }

    pub fn is_empty(&self) -> bool {
        self.exhausted
    }
}

impl<T: Integer> fmt::Debug for Range<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.exhausted {
            write!(f, "Range(empty)")
        } else {
            write!(f, "Range({:?}..={:?})", self.front, self.back)
        }
    }
}

impl<T: Integer> From<std::ops::Range<T>> for Range<T> {
    fn from(r: std::ops::Range<T>) -> Self {
        from_range(r.start, r.end)
    }
}

impl<T: Integer> From<std::ops::RangeInclusive<T>> for Range<T> {
    fn from(r: std::ops::RangeInclusive<T>) -> Self {
        let (start, end) = r.into_inner();
        from_range_inclusive(start, end)
    }
}

impl<T: Integer> Iterator for Range<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        if self.exhausted {
            return None;
        }
        let x = self.front;
        if x == self.back {
            self.exhausted = true;
        } else {
            self.front = x.forward();
        }
        Some(x)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.exhausted {
            return (0, Some(0));
        }
        match T::steps_between(self.front, self.back).and_then(|n| n.checked_add(1)) {
            std::option::Option::Some(n) => (n, Some(n)),
            std::option::Option::None => (usize::MAX, None),
        }
    }
}

impl<T: Integer> DoubleEndedIterator for Range<T> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        if self.exhausted {
            return None;
        }
        let x = self.back;
        if x == self.front {
            self.exhausted = true;
        } else {
            self.back = x.backward();
        }
        Some(x)
    }
}

/// Only for element types whose full closed range still has a length that
/// fits in `usize`.
macro_rules! impl_exact_size {
    ($($t:ty)*) => {$(
        impl ExactSizeIterator for Range<$t> {}
    )*};
}

impl_exact_size! { i8 i16 u8 u16 }

#[cfg(target_pointer_width = "64")]
impl_exact_size! { i32 u32 }

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_half_open() {
        let mut it = from_range(0, 3);
        assert_eq!(it.size_hint(), (3, Some(3)));
        assert!(it.contains(&2));
        assert!(!it.contains(&3));
        assert_eq!(it.next(), Some(0));
        assert_eq!(it.next(), Some(1));
        assert_eq!(it.next(), Some(2));
        assert_eq!(it.next(), None);
        assert!(it.is_empty());
    }

    #[test]
    fn test_empty_and_reversed() {
        assert_eq!(from_range(3, 3).size_hint(), (0, Some(0)));
        assert_eq!(from_range(4, 3).next(), None);
        assert_eq!(from_range_inclusive(4, 3).next_back(), None);
        assert_eq!(from_range_inclusive(3, 3).collect(), vec![3]);
    }

    #[test]
    fn test_meets_in_the_middle() {
        let mut it = from_range(1, 6);
        assert_eq!(it.next(), Some(1));
        assert_eq!(it.next_back(), Some(5));
        assert_eq!(it.next(), Some(2));
        assert_eq!(it.next_back(), Some(4));
        assert_eq!(it.next(), Some(3));
        assert_eq!(it.next_back(), None);
        assert_eq!(it.next(), None);
    }

    #[test]
    fn test_type_bounds() {
        let top = from_range_inclusive(u8::MAX - 1, u8::MAX).collect();
        assert_eq!(top, vec![254, 255]);
        let bottom = from_range(i8::MIN, i8::MIN + 2).rev().collect();
        assert_eq!(bottom, vec![-127, -128]);
        assert_eq!(from_range_from(250u8).count(), 6);
        assert_eq!(from_range_inclusive(i8::MIN, i8::MAX).size_hint(), (256, Some(256)));
    }

    #[test]
    fn test_distance_beyond_usize() {
        let it = from_range_inclusive(0u128, u128::MAX);
        assert_eq!(it.size_hint(), (usize::MAX, None));
        let it = from_range_inclusive(0usize, usize::MAX);
        assert_eq!(it.size_hint(), (usize::MAX, None));
    }

    #[test]
    fn test_from_std_ranges() {
        assert_eq!(Range::from(0..3).collect(), vec![0, 1, 2]);
        assert_eq!(Range::from(0..=3).rev().collect(), vec![3, 2, 1, 0]);
    }

    #[test]
    fn test_debug() {
        assert_eq!(format!("{:?}", from_range(0, 3)), "Range(0..=2)");
        assert_eq!(format!("{:?}", from_range(3, 0)), "Range(empty)");
    }
}
