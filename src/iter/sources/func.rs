use std::{fmt, marker::PhantomData};

use crate::{
    iter::{DoubleEndedIterator, ExactSizeIterator, Iterator},
    option::{
        self,
        Option::{self, None, Some},
    },
};

/// An iterator that yields nothing.
///
/// ```rust
/// use gust::prelude::*;
/// use gust::iter;
///
/// let mut it = iter::empty::<i32>();
/// assert_eq!(it.size_hint(), (0, Some(0)));
/// assert_eq!(it.next(), None);
/// ```
#[inline]
pub const fn empty<T>() -> Empty<T> {
    Empty { _marker: PhantomData }
}

/// Created by [`empty`].
pub struct Empty<T> {
    _marker: PhantomData<fn() -> T>,
}

impl<T> Clone for Empty<T> {
    fn clone(&self) -> Self {
        empty()
    }
}

impl<T> fmt::Debug for Empty<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Empty")
    }
}

impl<T> Iterator for Empty<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        None
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(0))
    }
}

impl<T> DoubleEndedIterator for Empty<T> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        None
    }
}

impl<T> ExactSizeIterator for Empty<T> {}

/// Yields `value` exactly once.
#[inline]
pub fn once<T>(value: T) -> option::IntoIter<T> {
    option::IntoIter::new(Some(value))
}

/// Yields the value of an `Option`, if any.
///
/// ```rust
/// use gust::prelude::*;
/// use gust::iter;
///
/// let found = iter::from_option(Some(3)).chain(iter::from_option(None)).collect();
/// assert_eq!(found, vec![3]);
/// ```
#[inline]
pub fn from_option<T>(opt: Option<T>) -> option::IntoIter<T> {
    option::IntoIter::new(opt)
}

/// Yields clones of `value` forever.
///
/// ```rust
/// use gust::prelude::*;
/// use gust::iter;
///
/// assert_eq!(iter::repeat('x').take(3).collect(), vec!['x', 'x', 'x']);
/// ```
#[inline]
pub fn repeat<T: Clone>(value: T) -> Repeat<T> {
    Repeat { value }
}

/// Created by [`repeat`].
#[derive(Debug, Clone)]
pub struct Repeat<T> {
    value: T,
}

impl<T: Clone> Iterator for Repeat<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        Some(self.value.clone())
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }

    #[inline]
    fn nth(&mut self, _: usize) -> Option<T> {
        Some(self.value.clone())
    }
}

impl<T: Clone> DoubleEndedIterator for Repeat<T> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        Some(self.value.clone())
    }
}

/// Calls `f` for every item. The iterator is only as fused as `f` is.
///
/// ```rust
/// use gust::prelude::*;
/// use gust::iter;
///
/// let mut n = 0;
/// let evens = iter::from_fn(|| {
///     n += 2;
///     if n <= 6 { Some(n) } else { None }
/// });
/// assert_eq!(evens.collect(), vec![2, 4, 6]);
/// ```
#[inline]
pub fn from_fn<T, F>(f: F) -> FromFn<F>
where
    F: FnMut() -> Option<T>,
{
    FromFn { f }
}

/// Created by [`from_fn`].
#[derive(Clone)]
pub struct FromFn<F> {
    f: F,
}

impl<F> fmt::Debug for FromFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FromFn")
    }
}

impl<T, F> Iterator for FromFn<F>
where
    F: FnMut() -> Option<T>,
{
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        (self.f)()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_once() {
        let mut it = once(7);
        assert_eq!(it.size_hint(), (1, Some(1)));
        assert_eq!(it.next_back(), Some(7));
        assert_eq!(it.next(), None);
    }

    #[test]
    fn test_empty_both_ends() {
        let mut it = empty::<()>();
        assert_eq!(it.next_back(), None);
        assert_eq!(it.clone().count(), 0);
    }

    #[test]
    fn test_repeat_hint() {
        let it = repeat(1);
        assert_eq!(it.size_hint(), (usize::MAX, None));
        assert_eq!(it.take(2).collect(), vec![1, 1]);
    }

    #[test]
    fn test_from_option_none() {
        assert_eq!(from_option::<i32>(None).count(), 0);
    }
}
