use std::iter::{DoubleEndedIterator as _, Iterator as _};

use crate::{
    iter::{DoubleEndedIterator, ExactSizeIterator, Iterator},
    option::Option::{self, None, Some},
};

/// Borrows the elements of a slice, front to back.
///
/// ```rust
/// use gust::prelude::*;
/// use gust::iter;
///
/// let v = [1, 2, 3];
/// let mut it = iter::from_slice(&v);
/// assert_eq!(it.size_hint(), (3, Some(3)));
/// assert_eq!(it.next_back(), Some(&3));
/// assert_eq!(it.as_slice(), &[1, 2]);
/// ```
#[inline]
pub fn from_slice<T>(slice: &[T]) -> SliceIter<'_, T> {
    SliceIter { slice }
}

/// Iterator over a borrowed slice.
///
/// Created by [`from_slice`]. Both ends narrow the same view, so they meet
/// in the middle.
#[derive(Debug)]
pub struct SliceIter<'a, T> {
    slice: &'a [T],
}

impl<'a, T> SliceIter<'a, T> {
    /// The part of the slice not yet yielded.
    #[inline]
    pub fn as_slice(&self) -> &'a [T] {
        self.slice
    }
}

impl<T> Clone for SliceIter<'_, T> {
    fn clone(&self) -> Self {
        SliceIter { slice: self.slice }
    }
}

impl<'a, T> Iterator for SliceIter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<&'a T> {
        match self.slice.split_first() {
            std::option::Option::Some((first, rest)) => {
                self.slice = rest;
                Some(first)
            }
            std::option::Option::None => None,
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.slice.len(), Some(self.slice.len()))
    }

    #[inline]
    fn nth(&mut self, n: usize) -> Option<&'a T> {
        if n >= self.slice.len() {
            self.slice = &[];
            return None;
        }
        let x = &self.slice[n];
        self.slice = &self.slice[n + 1..];
        Some(x)
    }
}

impl<'a, T> DoubleEndedIterator for SliceIter<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<&'a T> {
        match self.slice.split_last() {
            std::option::Option::Some((last, rest)) => {
                self.slice = rest;
                Some(last)
            }
            std::option::Option::None => None,
        }
    }
}

impl<T> ExactSizeIterator for SliceIter<'_, T> {}

/// Takes ownership of a `Vec` and yields its elements.
///
/// ```rust
/// use gust::prelude::*;
/// use gust::iter;
///
/// let names = iter::from_vec(vec![String::from("a"), String::from("b")]);
/// assert_eq!(names.rev().collect(), vec!["b", "a"]);
/// ```
#[inline]
pub fn from_vec<T>(v: Vec<T>) -> VecIter<T> {
    VecIter { inner: v.into_iter() }
}

/// Owning iterator over a `Vec`.
///
/// Created by [`from_vec`].
#[derive(Debug, Clone)]
pub struct VecIter<T> {
    inner: std::vec::IntoIter<T>,
}

impl<T> VecIter<T> {
    /// The elements not yet yielded.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.inner.as_slice()
    }
}

impl<T> Iterator for VecIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.inner.next().into()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.inner.len();
        (n, Some(n))
    }
}

impl<T> DoubleEndedIterator for VecIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        self.inner.next_back().into()
    }
}

impl<T> ExactSizeIterator for VecIter<T> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slice_alternation() {
        let v = [1, 2, 3, 4, 5];
        let mut it = from_slice(&v);
        assert_eq!(it.next(), Some(&1));
        assert_eq!(it.next_back(), Some(&5));
        assert_eq!(it.next(), Some(&2));
        assert_eq!(it.next_back(), Some(&4));
        assert_eq!(it.next(), Some(&3));
        assert_eq!(it.next_back(), None);
        assert_eq!(it.next(), None);
    }

    #[test]
    fn test_slice_nth() {
        let v = [1, 2, 3];
        let mut it = from_slice(&v);
        assert_eq!(it.nth(1), Some(&2));
        assert_eq!(it.as_slice(), &[3]);
        assert_eq!(it.nth(4), None);
        assert_eq!(it.size_hint(), (0, Some(0)));
    }

    #[test]
    fn test_empty_slice() {
        let v: [i32; 0] = [];
        let mut it = from_slice(&v);
        assert_eq!(it.size_hint(), (0, Some(0)));
        assert_eq!(it.next(), None);
        assert_eq!(it.next_back(), None);
    }

    #[test]
    fn test_vec_iter() {
        let mut it = from_vec(vec![1, 2, 3]);
        assert_eq!(it.next_back(), Some(3));
        assert_eq!(it.as_slice(), &[1, 2]);
        assert_eq!(it.size_hint(), (2, Some(2)));
        assert_eq!(it.collect(), vec![1, 2]);
    }
}
