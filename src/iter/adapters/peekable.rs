use super::add_hints;
use crate::{
    iter::{DoubleEndedIterator, ExactSizeIterator, Iterator},
    option::Option::{self, None, Some},
};

/// An iterator with a one-item lookahead.
///
/// Created by [`Iterator::peekable`].
///
/// ```rust
/// use gust::prelude::*;
/// use gust::iter;
///
/// let mut it = iter::from_range(1, 4).peekable();
/// assert_eq!(it.peek(), Some(&1));
/// assert_eq!(it.peek(), Some(&1));
/// assert_eq!(it.next(), Some(1));
/// assert_eq!(it.next_if(|x| *x > 5), None);
/// assert_eq!(it.next_if_eq(&2), Some(2));
/// assert_eq!(it.collect(), vec![3]);
/// ```
#[derive(Debug, Clone)]
pub struct Peekable<I: Iterator> {
    iter: I,
    /// `Some(None)` remembers that the inner iterator already ended.
    peeked: Option<Option<I::Item>>,
}

impl<I: Iterator> Peekable<I> {
    pub(crate) fn new(iter: I) -> Self {
        Peekable { iter, peeked: None }
    }

    /// Returns a reference to the next item without consuming it.
    #[inline]
    pub fn peek(&mut self) -> Option<&I::Item> {
        let iter = &mut self.iter;
        self.peeked.get_or_insert_with(|| iter.next()).as_ref()
    }

    /// Returns a mutable reference to the next item without consuming it.
    /// Changes are seen by the following `next`.
    #[inline]
    pub fn peek_mut(&mut self) -> Option<&mut I::Item> {
        let iter = &mut self.iter;
        self.peeked.get_or_insert_with(|| iter.next()).as_mut()
    }

    /// Consumes the next item only if `func` accepts it.
    pub fn next_if<F>(&mut self, func: F) -> Option<I::Item>
    where
        F: FnOnce(&I::Item) -> bool,
    {
        match self.next() {
            Some(x) if func(&x) => Some(x),
            other => {
                self.peeked = Some(other);
                None
            }
        }
    }

    /// Consumes the next item only if it equals `expected`.
    #[inline]
    pub fn next_if_eq<T>(&mut self, expected: &T) -> Option<I::Item>
    where
        T: ?Sized,
        I::Item: PartialEq<T>,
    {
        self.next_if(|x| x == expected)
    }
}

impl<I: Iterator> Iterator for Peekable<I> {
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Option<I::Item> {
        match self.peeked.take() {
            Some(v) => v,
            None => self.iter.next(),
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let peeked = match &self.peeked {
            Some(None) => return (0, Some(0)),
            Some(Some(_)) => 1,
            None => 0,
        };
        add_hints((peeked, Some(peeked)), self.iter.size_hint())
    }
}

impl<I: DoubleEndedIterator> DoubleEndedIterator for Peekable<I> {
    #[inline]
    fn next_back(&mut self) -> Option<I::Item> {
        match self.peeked.as_mut() {
            Some(v @ Some(_)) => self.iter.next_back().or_else(|| v.take()),
            Some(None) => None,
            None => self.iter.next_back(),
        }
    }
}

impl<I: ExactSizeIterator> ExactSizeIterator for Peekable<I> {}

/// Sticky termination: after the first `None`, always `None`.
///
/// Created by [`Iterator::fuse`].
#[derive(Debug, Clone)]
pub struct Fuse<I> {
    iter: Option<I>,
}

impl<I> Fuse<I> {
    pub(crate) fn new(iter: I) -> Self {
        Fuse { iter: Some(iter) }
    }
}

impl<I: Iterator> Iterator for Fuse<I> {
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Option<I::Item> {
        let x = match self.iter.as_mut() {
            Some(it) => it.next(),
            None => return None,
        };
        if x.is_none() {
            self.iter = None;
        }
        x
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.iter {
            Some(it) => it.size_hint(),
            None => (0, Some(0)),
        }
    }
}

impl<I: ExactSizeIterator> ExactSizeIterator for Fuse<I> {}

impl<I: DoubleEndedIterator> DoubleEndedIterator for Fuse<I> {
    #[inline]
    fn next_back(&mut self) -> Option<I::Item> {
        let x = match self.iter.as_mut() {
            Some(it) => it.next_back(),
            None => return None,
        };
        if x.is_none() {
            self.iter = None;
        }
        x
    }
}

/// Swaps the front and back of a double-ended iterator.
///
/// Created by [`DoubleEndedIterator::rev`].
#[derive(Debug, Clone)]
pub struct Rev<I> {
    iter: I,
}

impl<I> Rev<I> {
    pub(crate) fn new(iter: I) -> Self {
        Rev { iter }
    }
}

impl<I: DoubleEndedIterator> Iterator for Rev<I> {
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Option<I::Item> {
        self.iter.next_back()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }

    #[inline]
    fn nth(&mut self, n: usize) -> Option<I::Item> {
        self.iter.nth_back(n)
    }
}

impl<I: DoubleEndedIterator + ExactSizeIterator> ExactSizeIterator for Rev<I> {}

impl<I: DoubleEndedIterator> DoubleEndedIterator for Rev<I> {
    #[inline]
    fn next_back(&mut self) -> Option<I::Item> {
        self.iter.next()
    }

    #[inline]
    fn nth_back(&mut self, n: usize) -> Option<I::Item> {
        self.iter.nth(n)
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        iter::{from_fn, from_range, from_vec, DoubleEndedIterator, Iterator},
        option::Option::{None, Some},
    };

    #[test]
    fn test_peek_does_not_advance() {
        let mut it = from_vec(vec![1, 2, 3]).peekable();
        assert_eq!(it.size_hint(), (3, Some(3)));
        assert_eq!(it.peek(), Some(&1));
        assert_eq!(it.size_hint(), (3, Some(3)));
        assert_eq!(it.next(), Some(1));
        assert_eq!(it.next(), Some(2));
        assert_eq!(it.peek(), Some(&3));
        assert_eq!(it.next(), Some(3));
        assert_eq!(it.peek(), None);
        assert_eq!(it.size_hint(), (0, Some(0)));
        assert_eq!(it.next(), None);
    }

    #[test]
    fn test_peek_mut_changes_next() {
        let mut it = from_range(0, 3).peekable();
        if let Some(x) = it.peek_mut() {
            *x = 10;
        }
        assert_eq!(it.collect(), vec![10, 1, 2]);
    }

    #[test]
    fn test_peeked_item_survives_back_pulls() {
        let mut it = from_range(0, 3).peekable();
        assert_eq!(it.peek(), Some(&0));
        assert_eq!(it.next_back(), Some(2));
        assert_eq!(it.next_back(), Some(1));
        assert_eq!(it.next_back(), Some(0));
        assert_eq!(it.next(), None);
    }

    #[test]
    fn test_fuse_sticks() {
        let mut calls = 0;
        let flaky = from_fn(|| {
            calls += 1;
            if calls == 2 {
                None
            } else {
                Some(calls)
            }
        });
        let mut it = flaky.fuse();
        assert_eq!(it.next(), Some(1));
        assert_eq!(it.next(), None);
        assert_eq!(it.next(), None);
        assert_eq!(it.size_hint(), (0, Some(0)));
    }

    #[test]
    fn test_unfused_source_resumes() {
        let mut calls = 0;
        let mut flaky = from_fn(|| {
            calls += 1;
            if calls == 2 {
                None
            } else {
                Some(calls)
            }
        });
        assert_eq!(flaky.next(), Some(1));
        assert_eq!(flaky.next(), None);
        assert_eq!(flaky.next(), Some(3));
    }

    #[test]
    fn test_rev_rev_is_identity() {
        assert_eq!(from_range(0, 4).rev().rev().collect(), vec![0, 1, 2, 3]);
        assert_eq!(from_range(0, 4).rev().nth(1), Some(2));
    }
}
