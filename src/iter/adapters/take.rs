use std::fmt;

use super::filtered_hint;
use crate::{
    iter::{DoubleEndedIterator, ExactSizeIterator, Iterator},
    option::Option::{self, None, Some},
};

/// Yields at most `n` items.
///
/// Created by [`Iterator::take`].
#[derive(Debug, Clone)]
pub struct Take<I> {
    iter: I,
    n: usize,
}

impl<I> Take<I> {
    pub(crate) fn new(iter: I, n: usize) -> Self {
        Take { iter, n }
    }
}

impl<I: Iterator> Iterator for Take<I> {
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Option<I::Item> {
        if self.n == 0 {
            return None;
        }
        self.n -= 1;
        self.iter.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.n == 0 {
            return (0, Some(0));
        }
        let (lower, upper) = self.iter.size_hint();
        let upper = match upper {
            Some(x) => x.min(self.n),
            None => self.n,
        };
        (lower.min(self.n), Some(upper))
    }
}

impl<I: ExactSizeIterator> ExactSizeIterator for Take<I> {}

/// The back of a `Take` is `n` items in, so the inner iterator is trimmed to
/// that length first.
impl<I> DoubleEndedIterator for Take<I>
where
    I: DoubleEndedIterator + ExactSizeIterator,
{
    fn next_back(&mut self) -> Option<I::Item> {
        if self.n == 0 {
            return None;
        }
        let len = self.iter.len();
        if len > self.n && self.iter.advance_back_by(len - self.n).is_err() {
            return None;
        }
        self.n -= 1;
        self.iter.next_back()
    }
}

/// Yields items while `predicate` holds. The first rejected item ends the
/// iteration for good.
///
/// Created by [`Iterator::take_while`].
#[derive(Clone)]
pub struct TakeWhile<I, P> {
    iter: I,
    predicate: P,
    done: bool,
}

impl<I, P> TakeWhile<I, P> {
    pub(crate) fn new(iter: I, predicate: P) -> Self {
        TakeWhile { iter, predicate, done: false }
    }
}

impl<I: fmt::Debug, P> fmt::Debug for TakeWhile<I, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TakeWhile")
            .field("iter", &self.iter)
            .field("done", &self.done)
            .finish()
    }
}

impl<I, P> Iterator for TakeWhile<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        if self.done {
            return None;
        }
        match self.iter.next() {
            Some(x) if (self.predicate)(&x) => Some(x),
            Some(_) => {
                self.done = true;
                None
            }
            None => None,
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            return (0, Some(0));
        }
        filtered_hint(self.iter.size_hint())
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        iter::{from_fn, from_range, from_range_from, from_slice, DoubleEndedIterator, Iterator},
        option::Option::{None, Some},
    };

    #[test]
    fn test_take() {
        let mut it = from_range(0, 10).take(3);
        assert_eq!(it.size_hint(), (3, Some(3)));
        assert_eq!(it.collect(), vec![0, 1, 2]);
        assert_eq!(from_range(0, 2).take(5).size_hint(), (2, Some(2)));
        assert_eq!(from_fn(|| Some(1)).take(4).size_hint(), (0, Some(4)));
    }

    #[test]
    fn test_take_unbounded_source() {
        let v = from_range_from(10u8).take(3).collect();
        assert_eq!(v, vec![10, 11, 12]);
    }

    #[test]
    fn test_take_back() {
        let mut it = from_range(0, 10).take(3);
        assert_eq!(it.next_back(), Some(2));
        assert_eq!(it.next(), Some(0));
        assert_eq!(it.next_back(), Some(1));
        assert_eq!(it.next_back(), None);
    }

    #[test]
    fn test_take_back_through_peeked_source() {
        let mut it = from_range(0, 10).peekable();
        assert_eq!(it.peek(), Some(&0));
        let mut it = it.take(3);
        assert_eq!(it.next_back(), Some(2));
        assert_eq!(it.next(), Some(0));
        assert_eq!(it.next(), Some(1));
        assert_eq!(it.next(), None);
    }

    #[test]
    fn test_take_back_after_map() {
        let mut it = from_range(0, 10).map(|x| x * 2).take(2);
        assert_eq!(it.next_back(), Some(2));
        assert_eq!(it.next_back(), Some(0));
        assert_eq!(it.next_back(), None);
    }

    #[test]
    fn test_take_while_sticks() {
        let v = [1, 2, 9, 3];
        let mut it = from_slice(&v).take_while(|x| **x < 5);
        assert_eq!(it.next(), Some(&1));
        assert_eq!(it.next(), Some(&2));
        assert_eq!(it.next(), None);
        assert_eq!(it.next(), None);
        assert_eq!(it.size_hint(), (0, Some(0)));
    }
}
