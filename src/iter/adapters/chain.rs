use super::{add_hints, min_hints};
use crate::{
    iter::{DoubleEndedIterator, ExactSizeIterator, Iterator},
    option::Option::{self, None, Some},
    pair::Pair,
};

/// Yields every item of `a`, then every item of `b`.
///
/// Created by [`Iterator::chain`]. Each half is dropped once it runs out.
#[derive(Debug, Clone)]
pub struct Chain<A, B> {
    a: Option<A>,
    b: Option<B>,
}

impl<A, B> Chain<A, B> {
    pub(crate) fn new(a: A, b: B) -> Self {
        Chain { a: Some(a), b: Some(b) }
    }
}

impl<A, B> Iterator for Chain<A, B>
where
    A: Iterator,
    B: Iterator<Item = A::Item>,
{
    type Item = A::Item;

    fn next(&mut self) -> Option<A::Item> {
        if let Some(a) = self.a.as_mut() {
            match a.next() {
                Some(x) => return Some(x),
                None => self.a = None,
            }
        }
        match self.b.as_mut() {
            Some(b) => b.next(),
            None => None,
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match (&self.a, &self.b) {
            (Some(a), Some(b)) => add_hints(a.size_hint(), b.size_hint()),
            (Some(a), None) => a.size_hint(),
            (None, Some(b)) => b.size_hint(),
            (None, None) => (0, Some(0)),
        }
    }
}

impl<A, B> DoubleEndedIterator for Chain<A, B>
where
    A: DoubleEndedIterator,
    B: DoubleEndedIterator<Item = A::Item>,
{
    fn next_back(&mut self) -> Option<A::Item> {
        if let Some(b) = self.b.as_mut() {
            match b.next_back() {
                Some(x) => return Some(x),
                None => self.b = None,
            }
        }
        match self.a.as_mut() {
            Some(a) => a.next_back(),
            None => None,
        }
    }
}

/// Yields `Pair(a, b)` until either side runs out.
///
/// Created by [`Iterator::zip`]. When `a` runs out first, `b` is not pulled.
#[derive(Debug, Clone)]
pub struct Zip<A, B> {
    a: A,
    b: B,
}

impl<A, B> Zip<A, B> {
    pub(crate) fn new(a: A, b: B) -> Self {
        Zip { a, b }
    }
}

impl<A, B> Iterator for Zip<A, B>
where
    A: Iterator,
    B: Iterator,
{
    type Item = Pair<A::Item, B::Item>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let x = match self.a.next() {
            Some(x) => x,
            None => return None,
        };
        self.b.next().map(|y| Pair::new(x, y))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        min_hints(self.a.size_hint(), self.b.size_hint())
    }
}

/// Yields `Pair(index, item)`.
///
/// Created by [`Iterator::enumerate`].
#[derive(Debug, Clone)]
pub struct Enumerate<I> {
    iter: I,
    count: usize,
}

impl<I> Enumerate<I> {
    pub(crate) fn new(iter: I) -> Self {
        Enumerate { iter, count: 0 }
    }
}

impl<I: Iterator> Iterator for Enumerate<I> {
    type Item = Pair<usize, I::Item>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let x = match self.iter.next() {
            Some(x) => x,
            None => return None,
        };
        let i = self.count;
        self.count += 1;
        Some(Pair::new(i, x))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<I: ExactSizeIterator> ExactSizeIterator for Enumerate<I> {}

/// Indices from the back are `count + len`.
impl<I> DoubleEndedIterator for Enumerate<I>
where
    I: DoubleEndedIterator + ExactSizeIterator,
{
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        let x = match self.iter.next_back() {
            Some(x) => x,
            None => return None,
        };
        Some(Pair::new(self.count + self.iter.len(), x))
    }
}
