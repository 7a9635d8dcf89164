use std::fmt;

use super::filtered_hint;
use crate::{
    iter::{DoubleEndedIterator, Iterator},
    option::Option::{self, None, Some},
};

/// Yields the items `predicate` accepts.
///
/// Created by [`Iterator::filter`].
#[derive(Clone)]
pub struct Filter<I, P> {
    iter: I,
    predicate: P,
}

impl<I, P> Filter<I, P> {
    pub(crate) fn new(iter: I, predicate: P) -> Self {
        Filter { iter, predicate }
    }
}

impl<I: fmt::Debug, P> fmt::Debug for Filter<I, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Filter").field("iter", &self.iter).finish()
    }
}

impl<I, P> Iterator for Filter<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
{
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Option<I::Item> {
        self.iter.find(&mut self.predicate)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        filtered_hint(self.iter.size_hint())
    }
}

impl<I, P> DoubleEndedIterator for Filter<I, P>
where
    I: DoubleEndedIterator,
    P: FnMut(&I::Item) -> bool,
{
    #[inline]
    fn next_back(&mut self) -> Option<I::Item> {
        self.iter.rfind(&mut self.predicate)
    }
}

/// Maps and filters in one pass.
///
/// Created by [`Iterator::filter_map`].
#[derive(Clone)]
pub struct FilterMap<I, F> {
    iter: I,
    f: F,
}

impl<I, F> FilterMap<I, F> {
    pub(crate) fn new(iter: I, f: F) -> Self {
        FilterMap { iter, f }
    }
}

impl<I: fmt::Debug, F> fmt::Debug for FilterMap<I, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilterMap").field("iter", &self.iter).finish()
    }
}

impl<B, I, F> Iterator for FilterMap<I, F>
where
    I: Iterator,
    F: FnMut(I::Item) -> Option<B>,
{
    type Item = B;

    #[inline]
    fn next(&mut self) -> Option<B> {
        self.iter.find_map(&mut self.f)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        filtered_hint(self.iter.size_hint())
    }
}

impl<B, I, F> DoubleEndedIterator for FilterMap<I, F>
where
    I: DoubleEndedIterator,
    F: FnMut(I::Item) -> Option<B>,
{
    fn next_back(&mut self) -> Option<B> {
        while let Some(x) = self.iter.next_back() {
            if let Some(y) = (self.f)(x) {
                return Some(y);
            }
        }
        None
    }
}

/// Yields mapped items until the mapping first returns `None`.
///
/// Created by [`Iterator::map_while`].
#[derive(Clone)]
pub struct MapWhile<I, F> {
    iter: I,
    f: F,
    done: bool,
}

impl<I, F> MapWhile<I, F> {
    pub(crate) fn new(iter: I, f: F) -> Self {
        MapWhile { iter, f, done: false }
    }
}

impl<I: fmt::Debug, F> fmt::Debug for MapWhile<I, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MapWhile")
            .field("iter", &self.iter)
            .field("done", &self.done)
            .finish()
    }
}

impl<B, I, F> Iterator for MapWhile<I, F>
where
    I: Iterator,
    F: FnMut(I::Item) -> Option<B>,
{
    type Item = B;

    fn next(&mut self) -> Option<B> {
        if self.done {
            return None;
        }
        let mapped = self.iter.next().and_then(&mut self.f);
        self.done = mapped.is_none();
        mapped
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            return (0, Some(0));
        }
        filtered_hint(self.iter.size_hint())
    }
}
