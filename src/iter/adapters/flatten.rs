use std::fmt;

use super::Map;
use crate::{
    iter::{DoubleEndedIterator, Iterator},
    option::Option::{self, None, Some},
};

/// Yields the items of each inner iterator in turn.
///
/// Created by [`Iterator::flatten`]. Keeps one partially consumed inner
/// iterator per end so both ends can be pulled independently.
pub struct Flatten<I: Iterator>
where
    I::Item: Iterator,
{
    iter: I,
    front: Option<I::Item>,
    back: Option<I::Item>,
}

impl<I: Iterator> Flatten<I>
where
    I::Item: Iterator,
{
    pub(crate) fn new(iter: I) -> Self {
        Flatten { iter, front: None, back: None }
    }
}

impl<I> Clone for Flatten<I>
where
    I: Iterator + Clone,
    I::Item: Iterator + Clone,
{
    fn clone(&self) -> Self {
        Flatten {
            iter: self.iter.clone(),
            front: self.front.clone(),
            back: self.back.clone(),
        }
    }
}

impl<I> fmt::Debug for Flatten<I>
where
    I: Iterator + fmt::Debug,
    I::Item: Iterator + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Flatten")
            .field("iter", &self.iter)
            .field("front", &self.front)
            .field("back", &self.back)
            .finish()
    }
}

impl<I> Iterator for Flatten<I>
where
    I: Iterator,
    I::Item: Iterator,
{
    type Item = <I::Item as Iterator>::Item;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(inner) = self.front.as_mut() {
                match inner.next() {
                    Some(x) => return Some(x),
                    None => self.front = None,
                }
            }
            match self.iter.next() {
                Some(inner) => self.front = Some(inner),
                None => {
                    return match self.back.as_mut() {
                        Some(inner) => {
                            let x = inner.next();
                            if x.is_none() {
                                self.back = None;
                            }
                            x
                        }
                        None => None,
                    };
                }
            }
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, None)
    }
}

impl<I> DoubleEndedIterator for Flatten<I>
where
    I: DoubleEndedIterator,
    I::Item: DoubleEndedIterator,
{
    fn next_back(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(inner) = self.back.as_mut() {
                match inner.next_back() {
                    Some(x) => return Some(x),
                    None => self.back = None,
                }
            }
            match self.iter.next_back() {
                Some(inner) => self.back = Some(inner),
                None => {
                    return match self.front.as_mut() {
                        Some(inner) => {
                            let x = inner.next_back();
                            if x.is_none() {
                                self.front = None;
                            }
                            x
                        }
                        None => None,
                    };
                }
            }
        }
    }
}

/// Maps each item to an iterator and flattens the result.
///
/// Created by [`Iterator::flat_map`].
pub struct FlatMap<I, U, F>
where
    I: Iterator,
    U: Iterator,
    F: FnMut(I::Item) -> U,
{
    inner: Flatten<Map<I, F>>,
}

impl<I, U, F> FlatMap<I, U, F>
where
    I: Iterator,
    U: Iterator,
    F: FnMut(I::Item) -> U,
{
    pub(crate) fn new(iter: I, f: F) -> Self {
        FlatMap { inner: Flatten::new(Map::new(iter, f)) }
    }
}

impl<I, U, F> Clone for FlatMap<I, U, F>
where
    I: Iterator + Clone,
    U: Iterator + Clone,
    F: FnMut(I::Item) -> U + Clone,
{
    fn clone(&self) -> Self {
        FlatMap { inner: self.inner.clone() }
    }
}

impl<I, U, F> fmt::Debug for FlatMap<I, U, F>
where
    I: Iterator + fmt::Debug,
    U: Iterator + fmt::Debug,
    F: FnMut(I::Item) -> U,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FlatMap")
            .field("iter", &self.inner.iter)
            .field("front", &self.inner.front)
            .field("back", &self.inner.back)
            .finish()
    }
}

impl<I, U, F> Iterator for FlatMap<I, U, F>
where
    I: Iterator,
    U: Iterator,
    F: FnMut(I::Item) -> U,
{
    type Item = U::Item;

    #[inline]
    fn next(&mut self) -> Option<U::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, None)
    }
}

impl<I, U, F> DoubleEndedIterator for FlatMap<I, U, F>
where
    I: DoubleEndedIterator,
    U: DoubleEndedIterator,
    F: FnMut(I::Item) -> U,
{
    #[inline]
    fn next_back(&mut self) -> Option<U::Item> {
        self.inner.next_back()
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        iter::{empty, from_range, from_vec, DoubleEndedIterator, Iterator},
        option::Option::{None, Some},
    };

    #[test]
    fn test_flatten_in_order() {
        let nested = vec![vec![1, 2], vec![], vec![3]];
        let flat = from_vec(nested).map(from_vec).flatten().collect();
        assert_eq!(flat, vec![1, 2, 3]);
    }

    #[test]
    fn test_flat_map_both_ends_meet() {
        let mut it = from_range(1, 4).flat_map(|n| from_range(0, n));
        assert_eq!(it.size_hint(), (0, None));
        assert_eq!(it.next(), Some(0));
        assert_eq!(it.next_back(), Some(2));
        assert_eq!(it.next_back(), Some(1));
        assert_eq!(it.next_back(), Some(0));
        assert_eq!(it.next(), Some(0));
        assert_eq!(it.next(), Some(1));
        assert_eq!(it.next(), None);
        assert_eq!(it.next_back(), None);
    }

    #[test]
    fn test_flatten_empty() {
        let mut it = empty::<Vec<i32>>().map(from_vec).flatten();
        assert_eq!(it.next(), None);
    }
}
