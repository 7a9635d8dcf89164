use std::fmt;

use crate::{
    iter::{DoubleEndedIterator, ExactSizeIterator, Iterator},
    option::Option,
};

/// Yields `f(x)` for each item.
///
/// Created by [`Iterator::map`].
#[derive(Clone)]
pub struct Map<I, F> {
    iter: I,
    f: F,
}

impl<I, F> Map<I, F> {
    pub(crate) fn new(iter: I, f: F) -> Self {
        Map { iter, f }
    }
}

impl<I: fmt::Debug, F> fmt::Debug for Map<I, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Map").field("iter", &self.iter).finish()
    }
}

impl<B, I, F> Iterator for Map<I, F>
where
    I: Iterator,
    F: FnMut(I::Item) -> B,
{
    type Item = B;

    #[inline]
    fn next(&mut self) -> Option<B> {
        self.iter.next().map(&mut self.f)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<B, I, F> DoubleEndedIterator for Map<I, F>
where
    I: DoubleEndedIterator,
    F: FnMut(I::Item) -> B,
{
    #[inline]
    fn next_back(&mut self) -> Option<B> {
        self.iter.next_back().map(&mut self.f)
    }
}

impl<B, I, F> ExactSizeIterator for Map<I, F>
where
    I: ExactSizeIterator,
    F: FnMut(I::Item) -> B,
{
}

/// Runs a side effect on each item before yielding it.
///
/// Created by [`Iterator::inspect`].
#[derive(Clone)]
pub struct Inspect<I, F> {
    iter: I,
    f: F,
}

impl<I, F> Inspect<I, F> {
    pub(crate) fn new(iter: I, f: F) -> Self {
        Inspect { iter, f }
    }
}

impl<I: fmt::Debug, F> fmt::Debug for Inspect<I, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Inspect").field("iter", &self.iter).finish()
    }
}

impl<I, F> Iterator for Inspect<I, F>
where
    I: Iterator,
    F: FnMut(&I::Item),
{
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Option<I::Item> {
        self.iter.next().inspect(&mut self.f)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<I, F> DoubleEndedIterator for Inspect<I, F>
where
    I: DoubleEndedIterator,
    F: FnMut(&I::Item),
{
    #[inline]
    fn next_back(&mut self) -> Option<I::Item> {
        self.iter.next_back().inspect(&mut self.f)
    }
}

impl<I, F> ExactSizeIterator for Inspect<I, F>
where
    I: ExactSizeIterator,
    F: FnMut(&I::Item),
{
}

/// Clones each borrowed item.
///
/// Created by [`Iterator::cloned`].
#[derive(Debug, Clone)]
pub struct Cloned<I> {
    iter: I,
}

impl<I> Cloned<I> {
    pub(crate) fn new(iter: I) -> Self {
        Cloned { iter }
    }
}

impl<'a, T, I> Iterator for Cloned<I>
where
    I: Iterator<Item = &'a T>,
    T: Clone + 'a,
{
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.iter.next().cloned()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<'a, T, I> DoubleEndedIterator for Cloned<I>
where
    I: DoubleEndedIterator<Item = &'a T>,
    T: Clone + 'a,
{
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        self.iter.next_back().cloned()
    }
}

impl<'a, T, I> ExactSizeIterator for Cloned<I>
where
    I: ExactSizeIterator<Item = &'a T>,
    T: Clone + 'a,
{
}

/// Copies each borrowed item.
///
/// Created by [`Iterator::copied`].
#[derive(Debug, Clone)]
pub struct Copied<I> {
    iter: I,
}

impl<I> Copied<I> {
    pub(crate) fn new(iter: I) -> Self {
        Copied { iter }
    }
}

impl<'a, T, I> Iterator for Copied<I>
where
    I: Iterator<Item = &'a T>,
    T: Copy + 'a,
{
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.iter.next().copied()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<'a, T, I> DoubleEndedIterator for Copied<I>
where
    I: DoubleEndedIterator<Item = &'a T>,
    T: Copy + 'a,
{
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        self.iter.next_back().copied()
    }
}

impl<'a, T, I> ExactSizeIterator for Copied<I>
where
    I: ExactSizeIterator<Item = &'a T>,
    T: Copy + 'a,
{
}

#[cfg(test)]
mod tests {
    use crate::{
        iter::{from_slice, DoubleEndedIterator, Iterator},
        option::Option::{None, Some},
    };

    #[test]
    fn test_map_keeps_order_and_hint() {
        let v = [1, 2, 3];
        let mut it = from_slice(&v).map(|x| x * 10);
        assert_eq!(it.size_hint(), (3, Some(3)));
        assert_eq!(it.next(), Some(10));
        assert_eq!(it.next_back(), Some(30));
        assert_eq!(it.next(), Some(20));
        assert_eq!(it.next(), None);
    }

    #[test]
    fn test_inspect_sees_every_item() {
        let v = [1, 2, 3];
        let mut seen = Vec::new();
        let out = from_slice(&v).inspect(|x| seen.push(**x)).copied().rev().collect();
        assert_eq!(out, vec![3, 2, 1]);
        assert_eq!(seen, vec![3, 2, 1]);
    }

    #[test]
    fn test_cloned_owns_items() {
        let v = vec!["a".to_string(), "b".to_string()];
        let owned = from_slice(&v).cloned().collect();
        assert_eq!(owned, v);
    }
}
