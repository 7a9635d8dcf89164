use std::fmt;

use super::Peekable;
use crate::{
    iter::Iterator,
    option::Option::{self, None, Some},
};

/// Places a clone of a separator between adjacent items.
///
/// Created by [`Iterator::intersperse`].
#[derive(Debug, Clone)]
pub struct Intersperse<I: Iterator>
where
    I::Item: Clone,
{
    iter: Peekable<I>,
    separator: I::Item,
    needs_sep: bool,
}

impl<I: Iterator> Intersperse<I>
where
    I::Item: Clone,
{
    pub(crate) fn new(iter: I, separator: I::Item) -> Self {
        Intersperse { iter: iter.peekable(), separator, needs_sep: false }
    }
}

impl<I: Iterator> Iterator for Intersperse<I>
where
    I::Item: Clone,
{
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Option<I::Item> {
        if self.needs_sep && self.iter.peek().is_some() {
            self.needs_sep = false;
            Some(self.separator.clone())
        } else {
            self.needs_sep = true;
            self.iter.next()
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        intersperse_hint(self.iter.size_hint(), self.needs_sep)
    }
}

/// Places `separator()` between adjacent items.
///
/// Created by [`Iterator::intersperse_with`].
pub struct IntersperseWith<I: Iterator, G> {
    iter: Peekable<I>,
    separator: G,
    needs_sep: bool,
}

impl<I: Iterator, G> IntersperseWith<I, G> {
    pub(crate) fn new(iter: I, separator: G) -> Self {
        IntersperseWith { iter: iter.peekable(), separator, needs_sep: false }
    }
}

impl<I, G> fmt::Debug for IntersperseWith<I, G>
where
    I: Iterator + fmt::Debug,
    I::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntersperseWith")
            .field("iter", &self.iter)
            .field("needs_sep", &self.needs_sep)
            .finish()
    }
}

impl<I, G> Iterator for IntersperseWith<I, G>
where
    I: Iterator,
    G: FnMut() -> I::Item,
{
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Option<I::Item> {
        if self.needs_sep && self.iter.peek().is_some() {
            self.needs_sep = false;
            Some((self.separator)())
        } else {
            self.needs_sep = true;
            self.iter.next()
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        intersperse_hint(self.iter.size_hint(), self.needs_sep)
    }
}

/// `n` items become `2n - 1` outputs, or `2n` when a separator is owed
/// before the next item.
fn intersperse_hint(hint: (usize, Option<usize>), needs_sep: bool) -> (usize, Option<usize>) {
    let (lower, upper) = hint;
    let next_is_item = usize::from(!needs_sep);
    let lower = lower.saturating_sub(next_is_item).saturating_add(lower);
    let upper = upper.and_then(|u| u.saturating_sub(next_is_item).checked_add(u).into());
    (lower, upper)
}

/// Restarts from a saved copy of the original whenever it runs out.
///
/// Created by [`Iterator::cycle`].
#[derive(Debug, Clone)]
pub struct Cycle<I> {
    orig: I,
    iter: I,
}

impl<I: Clone> Cycle<I> {
    pub(crate) fn new(iter: I) -> Self {
        Cycle { orig: iter.clone(), iter }
    }
}

impl<I: Iterator + Clone> Iterator for Cycle<I> {
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Option<I::Item> {
        match self.iter.next() {
            None => {
                self.iter = self.orig.clone();
                self.iter.next()
            }
            x => x,
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.orig.size_hint() {
            hint @ (0, Some(0)) => hint,
            (0, _) => (0, None),
            _ => (usize::MAX, None),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        iter::{empty, from_range, from_slice, Iterator},
        option::Option::{None, Some},
    };

    #[test]
    fn test_intersperse() {
        let mut it = from_range(1, 4).intersperse(0);
        assert_eq!(it.size_hint(), (5, Some(5)));
        assert_eq!(it.next(), Some(1));
        assert_eq!(it.size_hint(), (4, Some(4)));
        assert_eq!(it.collect(), vec![0, 2, 0, 3]);
        assert_eq!(empty::<i32>().intersperse(0).collect(), Vec::<i32>::new());
        assert_eq!(from_range(7, 8).intersperse(0).collect(), vec![7]);
    }

    #[test]
    fn test_intersperse_with() {
        let mut n = 0;
        let s: String = from_slice(&["a", "b", "c"])
            .map(|s| s.to_string())
            .intersperse_with(|| {
                n += 1;
                n.to_string()
            })
            .collect_into();
        assert_eq!(s, "a1b2c");
    }

    #[test]
    fn test_cycle() {
        let it = from_range(0, 3).cycle();
        assert_eq!(it.size_hint(), (usize::MAX, None));
        assert_eq!(it.take(7).collect(), vec![0, 1, 2, 0, 1, 2, 0]);
        let mut none = empty::<i32>().cycle();
        assert_eq!(none.size_hint(), (0, Some(0)));
        assert_eq!(none.next(), None);
    }
}
