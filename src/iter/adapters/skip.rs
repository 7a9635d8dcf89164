use std::fmt;

use super::filtered_hint;
use crate::{
    iter::{DoubleEndedIterator, ExactSizeIterator, Iterator},
    option::Option::{self, None},
};

/// Drops the first `n` items.
///
/// Created by [`Iterator::skip`]. The drop happens on the first pull.
#[derive(Debug, Clone)]
pub struct Skip<I> {
    iter: I,
    n: usize,
}

impl<I> Skip<I> {
    pub(crate) fn new(iter: I, n: usize) -> Self {
        Skip { iter, n }
    }
}

impl<I: Iterator> Iterator for Skip<I> {
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Option<I::Item> {
        if self.n > 0 {
            let n = std::mem::take(&mut self.n);
            self.iter.nth(n)
        } else {
            self.iter.next()
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.iter.size_hint();
        (lower.saturating_sub(self.n), upper.map(|x| x.saturating_sub(self.n)))
    }
}

impl<I: ExactSizeIterator> ExactSizeIterator for Skip<I> {}

/// Stops at the skip boundary, which is only known for an exact-size inner
/// iterator.
impl<I> DoubleEndedIterator for Skip<I>
where
    I: DoubleEndedIterator + ExactSizeIterator,
{
    #[inline]
    fn next_back(&mut self) -> Option<I::Item> {
        if self.len() > 0 {
            self.iter.next_back()
        } else {
            None
        }
    }
}

/// Drops items while `predicate` holds.
///
/// Created by [`Iterator::skip_while`].
#[derive(Clone)]
pub struct SkipWhile<I, P> {
    iter: I,
    predicate: P,
    done: bool,
}

impl<I, P> SkipWhile<I, P> {
    pub(crate) fn new(iter: I, predicate: P) -> Self {
        SkipWhile { iter, predicate, done: false }
    }
}

impl<I: fmt::Debug, P> fmt::Debug for SkipWhile<I, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SkipWhile")
            .field("iter", &self.iter)
            .field("done", &self.done)
            .finish()
    }
}

impl<I, P> Iterator for SkipWhile<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        if self.done {
            return self.iter.next();
        }
        let predicate = &mut self.predicate;
        let first = self.iter.find(|x| !predicate(x));
        self.done = first.is_some();
        first
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            self.iter.size_hint()
        } else {
            filtered_hint(self.iter.size_hint())
        }
    }
}

/// Yields every `step`th item, starting with the first.
///
/// Created by [`Iterator::step_by`].
#[derive(Debug, Clone)]
pub struct StepBy<I> {
    iter: I,
    step: usize,
    first_take: bool,
}

impl<I> StepBy<I> {
    #[track_caller]
    pub(crate) fn new(iter: I, step: usize) -> Self {
        assert!(step != 0, "step_by: step must be at least 1");
        StepBy { iter, step, first_take: true }
    }
}

impl<I: Iterator> Iterator for StepBy<I> {
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Option<I::Item> {
        if self.first_take {
            self.first_take = false;
            self.iter.next()
        } else {
            self.iter.nth(self.step - 1)
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let step = self.step;
        let scale = |n: usize| {
            if self.first_take {
                n.div_ceil(step)
            } else {
                n / step
            }
        };
        let (lower, upper) = self.iter.size_hint();
        (scale(lower), upper.map(scale))
    }
}
