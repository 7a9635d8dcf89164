use crate::{
    iter::{DoubleEndedIterator, ExactSizeIterator, Iterator},
    option::Option,
};

/// Adapts anything iterable in the standard library's sense: collections,
/// `std` ranges, `std` adapters.
///
/// ```rust
/// use gust::prelude::*;
/// use gust::iter;
///
/// let doubled = iter::from_std("a-b-c".split('-')).map(str::to_uppercase).collect();
/// assert_eq!(doubled, vec!["A", "B", "C"]);
/// ```
#[inline]
pub fn from_std<I: IntoIterator>(iter: I) -> FromStd<I::IntoIter> {
    FromStd { iter: iter.into_iter() }
}

/// Created by [`from_std`].
#[derive(Debug, Clone)]
pub struct FromStd<I> {
    iter: I,
}

impl<I> FromStd<I> {
    /// Recovers the wrapped `std` iterator.
    pub fn into_inner(self) -> I {
        self.iter
    }
}

impl<I: std::iter::Iterator> Iterator for FromStd<I> {
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Option<I::Item> {
        std::iter::Iterator::next(&mut self.iter).into()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = std::iter::Iterator::size_hint(&self.iter);
        (lower, upper.into())
    }

    #[inline]
    fn nth(&mut self, n: usize) -> Option<I::Item> {
        std::iter::Iterator::nth(&mut self.iter, n).into()
    }
}

impl<I: std::iter::DoubleEndedIterator> DoubleEndedIterator for FromStd<I> {
    #[inline]
    fn next_back(&mut self) -> Option<I::Item> {
        std::iter::DoubleEndedIterator::next_back(&mut self.iter).into()
    }
}

impl<I: std::iter::ExactSizeIterator> ExactSizeIterator for FromStd<I> {}
