use crate::iter::{DoubleEndedIterator, Iterator};

/// Adapts one of this crate's iterators to [`std::iter::Iterator`], so it
/// can feed `for` loops, `std` collections and `Iterator::sum`.
///
/// Created by [`Iterator::into_std`].
#[derive(Debug, Clone)]
pub struct IntoStd<I> {
    iter: I,
}

impl<I> IntoStd<I> {
    pub(crate) fn new(iter: I) -> Self {
        IntoStd { iter }
    }

    /// Recovers the wrapped iterator.
    pub fn into_inner(self) -> I {
        self.iter
    }
}

impl<I: Iterator> std::iter::Iterator for IntoStd<I> {
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Option<I::Item> {
        self.iter.next().into_std()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.iter.size_hint();
        (lower, upper.into_std())
    }
}

impl<I: DoubleEndedIterator> std::iter::DoubleEndedIterator for IntoStd<I> {
    #[inline]
    fn next_back(&mut self) -> Option<I::Item> {
        self.iter.next_back().into_std()
    }
}

#[cfg(test)]
mod tests {
    use crate::iter::{from_range, Iterator};

    #[test]
    fn test_for_loop() {
        let mut seen = Vec::new();
        for x in from_range(0, 3).into_std() {
            seen.push(x);
        }
        assert_eq!(seen, vec![0, 1, 2]);
    }

    #[test]
    fn test_std_hint_and_rev() {
        let it = from_range(0, 4).into_std();
        assert_eq!(std::iter::Iterator::size_hint(&it), (4, Some(4)));
        let back: Vec<i32> = std::iter::Iterator::collect(std::iter::Iterator::rev(it));
        assert_eq!(back, vec![3, 2, 1, 0]);
    }

    #[test]
    fn test_into_inner() {
        let mut it = from_range(0, 4).into_std();
        assert_eq!(std::iter::Iterator::next(&mut it), Some(0));
        let rest = it.into_inner().collect();
        assert_eq!(rest, vec![1, 2, 3]);
    }
}
