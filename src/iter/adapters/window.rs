use std::{collections::VecDeque, fmt};

use super::add_hints;
use crate::{
    iter::Iterator,
    option::Option::{self, None, Some},
};

/// Calls a function on each overlapping window of a fixed size.
///
/// Created by [`Iterator::map_windows`]. Fewer items than the window size
/// yield nothing.
pub struct MapWindows<I: Iterator, F> {
    iter: I,
    size: usize,
    buf: VecDeque<I::Item>,
    f: F,
}

impl<I: Iterator, F> MapWindows<I, F> {
    #[track_caller]
    pub(crate) fn new(iter: I, size: usize, f: F) -> Self {
        assert!(size != 0, "map_windows: window size must be at least 1");
        MapWindows { iter, size, buf: VecDeque::with_capacity(size), f }
    }
}

impl<I, F> fmt::Debug for MapWindows<I, F>
where
    I: Iterator + fmt::Debug,
    I::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MapWindows")
            .field("iter", &self.iter)
            .field("buf", &self.buf)
            .finish()
    }
}

impl<I, F, R> Iterator for MapWindows<I, F>
where
    I: Iterator,
    F: FnMut(&[I::Item]) -> R,
{
    type Item = R;

    fn next(&mut self) -> Option<R> {
        if self.buf.len() == self.size {
            self.buf.pop_front();
        }
        while self.buf.len() < self.size {
            match self.iter.next() {
                Some(x) => self.buf.push_back(x),
                None => return None,
            }
        }
        Some((self.f)(self.buf.make_contiguous()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.iter.size_hint();
        let windows = |n: usize| {
            if self.buf.len() == self.size {
                n
            } else {
                (self.buf.len() + n + 1).saturating_sub(self.size)
            }
        };
        (windows(lower), upper.map(windows))
    }
}

/// Groups items into `Vec`s of a fixed size. The final chunk holds whatever
/// is left.
///
/// Created by [`Iterator::array_chunks`].
#[derive(Debug, Clone)]
pub struct ArrayChunks<I> {
    iter: I,
    size: usize,
}

impl<I> ArrayChunks<I> {
    #[track_caller]
    pub(crate) fn new(iter: I, size: usize) -> Self {
        assert!(size != 0, "array_chunks: chunk size must be at least 1");
        ArrayChunks { iter, size }
    }
}

impl<I: Iterator> Iterator for ArrayChunks<I> {
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Vec<I::Item>> {
        let mut chunk = Vec::with_capacity(self.size);
        while chunk.len() < self.size {
            match self.iter.next() {
                Some(x) => chunk.push(x),
                None => break,
            }
        }
        if chunk.is_empty() {
            None
        } else {
            Some(chunk)
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let size = self.size;
        let (lower, upper) = self.iter.size_hint();
        (lower.div_ceil(size), upper.map(|u| u.div_ceil(size)))
    }
}

/// Groups runs of consecutive items that a predicate keeps together.
///
/// Created by [`Iterator::chunk_by`].
#[derive(Clone)]
pub struct ChunkBy<I: Iterator, P> {
    iter: I,
    same_group: P,
    /// First item of the next group, pulled while closing the last one.
    pending: Option<I::Item>,
}

impl<I: Iterator, P> ChunkBy<I, P> {
    pub(crate) fn new(iter: I, same_group: P) -> Self {
        ChunkBy { iter, same_group, pending: None }
    }
}

impl<I, P> fmt::Debug for ChunkBy<I, P>
where
    I: Iterator + fmt::Debug,
    I::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChunkBy")
            .field("iter", &self.iter)
            .field("pending", &self.pending)
            .finish()
    }
}

impl<I, P> Iterator for ChunkBy<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item, &I::Item) -> bool,
{
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Vec<I::Item>> {
        let first = match self.pending.take() {
            Some(x) => x,
            None => match self.iter.next() {
                Some(x) => x,
                None => return None,
            },
        };
        let mut chunk = vec![first];
        while let Some(x) = self.iter.next() {
            if (self.same_group)(&chunk[chunk.len() - 1], &x) {
                chunk.push(x);
            } else {
                self.pending = Some(x);
                break;
            }
        }
        Some(chunk)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let pending = usize::from(self.pending.is_some());
        let (lower, upper) = add_hints((pending, Some(pending)), self.iter.size_hint());
        (lower.min(1), upper)
    }
}

#[cfg(test)]
mod tests {
    use std::iter::Iterator as _;

    use crate::{
        iter::{from_range, from_slice, from_str_chars, Iterator},
        option::Option::{None, Some},
    };

    #[test]
    fn test_map_windows() {
        let mut it = from_range(0, 5).map_windows(3, |w| w.to_vec());
        assert_eq!(it.size_hint(), (3, Some(3)));
        assert_eq!(it.next(), Some(vec![0, 1, 2]));
        assert_eq!(it.size_hint(), (2, Some(2)));
        assert_eq!(it.collect(), vec![vec![1, 2, 3], vec![2, 3, 4]]);
    }

    #[test]
    fn test_map_windows_too_short() {
        let mut it = from_range(0, 2).map_windows(3, |w| w.len());
        assert_eq!(it.size_hint(), (0, Some(0)));
        assert_eq!(it.next(), None);
    }

    #[test]
    fn test_map_windows_over_chars() {
        let pairs: Vec<String> = from_str_chars("abc")
            .map_windows(2, |w| w.iter().collect())
            .collect();
        assert_eq!(pairs, vec!["ab".to_string(), "bc".to_string()]);
    }

    #[test]
    #[should_panic(expected = "window size must be at least 1")]
    fn test_map_windows_zero() {
        let _ = from_range(0, 3).map_windows(0, |w| w.len());
    }

    #[test]
    fn test_array_chunks() {
        let mut it = from_range(0, 7).array_chunks(3);
        assert_eq!(it.size_hint(), (3, Some(3)));
        assert_eq!(it.next(), Some(vec![0, 1, 2]));
        assert_eq!(it.collect(), vec![vec![3, 4, 5], vec![6]]);
    }

    #[test]
    fn test_chunk_by_runs() {
        let v = [1, 1, 2, 2, 2, 3, 3];
        let mut it = from_slice(&v).copied().chunk_by(|a, b| a == b);
        assert_eq!(it.size_hint(), (1, Some(7)));
        assert_eq!(it.next(), Some(vec![1, 1]));
        assert_eq!(it.next(), Some(vec![2, 2, 2]));
        assert_eq!(it.size_hint(), (1, Some(2)));
        assert_eq!(it.next(), Some(vec![3, 3]));
        assert_eq!(it.next(), None);
        assert_eq!(it.size_hint(), (0, Some(0)));
    }

    #[test]
    fn test_chunk_by_compares_neighbours() {
        let v = [1, 2, 3, 7, 8, 10];
        let runs = from_slice(&v).copied().chunk_by(|a, b| b - a == 1).collect();
        assert_eq!(runs, vec![vec![1, 2, 3], vec![7, 8], vec![10]]);
        assert_eq!(from_range(0, 0).chunk_by(|_, _| true).next(), None);
    }

    #[test]
    #[should_panic(expected = "chunk size must be at least 1")]
    fn test_array_chunks_zero() {
        let _ = from_range(0, 3).array_chunks(0);
    }
}
