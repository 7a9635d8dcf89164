//! Lazy, pull-based sequences.
//!
//! An [`Iterator`] produces items one [`next`](Iterator::next) call at a
//! time and reports a conservative [`size_hint`](Iterator::size_hint).
//! Adapters such as [`map`](Iterator::map) or [`zip`](Iterator::zip) take
//! ownership of the iterator they wrap; consumers such as
//! [`fold`](Iterator::fold) or [`find`](Iterator::find) drive it.
//!
//! A [`DoubleEndedIterator`] can also pull from the back. Both ends share one
//! cursor, so once they meet every further call on either end yields `None`.
//!
//! Iterators are not fused by default: a source may yield `Some` again after
//! a `None`. Wrap with [`fuse`](Iterator::fuse) when termination must stick.
//!
//! # Examples
//!
//! ```rust
//! use gust::prelude::*;
//! use gust::iter;
//!
//! let words = ["1", "2", "three", "4", "five"];
//! let numbers = iter::from_slice(&words)
//!     .filter_map(|s| s.parse::<i32>().ok().into())
//!     .collect();
//! assert_eq!(numbers, vec![1, 2, 4]);
//!
//! let mut it = iter::from_slice(&[1, 2, 3, 4, 5]).copied();
//! assert_eq!(it.next(), Some(1));
//! assert_eq!(it.next_back(), Some(5));
//! assert_eq!(it.rev().collect(), vec![4, 3, 2]);
//! ```

mod adapters;
mod func;
mod sources;

pub use adapters::*;
pub use func::*;
pub use sources::*;

use std::num::NonZeroUsize;

use either::Either;

use crate::{
    control_flow::ControlFlow::{self, Break, Continue},
    option::Option::{self, None, Some},
    ordering::Ordering,
    pair::Pair,
    result::Result,
};

/// A lazy sequence of values.
///
/// Implementors provide [`next`](Iterator::next) and, when they know it,
/// [`size_hint`](Iterator::size_hint); everything else is derived.
///
/// ```rust
/// use gust::prelude::*;
///
/// struct Countdown(u32);
///
/// impl Iterator for Countdown {
///     type Item = u32;
///
///     fn next(&mut self) -> Option<u32> {
///         if self.0 == 0 {
///             return None;
///         }
///         self.0 -= 1;
///         Some(self.0 + 1)
///     }
/// }
///
/// assert_eq!(Countdown(3).collect(), vec![3, 2, 1]);
/// assert_eq!(Countdown(3).size_hint(), (0, None));
/// ```
pub trait Iterator {
    /// Type of the elements being iterated over
    type Item;

    /// Advances the iterator and returns the next value, or `None` at the end
    /// of the sequence.
    fn next(&mut self) -> Option<Self::Item>;

    /// Returns `(lower, upper)` bounds on the remaining length.
    ///
    /// `lower` never exceeds the real count and `upper`, when `Some`, is never
    /// below it. `(n, Some(n))` promises exactly `n` more items. The default
    /// `(0, None)` is always correct.
    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, None)
    }

    /// The number of items known to remain: the lower size-hint bound. For an
    /// exact count use [`ExactSizeIterator::len`].
    #[inline]
    fn remaining(&self) -> usize {
        self.size_hint().0
    }

    /// Skips `n` items. On early exhaustion returns how many could not be
    /// skipped.
    ///
    /// ```rust
    /// use std::num::NonZeroUsize;
    /// use gust::prelude::*;
    /// use gust::iter;
    ///
    /// let mut it = iter::from_range(0, 3);
    /// assert!(it.advance_by(2).is_ok());
    /// assert_eq!(it.advance_by(5).unwrap_err(), NonZeroUsize::new(4).unwrap());
    /// ```
    fn advance_by(&mut self, n: usize) -> std::result::Result<(), NonZeroUsize> {
        for i in 0..n {
            if self.next().is_none() {
                return NonZeroUsize::new(n - i).map_or(Ok(()), Err);
            }
        }
        Ok(())
    }

    /// Returns the `n`th item (zero-based), consuming everything before it.
    #[inline]
    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        if self.advance_by(n).is_err() {
            return None;
        }
        self.next()
    }

    /// Pulls exactly `N` items. When fewer remain, the items that were pulled
    /// are returned as the error.
    ///
    /// ```rust
    /// use gust::prelude::*;
    /// use gust::iter;
    ///
    /// let mut it = iter::from_range(0, 5);
    /// assert_eq!(it.next_chunk::<2>().unwrap(), [0, 1]);
    /// assert_eq!(it.next_chunk::<4>().unwrap_err(), vec![2, 3, 4]);
    /// ```
    fn next_chunk<const N: usize>(
        &mut self,
    ) -> std::result::Result<[Self::Item; N], Vec<Self::Item>>
    where
        Self: Sized,
    {
        let mut chunk = Vec::with_capacity(N);
        while chunk.len() < N {
            match self.next() {
                Some(x) => chunk.push(x),
                None => return Err(chunk),
            }
        }
        <[Self::Item; N]>::try_from(chunk)
    }

    /// Borrows the iterator so adapters can be applied without giving it
    /// away.
    ///
    /// ```rust
    /// use gust::prelude::*;
    /// use gust::iter;
    ///
    /// let mut it = iter::from_range(0, 6);
    /// assert_eq!(it.by_ref().take(2).collect(), vec![0, 1]);
    /// assert_eq!(it.collect(), vec![2, 3, 4, 5]);
    /// ```
    #[inline]
    fn by_ref(&mut self) -> &mut Self
    where
        Self: Sized,
    {
        self
    }

    /// Yields `f(x)` for every item.
    #[inline]
    fn map<B, F>(self, f: F) -> Map<Self, F>
    where
        Self: Sized,
        F: FnMut(Self::Item) -> B,
    {
        Map::new(self, f)
    }

    /// Yields only the items for which `predicate` holds.
    #[inline]
    fn filter<P>(self, predicate: P) -> Filter<Self, P>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        Filter::new(self, predicate)
    }

    /// Yields `u` for each item where `f` returns `Some(u)`.
    #[inline]
    fn filter_map<B, F>(self, f: F) -> FilterMap<Self, F>
    where
        Self: Sized,
        F: FnMut(Self::Item) -> Option<B>,
    {
        FilterMap::new(self, f)
    }

    /// Maps every item to an iterator and yields their items in order.
    ///
    /// ```rust
    /// use gust::prelude::*;
    /// use gust::iter;
    ///
    /// let words = ["ab", "c"];
    /// let chars = iter::from_slice(&words).flat_map(|w| iter::from_str_chars(w)).collect();
    /// assert_eq!(chars, vec!['a', 'b', 'c']);
    /// ```
    #[inline]
    fn flat_map<U, F>(self, f: F) -> FlatMap<Self, U, F>
    where
        Self: Sized,
        U: Iterator,
        F: FnMut(Self::Item) -> U,
    {
        FlatMap::new(self, f)
    }

    /// Yields the items of each inner iterator in order.
    #[inline]
    fn flatten(self) -> Flatten<Self>
    where
        Self: Sized,
        Self::Item: Iterator,
    {
        Flatten::new(self)
    }

    /// Yields all of `self`, then all of `other`.
    #[inline]
    fn chain<U>(self, other: U) -> Chain<Self, U>
    where
        Self: Sized,
        U: Iterator<Item = Self::Item>,
    {
        Chain::new(self, other)
    }

    /// Pairs items up until either side runs out.
    ///
    /// ```rust
    /// use gust::prelude::*;
    /// use gust::iter;
    ///
    /// let pairs = iter::from_range_from(1).zip(iter::from_slice(&['a', 'b', 'c'])).collect();
    /// assert_eq!(pairs, vec![Pair::new(1, &'a'), Pair::new(2, &'b'), Pair::new(3, &'c')]);
    /// ```
    #[inline]
    fn zip<U>(self, other: U) -> Zip<Self, U>
    where
        Self: Sized,
        U: Iterator,
    {
        Zip::new(self, other)
    }

    /// Yields `Pair(index, item)`, counting from zero.
    #[inline]
    fn enumerate(self) -> Enumerate<Self>
    where
        Self: Sized,
    {
        Enumerate::new(self)
    }

    /// Drops the first `n` items.
    #[inline]
    fn skip(self, n: usize) -> Skip<Self>
    where
        Self: Sized,
    {
        Skip::new(self, n)
    }

    /// Drops items while `predicate` holds, then yields everything after.
    #[inline]
    fn skip_while<P>(self, predicate: P) -> SkipWhile<Self, P>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        SkipWhile::new(self, predicate)
    }

    /// Yields at most `n` items.
    #[inline]
    fn take(self, n: usize) -> Take<Self>
    where
        Self: Sized,
    {
        Take::new(self, n)
    }

    /// Yields items until `predicate` fails, then stops for good.
    #[inline]
    fn take_while<P>(self, predicate: P) -> TakeWhile<Self, P>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        TakeWhile::new(self, predicate)
    }

    /// Yields every `step`th item, starting with the first.
    ///
    /// # Panics
    ///
    /// Panics if `step` is zero.
    ///
    /// ```rust
    /// use gust::prelude::*;
    /// use gust::iter;
    ///
    /// assert_eq!(iter::from_range(0, 10).step_by(4).collect(), vec![0, 4, 8]);
    /// ```
    #[inline]
    fn step_by(self, step: usize) -> StepBy<Self>
    where
        Self: Sized,
    {
        StepBy::new(self, step)
    }

    /// Yields `u` while `f` returns `Some(u)`; stops at the first `None`.
    #[inline]
    fn map_while<B, F>(self, f: F) -> MapWhile<Self, F>
    where
        Self: Sized,
        F: FnMut(Self::Item) -> Option<B>,
    {
        MapWhile::new(self, f)
    }

    /// A stateful [`map_while`](Iterator::map_while): `f` sees a mutable
    /// state seeded with `initial_state`.
    ///
    /// ```rust
    /// use gust::prelude::*;
    /// use gust::iter;
    ///
    /// let running = iter::from_range(1, 5)
    ///     .scan(0, |sum, x| {
    ///         *sum += x;
    ///         Some(*sum)
    ///     })
    ///     .collect();
    /// assert_eq!(running, vec![1, 3, 6, 10]);
    /// ```
    #[inline]
    fn scan<St, B, F>(self, initial_state: St, f: F) -> Scan<Self, St, F>
    where
        Self: Sized,
        F: FnMut(&mut St, Self::Item) -> Option<B>,
    {
        Scan::new(self, initial_state, f)
    }

    /// Adds [`peek`](Peekable::peek) to look at the next item without
    /// consuming it.
    #[inline]
    fn peekable(self) -> Peekable<Self>
    where
        Self: Sized,
    {
        Peekable::new(self)
    }

    /// Makes termination sticky: after the first `None`, always `None`.
    #[inline]
    fn fuse(self) -> Fuse<Self>
    where
        Self: Sized,
    {
        Fuse::new(self)
    }

    /// Calls `f` on each item as it passes through.
    #[inline]
    fn inspect<F>(self, f: F) -> Inspect<Self, F>
    where
        Self: Sized,
        F: FnMut(&Self::Item),
    {
        Inspect::new(self, f)
    }

    /// Clones borrowed items.
    #[inline]
    fn cloned<'a, T>(self) -> Cloned<Self>
    where
        Self: Sized + Iterator<Item = &'a T>,
        T: Clone + 'a,
    {
        Cloned::new(self)
    }

    /// Copies borrowed items.
    #[inline]
    fn copied<'a, T>(self) -> Copied<Self>
    where
        Self: Sized + Iterator<Item = &'a T>,
        T: Copy + 'a,
    {
        Copied::new(self)
    }

    /// Places a clone of `separator` between adjacent items.
    ///
    /// ```rust
    /// use gust::prelude::*;
    /// use gust::iter;
    ///
    /// let s: String = iter::from_slice(&["a", "b", "c"]).copied().intersperse(", ").collect_into();
    /// assert_eq!(s, "a, b, c");
    /// ```
    #[inline]
    fn intersperse(self, separator: Self::Item) -> Intersperse<Self>
    where
        Self: Sized,
        Self::Item: Clone,
    {
        Intersperse::new(self, separator)
    }

    /// Places `separator()` between adjacent items.
    #[inline]
    fn intersperse_with<G>(self, separator: G) -> IntersperseWith<Self, G>
    where
        Self: Sized,
        G: FnMut() -> Self::Item,
    {
        IntersperseWith::new(self, separator)
    }

    /// Repeats the sequence endlessly. An empty sequence stays empty.
    #[inline]
    fn cycle(self) -> Cycle<Self>
    where
        Self: Sized + Clone,
    {
        Cycle::new(self)
    }

    /// Calls `f` on each overlapping window of `size` consecutive items.
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero.
    ///
    /// ```rust
    /// use gust::prelude::*;
    /// use gust::iter;
    ///
    /// let sums = iter::from_range(1, 5).map_windows(2, |w| w[0] + w[1]).collect();
    /// assert_eq!(sums, vec![3, 5, 7]);
    /// ```
    #[inline]
    fn map_windows<F, R>(self, size: usize, f: F) -> MapWindows<Self, F>
    where
        Self: Sized,
        F: FnMut(&[Self::Item]) -> R,
    {
        MapWindows::new(self, size, f)
    }

    /// Groups items into chunks of `size`. The last chunk may be shorter.
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero.
    ///
    /// ```rust
    /// use gust::prelude::*;
    /// use gust::iter;
    ///
    /// let chunks = iter::from_range(0, 5).array_chunks(2).collect();
    /// assert_eq!(chunks, vec![vec![0, 1], vec![2, 3], vec![4]]);
    /// ```
    #[inline]
    fn array_chunks(self, size: usize) -> ArrayChunks<Self>
    where
        Self: Sized,
    {
        ArrayChunks::new(self, size)
    }

    /// Groups runs of consecutive items. `same_group(prev, cur)` decides
    /// whether `cur` joins the group that `prev` ended.
    ///
    /// ```rust
    /// use gust::prelude::*;
    /// use gust::iter;
    ///
    /// let runs = iter::from_slice(&[1, 1, 2, 3, 3]).chunk_by(|a, b| a == b).collect();
    /// assert_eq!(runs, vec![vec![&1, &1], vec![&2], vec![&3, &3]]);
    /// ```
    #[inline]
    fn chunk_by<P>(self, same_group: P) -> ChunkBy<Self, P>
    where
        Self: Sized,
        P: FnMut(&Self::Item, &Self::Item) -> bool,
    {
        ChunkBy::new(self, same_group)
    }

    /// Bridges to [`std::iter::Iterator`].
    ///
    /// ```rust
    /// use gust::prelude::*;
    /// use gust::iter;
    ///
    /// let total: i32 = iter::from_range(1, 4).into_std().map(|x| x * 2).sum();
    /// assert_eq!(total, 12);
    /// ```
    #[inline]
    fn into_std(self) -> IntoStd<Self>
    where
        Self: Sized,
    {
        IntoStd::new(self)
    }

    /// Calls `f` on every item.
    #[inline]
    fn for_each<F>(mut self, mut f: F)
    where
        Self: Sized,
        F: FnMut(Self::Item),
    {
        while let Some(x) = self.next() {
            f(x);
        }
    }

    /// Calls `f` on items until it returns `Break`, which is returned.
    /// Returns `Continue(())` when the iterator runs out first.
    ///
    /// ```rust
    /// use gust::prelude::*;
    /// use gust::iter;
    ///
    /// let mut it = iter::from_range(0, 10);
    /// let r = it.try_for_each(|x| if x == 3 { Break(x) } else { Continue(()) });
    /// assert_eq!(r, Break(3));
    /// assert_eq!(it.next(), Some(4));
    /// ```
    fn try_for_each<B, C, F>(&mut self, mut f: F) -> ControlFlow<B, ()>
    where
        Self: Sized,
        F: FnMut(Self::Item) -> ControlFlow<B, C>,
    {
        while let Some(x) = self.next() {
            if let Break(b) = f(x) {
                return Break(b);
            }
        }
        Continue(())
    }

    /// Gathers every item into a fresh `Vec`.
    fn collect(self) -> Vec<Self::Item>
    where
        Self: Sized,
    {
        let mut out = Vec::with_capacity(self.size_hint().0);
        self.for_each(|x| out.push(x));
        out
    }

    /// Gathers every item into any [`FromIterator`] collection.
    ///
    /// ```rust
    /// use std::collections::BTreeSet;
    /// use gust::prelude::*;
    /// use gust::iter;
    ///
    /// let set: BTreeSet<i32> = iter::from_slice(&[3, 1, 3]).copied().collect_into();
    /// assert_eq!(set.len(), 2);
    /// ```
    #[inline]
    fn collect_into<B>(self) -> B
    where
        Self: Sized,
        B: FromIterator<Self::Item>,
    {
        B::from_iter(self.into_std())
    }

    /// Folds every item into an accumulator.
    #[inline]
    fn fold<B, F>(mut self, init: B, mut f: F) -> B
    where
        Self: Sized,
        F: FnMut(B, Self::Item) -> B,
    {
        let mut acc = init;
        while let Some(x) = self.next() {
            acc = f(acc, x);
        }
        acc
    }

    /// Folds until `f` returns `Break`. The iterator is left just after the
    /// item that broke and can still be used.
    fn try_fold<B, Acc, F>(&mut self, init: Acc, mut f: F) -> ControlFlow<B, Acc>
    where
        Self: Sized,
        F: FnMut(Acc, Self::Item) -> ControlFlow<B, Acc>,
    {
        let mut acc = init;
        while let Some(x) = self.next() {
            match f(acc, x) {
                Continue(next) => acc = next,
                Break(b) => return Break(b),
            }
        }
        Continue(acc)
    }

    /// Folds using the first item as the initial accumulator. `None` when
    /// empty.
    fn reduce<F>(mut self, f: F) -> Option<Self::Item>
    where
        Self: Sized,
        F: FnMut(Self::Item, Self::Item) -> Self::Item,
    {
        match self.next() {
            Some(first) => Some(self.fold(first, f)),
            None => None,
        }
    }

    /// Like [`reduce`](Iterator::reduce) with a fallible step. Stops at the
    /// first `Err`. An empty iterator gives `Ok(None)`.
    ///
    /// ```rust
    /// use gust::prelude::*;
    /// use gust::iter;
    ///
    /// let add = |a: u8, b: u8| Option::from(a.checked_add(b)).ok_or(gust::ErrBox::msg("overflow"));
    /// assert_eq!(iter::from_slice(&[1u8, 2, 3]).copied().try_reduce(add), Ok(Some(6)));
    /// assert!(iter::from_slice(&[200u8, 100]).copied().try_reduce(add).is_err());
    /// assert_eq!(iter::empty::<u8>().try_reduce(add), Ok(None));
    /// ```
    fn try_reduce<F>(&mut self, mut f: F) -> Result<Option<Self::Item>>
    where
        Self: Sized,
        F: FnMut(Self::Item, Self::Item) -> Result<Self::Item>,
    {
        let mut acc = match self.next() {
            Some(first) => first,
            None => return Result::Ok(None),
        };
        while let Some(x) = self.next() {
            match f(acc, x) {
                Result::Ok(next) => acc = next,
                Result::Err(e) => return Result::Err(e),
            }
        }
        Result::Ok(Some(acc))
    }

    /// Counts the remaining items, consuming them.
    #[inline]
    fn count(self) -> usize
    where
        Self: Sized,
    {
        self.fold(0, |n, _| n + 1)
    }

    /// The final item.
    #[inline]
    fn last(self) -> Option<Self::Item>
    where
        Self: Sized,
    {
        self.fold(None, |_, x| Some(x))
    }

    /// Returns `true` if `f` holds for every item. Stops at the first
    /// failure.
    fn all<F>(&mut self, mut f: F) -> bool
    where
        Self: Sized,
        F: FnMut(Self::Item) -> bool,
    {
        while let Some(x) = self.next() {
            if !f(x) {
                return false;
            }
        }
        true
    }

    /// Returns `true` if `f` holds for some item. Stops at the first match.
    fn any<F>(&mut self, mut f: F) -> bool
    where
        Self: Sized,
        F: FnMut(Self::Item) -> bool,
    {
        while let Some(x) = self.next() {
            if f(x) {
                return true;
            }
        }
        false
    }

    /// Returns the first item satisfying `predicate`. The iterator resumes
    /// right after it.
    ///
    /// ```rust
    /// use gust::prelude::*;
    /// use gust::iter;
    ///
    /// let mut it = iter::from_range(1, 10);
    /// assert_eq!(it.find(|x| x % 3 == 0), Some(3));
    /// assert_eq!(it.next(), Some(4));
    /// ```
    fn find<P>(&mut self, mut predicate: P) -> Option<Self::Item>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        while let Some(x) = self.next() {
            if predicate(&x) {
                return Some(x);
            }
        }
        None
    }

    /// Returns the first `Some` produced by `f`.
    fn find_map<B, F>(&mut self, mut f: F) -> Option<B>
    where
        Self: Sized,
        F: FnMut(Self::Item) -> Option<B>,
    {
        while let Some(x) = self.next() {
            if let Some(b) = f(x) {
                return Some(b);
            }
        }
        None
    }

    /// Like [`find`](Iterator::find) with a fallible predicate. Stops at the
    /// first `Err`.
    fn try_find<F>(&mut self, mut f: F) -> Result<Option<Self::Item>>
    where
        Self: Sized,
        F: FnMut(&Self::Item) -> Result<bool>,
    {
        while let Some(x) = self.next() {
            match f(&x) {
                Result::Ok(true) => return Result::Ok(Some(x)),
                Result::Ok(false) => {}
                Result::Err(e) => return Result::Err(e),
            }
        }
        Result::Ok(None)
    }

    /// Returns the index of the first item satisfying `predicate`.
    fn position<P>(&mut self, mut predicate: P) -> Option<usize>
    where
        Self: Sized,
        P: FnMut(Self::Item) -> bool,
    {
        let mut i = 0;
        while let Some(x) = self.next() {
            if predicate(x) {
                return Some(i);
            }
            i += 1;
        }
        None
    }

    /// Splits items into those satisfying `f` and the rest, keeping their
    /// relative order.
    ///
    /// ```rust
    /// use gust::prelude::*;
    /// use gust::iter;
    ///
    /// let (even, odd) = iter::from_range(0, 7).partition(|x| x % 2 == 0);
    /// assert_eq!(even, vec![0, 2, 4, 6]);
    /// assert_eq!(odd, vec![1, 3, 5]);
    /// ```
    fn partition<F>(self, mut f: F) -> (Vec<Self::Item>, Vec<Self::Item>)
    where
        Self: Sized,
        F: FnMut(&Self::Item) -> bool,
    {
        let mut left = Vec::new();
        let mut right = Vec::new();
        self.for_each(|x| {
            if f(&x) {
                left.push(x);
            } else {
                right.push(x);
            }
        });
        (left, right)
    }

    /// Routes each item to the left or right output by the side `f` picks.
    fn partition_map<L, R, F>(self, mut f: F) -> (Vec<L>, Vec<R>)
    where
        Self: Sized,
        F: FnMut(Self::Item) -> Either<L, R>,
    {
        let mut left = Vec::new();
        let mut right = Vec::new();
        self.for_each(|x| match f(x) {
            Either::Left(l) => left.push(l),
            Either::Right(r) => right.push(r),
        });
        (left, right)
    }

    /// Returns `true` if every item satisfying `predicate` comes before every
    /// item that does not.
    fn is_partitioned<P>(mut self, mut predicate: P) -> bool
    where
        Self: Sized,
        P: FnMut(Self::Item) -> bool,
    {
        self.all(&mut predicate) || !self.any(predicate)
    }

    /// Splits an iterator of pairs into two collections.
    fn unzip<A, B>(self) -> (Vec<A>, Vec<B>)
    where
        Self: Sized + Iterator<Item = Pair<A, B>>,
    {
        let mut left = Vec::with_capacity(self.size_hint().0);
        let mut right = Vec::with_capacity(self.size_hint().0);
        self.for_each(|Pair { a, b }| {
            left.push(a);
            right.push(b);
        });
        (left, right)
    }

    /// The greatest item. Ties resolve to the last one.
    #[inline]
    fn max(self) -> Option<Self::Item>
    where
        Self: Sized,
        Self::Item: Ord,
    {
        self.max_by(|a, b| a.cmp(b))
    }

    /// The least item. Ties resolve to the first one.
    #[inline]
    fn min(self) -> Option<Self::Item>
    where
        Self: Sized,
        Self::Item: Ord,
    {
        self.min_by(|a, b| a.cmp(b))
    }

    /// The greatest item under `compare`, which may return either this
    /// crate's [`Ordering`] or [`std::cmp::Ordering`].
    fn max_by<F, O>(self, mut compare: F) -> Option<Self::Item>
    where
        Self: Sized,
        F: FnMut(&Self::Item, &Self::Item) -> O,
        O: Into<Ordering>,
    {
        self.reduce(|a, b| match Into::<Ordering>::into(compare(&a, &b)) {
            Ordering::Greater => a,
            _ => b,
        })
    }

    fn min_by<F, O>(self, mut compare: F) -> Option<Self::Item>
    where
        Self: Sized,
        F: FnMut(&Self::Item, &Self::Item) -> O,
        O: Into<Ordering>,
    {
        self.reduce(|a, b| match Into::<Ordering>::into(compare(&a, &b)) {
            Ordering::Greater => b,
            _ => a,
        })
    }

    fn max_by_key<K, F>(self, mut f: F) -> Option<Self::Item>
    where
        Self: Sized,
        K: Ord,
        F: FnMut(&Self::Item) -> K,
    {
        self.map(|x| Pair::new(f(&x), x))
            .max_by(|x, y| x.a.cmp(&y.a))
            .map(|p| p.b)
    }

    fn min_by_key<K, F>(self, mut f: F) -> Option<Self::Item>
    where
        Self: Sized,
        K: Ord,
        F: FnMut(&Self::Item) -> K,
    {
        self.map(|x| Pair::new(f(&x), x))
            .min_by(|x, y| x.a.cmp(&y.a))
            .map(|p| p.b)
    }

    /// Sums the items with [`std::iter::Sum`].
    #[inline]
    fn sum<S>(self) -> S
    where
        Self: Sized,
        S: std::iter::Sum<Self::Item>,
    {
        S::sum(self.into_std())
    }

    /// Multiplies the items with [`std::iter::Product`].
    #[inline]
    fn product<P>(self) -> P
    where
        Self: Sized,
        P: std::iter::Product<Self::Item>,
    {
        P::product(self.into_std())
    }

    /// Lexicographically compares with another iterator.
    ///
    /// ```rust
    /// use gust::prelude::*;
    /// use gust::iter;
    ///
    /// assert_eq!(iter::from_range(1, 3).cmp(iter::from_range(1, 4)), Ordering::Less);
    /// assert_eq!(iter::from_range(1, 4).cmp(iter::from_range(1, 4)), Ordering::Equal);
    /// ```
    #[inline]
    fn cmp<I>(self, other: I) -> Ordering
    where
        Self: Sized,
        I: Iterator<Item = Self::Item>,
        Self::Item: Ord,
    {
        self.cmp_by(other, |a, b| a.cmp(&b))
    }

    fn cmp_by<I, F, O>(mut self, mut other: I, mut cmp: F) -> Ordering
    where
        Self: Sized,
        I: Iterator,
        F: FnMut(Self::Item, I::Item) -> O,
        O: Into<Ordering>,
    {
        loop {
            let x = match self.next() {
                Some(x) => x,
                None if other.next().is_none() => return Ordering::Equal,
                None => return Ordering::Less,
            };
            let y = match other.next() {
                Some(y) => y,
                None => return Ordering::Greater,
            };
            match Into::<Ordering>::into(cmp(x, y)) {
                Ordering::Equal => {}
                decided => return decided,
            }
        }
    }

    /// Lexicographically compares with another iterator whose items are
    /// only partially ordered.
    fn partial_cmp<I>(mut self, mut other: I) -> Option<Ordering>
    where
        Self: Sized,
        I: Iterator,
        Self::Item: PartialOrd<I::Item>,
    {
        loop {
            let x = match self.next() {
                Some(x) => x,
                None if other.next().is_none() => return Some(Ordering::Equal),
                None => return Some(Ordering::Less),
            };
            let y = match other.next() {
                Some(y) => y,
                None => return Some(Ordering::Greater),
            };
            match Option::from(x.partial_cmp(&y)).map(Ordering::from) {
                Some(Ordering::Equal) => {}
                decided => return decided,
            }
        }
    }

    #[inline]
    fn eq<I>(self, other: I) -> bool
    where
        Self: Sized,
        I: Iterator,
        Self::Item: PartialEq<I::Item>,
    {
        self.eq_by(other, |a, b| a == b)
    }

    fn eq_by<I, F>(mut self, mut other: I, mut eq: F) -> bool
    where
        Self: Sized,
        I: Iterator,
        F: FnMut(Self::Item, I::Item) -> bool,
    {
        loop {
            let x = match self.next() {
                Some(x) => x,
                None => return other.next().is_none(),
            };
            let y = match other.next() {
                Some(y) => y,
                None => return false,
            };
            if !eq(x, y) {
                return false;
            }
        }
    }

    #[inline]
    fn ne<I>(self, other: I) -> bool
    where
        Self: Sized,
        I: Iterator,
        Self::Item: PartialEq<I::Item>,
    {
        !self.eq(other)
    }

    #[inline]
    fn lt<I>(self, other: I) -> bool
    where
        Self: Sized,
        I: Iterator,
        Self::Item: PartialOrd<I::Item>,
    {
        self.partial_cmp(other) == Some(Ordering::Less)
    }

    #[inline]
    fn le<I>(self, other: I) -> bool
    where
        Self: Sized,
        I: Iterator,
        Self::Item: PartialOrd<I::Item>,
    {
        matches!(self.partial_cmp(other), Some(Ordering::Less | Ordering::Equal))
    }

    #[inline]
    fn gt<I>(self, other: I) -> bool
    where
        Self: Sized,
        I: Iterator,
        Self::Item: PartialOrd<I::Item>,
    {
        self.partial_cmp(other) == Some(Ordering::Greater)
    }

    #[inline]
    fn ge<I>(self, other: I) -> bool
    where
        Self: Sized,
        I: Iterator,
        Self::Item: PartialOrd<I::Item>,
    {
        matches!(self.partial_cmp(other), Some(Ordering::Greater | Ordering::Equal))
    }

    /// Returns `true` if the items are in non-decreasing order.
    #[inline]
    fn is_sorted(self) -> bool
    where
        Self: Sized,
        Self::Item: PartialOrd,
    {
        self.is_sorted_by(|a, b| a <= b)
    }

    /// Returns `true` if `in_order` holds for every adjacent pair.
    fn is_sorted_by<F>(mut self, mut in_order: F) -> bool
    where
        Self: Sized,
        F: FnMut(&Self::Item, &Self::Item) -> bool,
    {
        let mut last = match self.next() {
            Some(x) => x,
            None => return true,
        };
        while let Some(curr) = self.next() {
            if !in_order(&last, &curr) {
                return false;
            }
            last = curr;
        }
        true
    }

    #[inline]
    fn is_sorted_by_key<K, F>(self, f: F) -> bool
    where
        Self: Sized,
        F: FnMut(Self::Item) -> K,
        K: PartialOrd,
    {
        self.map(f).is_sorted()
    }
}

/// An iterator that can also pull items from the back.
///
/// Front and back share one cursor; once they meet both ends yield `None`.
///
/// ```rust
/// use gust::prelude::*;
/// use gust::iter;
///
/// let mut it = iter::from_range(1, 6);
/// assert_eq!(it.next(), Some(1));
/// assert_eq!(it.next_back(), Some(5));
/// assert_eq!(it.next(), Some(2));
/// assert_eq!(it.next_back(), Some(4));
/// assert_eq!(it.next(), Some(3));
/// assert_eq!(it.next_back(), None);
/// assert_eq!(it.next(), None);
/// ```
pub trait DoubleEndedIterator: Iterator {
    /// Removes and returns an item from the end.
    fn next_back(&mut self) -> Option<Self::Item>;

    /// Skips `n` items from the back.
    fn advance_back_by(&mut self, n: usize) -> std::result::Result<(), NonZeroUsize> {
        for i in 0..n {
            if self.next_back().is_none() {
                return NonZeroUsize::new(n - i).map_or(Ok(()), Err);
            }
        }
        Ok(())
    }

    /// Returns the `n`th item from the end (zero-based).
    #[inline]
    fn nth_back(&mut self, n: usize) -> Option<Self::Item> {
        if self.advance_back_by(n).is_err() {
            return None;
        }
        self.next_back()
    }

    /// Folds from the back.
    ///
    /// ```rust
    /// use gust::prelude::*;
    /// use gust::iter;
    ///
    /// let s = iter::from_slice(&["a", "b", "c"]).rfold(String::new(), |acc, x| acc + x);
    /// assert_eq!(s, "cba");
    /// ```
    fn rfold<B, F>(mut self, init: B, mut f: F) -> B
    where
        Self: Sized,
        F: FnMut(B, Self::Item) -> B,
    {
        let mut acc = init;
        while let Some(x) = self.next_back() {
            acc = f(acc, x);
        }
        acc
    }

    /// [`try_fold`](Iterator::try_fold) from the back.
    fn try_rfold<B, Acc, F>(&mut self, init: Acc, mut f: F) -> ControlFlow<B, Acc>
    where
        Self: Sized,
        F: FnMut(Acc, Self::Item) -> ControlFlow<B, Acc>,
    {
        let mut acc = init;
        while let Some(x) = self.next_back() {
            match f(acc, x) {
                Continue(next) => acc = next,
                Break(b) => return Break(b),
            }
        }
        Continue(acc)
    }

    /// [`find`](Iterator::find) from the back.
    fn rfind<P>(&mut self, mut predicate: P) -> Option<Self::Item>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        while let Some(x) = self.next_back() {
            if predicate(&x) {
                return Some(x);
            }
        }
        None
    }

    /// Searches from the back and returns the match's index counted from the
    /// front.
    ///
    /// ```rust
    /// use gust::prelude::*;
    /// use gust::iter;
    ///
    /// let mut it = iter::from_slice(&[1, 2, 3, 2]);
    /// assert_eq!(it.rposition(|x| *x == 2), Some(3));
    /// assert_eq!(it.rposition(|x| *x == 2), Some(1));
    /// ```
    fn rposition<P>(&mut self, mut predicate: P) -> Option<usize>
    where
        Self: Sized + ExactSizeIterator,
        P: FnMut(Self::Item) -> bool,
    {
        let mut i = self.len();
        while let Some(x) = self.next_back() {
            i -= 1;
            if predicate(x) {
                return Some(i);
            }
        }
        None
    }

    /// Swaps the ends.
    #[inline]
    fn rev(self) -> Rev<Self>
    where
        Self: Sized,
    {
        Rev::new(self)
    }
}

/// An iterator that knows exactly how many items it has left.
///
/// Its [`size_hint`](Iterator::size_hint) is always `(n, Some(n))`. Adapters
/// that count from the back ([`take`](Iterator::take),
/// [`skip`](Iterator::skip), [`enumerate`](Iterator::enumerate),
/// [`rposition`](DoubleEndedIterator::rposition)) need this guarantee, so a
/// [`filter`](Iterator::filter)ed source cannot be driven from the back
/// through them.
///
/// ```rust
/// use gust::prelude::*;
/// use gust::iter;
///
/// let mut it = iter::from_slice(&[1, 2, 3]);
/// assert_eq!(it.len(), 3);
/// it.next();
/// assert_eq!(it.len(), 2);
/// assert!(!it.is_empty());
/// ```
///
/// A filtered source has no exact length, so it cannot be taken from the
/// back:
///
/// ```compile_fail
/// use gust::prelude::*;
/// use gust::iter;
///
/// let mut evens = iter::from_range(0, 10).filter(|x| x % 2 == 0).take(2);
/// evens.next_back();
/// ```
pub trait ExactSizeIterator: Iterator {
    /// Exact number of items left.
    #[inline]
    fn len(&self) -> usize {
        let (lower, upper) = self.size_hint();
        debug_assert_eq!(upper, Some(lower));
        lower
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<I: Iterator + ?Sized> Iterator for &mut I {
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Option<I::Item> {
        (**self).next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (**self).size_hint()
    }

    #[inline]
    fn advance_by(&mut self, n: usize) -> std::result::Result<(), NonZeroUsize> {
        (**self).advance_by(n)
    }

    #[inline]
    fn nth(&mut self, n: usize) -> Option<I::Item> {
        (**self).nth(n)
    }
}

impl<I: DoubleEndedIterator + ?Sized> DoubleEndedIterator for &mut I {
    #[inline]
    fn next_back(&mut self) -> Option<I::Item> {
        (**self).next_back()
    }
}

impl<I: ExactSizeIterator + ?Sized> ExactSizeIterator for &mut I {
    #[inline]
    fn len(&self) -> usize {
        (**self).len()
    }
}

impl<I: Iterator + ?Sized> Iterator for Box<I> {
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Option<I::Item> {
        (**self).next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (**self).size_hint()
    }

    #[inline]
    fn advance_by(&mut self, n: usize) -> std::result::Result<(), NonZeroUsize> {
        (**self).advance_by(n)
    }
}

impl<I: DoubleEndedIterator + ?Sized> DoubleEndedIterator for Box<I> {
    #[inline]
    fn next_back(&mut self) -> Option<I::Item> {
        (**self).next_back()
    }
}

impl<I: ExactSizeIterator + ?Sized> ExactSizeIterator for Box<I> {
    #[inline]
    fn len(&self) -> usize {
        (**self).len()
    }
}

/// Either arm drives iteration, so branches may build different iterator
/// types behind one return type.
impl<L, R> Iterator for Either<L, R>
where
    L: Iterator,
    R: Iterator<Item = L::Item>,
{
    type Item = L::Item;

    #[inline]
    fn next(&mut self) -> Option<L::Item> {
        match self {
            Either::Left(l) => l.next(),
            Either::Right(r) => r.next(),
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            Either::Left(l) => l.size_hint(),
            Either::Right(r) => r.size_hint(),
        }
    }
}

impl<L, R> DoubleEndedIterator for Either<L, R>
where
    L: DoubleEndedIterator,
    R: DoubleEndedIterator<Item = L::Item>,
{
    #[inline]
    fn next_back(&mut self) -> Option<L::Item> {
        match self {
            Either::Left(l) => l.next_back(),
            Either::Right(r) => r.next_back(),
        }
    }
}

impl<L, R> ExactSizeIterator for Either<L, R>
where
    L: ExactSizeIterator,
    R: ExactSizeIterator<Item = L::Item>,
{
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{errbox::ErrBox, result::err_msg};

    fn nums() -> Vec<i32> {
        vec![1, 2, 3, 4, 5]
    }

    #[test]
    fn test_default_size_hint() {
        let it = from_fn(|| Some(1));
        assert_eq!(it.size_hint(), (0, None));
        assert_eq!(it.remaining(), 0);
    }

    #[test]
    fn test_nth_and_advance() {
        let v = nums();
        let mut it = from_slice(&v);
        assert_eq!(it.nth(1), Some(&2));
        assert_eq!(it.nth(0), Some(&3));
        assert_eq!(it.nth(5), None);
        assert_eq!(it.next(), None);
        let mut it = from_slice(&v);
        assert_eq!(it.advance_by(7), Err(NonZeroUsize::new(2).unwrap()));
    }

    #[test]
    fn test_count_last_collect() {
        let v = nums();
        assert_eq!(from_slice(&v).count(), 5);
        assert_eq!(from_slice(&v).last(), Some(&5));
        assert_eq!(empty::<i32>().last(), None);
        let copy = from_slice(&v).copied().collect();
        assert_eq!(copy, v);
    }

    #[test]
    fn test_fold_and_try_fold_agree() {
        let v = nums();
        let folded = from_slice(&v).fold(0, |a, x| a + x);
        let tried: ControlFlow<(), i32> = from_slice(&v).try_fold(0, |a, x| Continue(a + x));
        assert_eq!(tried, Continue(folded));
    }

    #[test]
    fn test_try_fold_short_circuits() {
        let mut pulled = 0;
        let mut it = from_range(1i8, 30).inspect(|_| pulled += 1);
        let r = it.try_fold(0i8, |acc, x| match acc.checked_add(x) {
            std::option::Option::Some(sum) => Continue(sum),
            std::option::Option::None => Break(acc),
        });
        assert_eq!(r, Break(120));
        assert_eq!(it.next(), Some(17));
        drop(it);
        assert_eq!(pulled, 17);
    }

    #[test]
    fn test_reduce_and_try_reduce() {
        assert_eq!(from_range(1, 5).reduce(|a, b| a * b), Some(24));
        assert_eq!(empty::<i32>().reduce(|a, b| a * b), None);

        let mut it = from_range(1, 10);
        let r = it.try_reduce(|a, b| if b < 4 { Result::Ok(a + b) } else { err_msg("too big") });
        assert_eq!(r, Result::Err(ErrBox::msg("too big")));
        assert_eq!(it.next(), Some(5));
    }

    #[test]
    fn test_search_consumers_preserve_state() {
        let mut it = from_range(0, 10);
        assert!(it.any(|x| x == 3));
        assert_eq!(it.next(), Some(4));
        assert!(!it.all(|x| x < 7));
        assert_eq!(it.next(), Some(8));
        let mut it = from_range(0, 10);
        assert_eq!(it.position(|x| x == 2), Some(2));
        assert_eq!(it.position(|x| x == 4), Some(1));
        assert_eq!(it.find_map(|x| if x > 6 { Some(x * 10) } else { None }), Some(70));
        assert_eq!(it.next(), Some(8));
    }

    #[test]
    fn test_try_find() {
        let mut it = from_range(0, 10);
        let found = it.try_find(|x| Result::Ok(*x > 2));
        assert_eq!(found, Result::Ok(Some(3)));
        let failed = it.try_find(|x| if *x == 5 { err_msg("five") } else { Result::Ok(false) });
        assert!(failed.is_err());
        assert_eq!(it.next(), Some(6));
        assert_eq!(from_range(0, 3).try_find(|_| Result::Ok(false)), Result::Ok(None));
    }

    #[test]
    fn test_partition_family() {
        let (a, b) = from_range(0, 6).partition(|x| x % 3 == 0);
        assert_eq!((a, b), (vec![0, 3], vec![1, 2, 4, 5]));
        let (l, r) = from_range(0, 4).partition_map(|x| {
            if x % 2 == 0 {
                Either::Left(x)
            } else {
                Either::Right(x.to_string())
            }
        });
        assert_eq!(l, vec![0, 2]);
        assert_eq!(r, vec!["1".to_string(), "3".to_string()]);
        assert!(from_slice(&[2, 4, 1, 3]).is_partitioned(|x| x % 2 == 0));
        assert!(!from_slice(&[2, 1, 4]).is_partitioned(|x| x % 2 == 0));
        assert!(empty::<i32>().is_partitioned(|_| true));
    }

    #[test]
    fn test_next_chunk() {
        let mut it = from_range(0, 3);
        assert_eq!(it.next_chunk::<2>(), Ok([0, 1]));
        assert_eq!(it.next_chunk::<2>(), Err(vec![2]));
        assert_eq!(it.next_chunk::<0>(), Ok([]));
    }

    #[test]
    fn test_min_max() {
        let v = [3, 1, 4, 1, 5];
        assert_eq!(from_slice(&v).max(), Some(&5));
        assert_eq!(from_slice(&v).min(), Some(&1));
        let words = ["bb", "a", "cc"];
        assert_eq!(from_slice(&words).max_by_key(|w| w.len()), Some(&"cc"));
        assert_eq!(from_slice(&words).min_by_key(|w| w.len()), Some(&"a"));
        assert_eq!(from_slice(&words).max_by(|a, b| a.len().cmp(&b.len())), Some(&"cc"));
        assert_eq!(from_slice(&words).min_by(|a, b| compare_len(a, b)), Some(&"a"));
        assert_eq!(empty::<i32>().max(), None);
    }

    fn compare_len(a: &&str, b: &&str) -> Ordering {
        crate::compare(&a.len(), &b.len())
    }

    #[test]
    fn test_sum_product() {
        assert_eq!(from_range(1, 5).sum::<i32>(), 10);
        assert_eq!(from_range(1, 5).product::<i32>(), 24);
        assert_eq!(empty::<i32>().sum::<i32>(), 0);
    }

    #[test]
    fn test_comparisons() {
        assert_eq!(from_slice(&[1, 2]).cmp(from_slice(&[1, 2, 0])), Ordering::Less);
        assert_eq!(from_slice(&[1, 3]).cmp(from_slice(&[1, 2, 0])), Ordering::Greater);
        assert_eq!(
            from_slice(&[1.0, f64::NAN]).partial_cmp(from_slice(&[1.0, 2.0])),
            None
        );
        assert!(from_range(0, 3).eq(from_slice(&[0, 1, 2]).copied()));
        assert!(from_range(0, 3).ne(from_range(0, 4)));
        assert!(from_range(0, 3).lt(from_range(0, 4)));
        assert!(from_range(0, 3).le(from_range(0, 3)));
        assert!(from_range(1, 3).gt(from_range(0, 9)));
        assert!(from_range(1, 3).ge(from_range(1, 3)));
        assert!(from_slice(&["a", "bb"]).eq_by(from_range(1, 3), |s, n| s.len() == n));
    }

    #[test]
    fn test_is_sorted() {
        assert!(from_slice(&[1, 2, 2, 9]).is_sorted());
        assert!(!from_slice(&[1, 3, 2]).is_sorted());
        assert!(empty::<i32>().is_sorted());
        assert!(from_slice(&[3, 2, 1]).is_sorted_by(|a, b| a >= b));
        assert!(from_slice(&["c", "bb", "aaa"]).is_sorted_by_key(|s| s.len()));
    }

    #[test]
    fn test_unzip() {
        let (a, b) = from_range(0, 3).map(|x| Pair::new(x, x * 2)).unzip();
        assert_eq!(a, vec![0, 1, 2]);
        assert_eq!(b, vec![0, 2, 4]);
    }

    #[test]
    fn test_double_ended_consumers() {
        let v = nums();
        assert_eq!(from_slice(&v).rfold(0, |acc, x| acc * 10 + x), 54321);
        let mut it = from_slice(&v);
        assert_eq!(it.rfind(|x| **x % 2 == 0), Some(&4));
        assert_eq!(it.next_back(), Some(&3));
        let mut it = from_slice(&v);
        assert_eq!(it.nth_back(1), Some(&4));
        assert_eq!(it.advance_back_by(10), Err(NonZeroUsize::new(7).unwrap()));
        let r: ControlFlow<i32, i32> = from_slice(&v).try_rfold(0, |acc, x| {
            if *x == 3 {
                Break(acc)
            } else {
                Continue(acc + x)
            }
        });
        assert_eq!(r, Break(9));
    }

    #[test]
    fn test_rposition_counts_from_current_front() {
        let mut it = from_range(0, 10).map(|x| x * 2);
        it.next();
        it.next_back();
        assert_eq!(it.rposition(|x| x == 8), Some(3));

        let evens = from_range(0, 10).filter(|x| x % 2 == 0).collect();
        assert_eq!(from_vec(evens).rposition(|x| x == 8), Some(4));
    }

    #[test]
    fn test_exact_len_through_adapters() {
        let mut it = from_range(0, 10).skip(2).take(5).enumerate();
        assert_eq!(it.len(), 5);
        it.next_back();
        assert_eq!(it.len(), 4);
        assert_eq!(from_std(vec![1, 2, 3]).rev().len(), 3);
        assert!(empty::<u8>().is_empty());
    }

    #[test]
    fn test_by_ref_and_boxed() {
        let mut it = from_range(0, 5);
        let head = it.by_ref().take(2).collect();
        assert_eq!(head, vec![0, 1]);
        let mut boxed: Box<dyn Iterator<Item = i32>> = Box::new(it);
        assert_eq!(boxed.next(), Some(2));
        assert_eq!(boxed.size_hint(), (2, Some(2)));
        assert_eq!(boxed.collect(), vec![3, 4]);
    }

    #[test]
    fn test_either_iterates_either_arm() {
        let pick = |left: bool| -> Either<Range<i32>, Rev<Range<i32>>> {
            if left {
                Either::Left(from_range(0, 3))
            } else {
                Either::Right(from_range(0, 3).rev())
            }
        };
        assert_eq!(pick(true).collect(), vec![0, 1, 2]);
        assert_eq!(pick(false).collect(), vec![2, 1, 0]);
        assert_eq!(pick(false).next_back(), Some(0));
    }
}
