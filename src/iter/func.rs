//! Free-function forms of the iterator combinators that introduce a new item
//! type.
//!
//! Each function is the method of the same name with the receiver moved to
//! the first argument.

use crate::{
    control_flow::ControlFlow,
    iter::{Chain, Enumerate, FilterMap, FlatMap, Flatten, Iterator, Map, MapWhile, Scan, Zip},
    option::Option,
    pair::Pair,
};

/// ```rust
/// use gust::prelude::*;
/// use gust::iter;
///
/// let lens = iter::map(iter::from_slice(&["a", "bcd"]), |s| s.len()).collect();
/// assert_eq!(lens, vec![1, 3]);
/// ```
#[inline]
pub fn map<I, B, F>(iter: I, f: F) -> Map<I, F>
where
    I: Iterator,
    F: FnMut(I::Item) -> B,
{
    iter.map(f)
}

#[inline]
pub fn filter_map<I, B, F>(iter: I, f: F) -> FilterMap<I, F>
where
    I: Iterator,
    F: FnMut(I::Item) -> Option<B>,
{
    iter.filter_map(f)
}

#[inline]
pub fn flat_map<I, U, F>(iter: I, f: F) -> FlatMap<I, U, F>
where
    I: Iterator,
    U: Iterator,
    F: FnMut(I::Item) -> U,
{
    iter.flat_map(f)
}

#[inline]
pub fn flatten<I>(iter: I) -> Flatten<I>
where
    I: Iterator,
    I::Item: Iterator,
{
    iter.flatten()
}

#[inline]
pub fn zip<A, B>(a: A, b: B) -> Zip<A, B>
where
    A: Iterator,
    B: Iterator,
{
    a.zip(b)
}

#[inline]
pub fn unzip<I, A, B>(iter: I) -> (Vec<A>, Vec<B>)
where
    I: Iterator<Item = Pair<A, B>>,
{
    iter.unzip()
}

#[inline]
pub fn enumerate<I: Iterator>(iter: I) -> Enumerate<I> {
    iter.enumerate()
}

#[inline]
pub fn chain<A, B>(a: A, b: B) -> Chain<A, B>
where
    A: Iterator,
    B: Iterator<Item = A::Item>,
{
    a.chain(b)
}

/// ```rust
/// use gust::prelude::*;
/// use gust::iter;
///
/// let csv = iter::fold(iter::from_range(1, 4), String::new(), |acc, x| {
///     if acc.is_empty() { x.to_string() } else { format!("{acc},{x}") }
/// });
/// assert_eq!(csv, "1,2,3");
/// ```
#[inline]
pub fn fold<I, B, F>(iter: I, init: B, f: F) -> B
where
    I: Iterator,
    F: FnMut(B, I::Item) -> B,
{
    iter.fold(init, f)
}

#[inline]
pub fn try_fold<I, B, Acc, F>(iter: &mut I, init: Acc, f: F) -> ControlFlow<B, Acc>
where
    I: Iterator,
    F: FnMut(Acc, I::Item) -> ControlFlow<B, Acc>,
{
    iter.try_fold(init, f)
}

#[inline]
pub fn scan<I, St, B, F>(iter: I, initial_state: St, f: F) -> Scan<I, St, F>
where
    I: Iterator,
    F: FnMut(&mut St, I::Item) -> Option<B>,
{
    iter.scan(initial_state, f)
}

#[inline]
pub fn map_while<I, B, F>(iter: I, f: F) -> MapWhile<I, F>
where
    I: Iterator,
    F: FnMut(I::Item) -> Option<B>,
{
    iter.map_while(f)
}

#[inline]
pub fn find_map<I, B, F>(iter: &mut I, f: F) -> Option<B>
where
    I: Iterator,
    F: FnMut(I::Item) -> Option<B>,
{
    iter.find_map(f)
}
