//! Slice and `Vec` helpers.
//!
//! Callbacks that look at elements receive `(index, &value)`. Functions that
//! build a collection return a fresh `Vec` and never alias their input.
//!
//! ```rust
//! use gust::prelude::*;
//! use gust::vec;
//!
//! let v = [3, 1, 4, 1, 5];
//! assert_eq!(vec::index_of(&v, &1), Some(1));
//! assert_eq!(vec::last_index_of(&v, &1), Some(3));
//! assert_eq!(vec::filter(&v, |_, x| *x > 2), vec![3, 4, 5]);
//! assert_eq!(vec::sets_union(&[&v, &[9, 3]]), vec![3, 1, 4, 5, 9]);
//! ```

use std::{
    collections::{HashMap, HashSet},
    hash::Hash,
    iter::Iterator as _,
};

use crate::{
    iter::{self, DoubleEndedIterator, Iterator},
    option::Option::{self, None, Some},
    pair::{Pair, VecEntry},
};

/// The element at `index`.
#[inline]
pub fn get<T>(s: &[T], index: usize) -> Option<&T> {
    s.get(index).into()
}

/// The first element, or `T::default()` for an empty slice.
#[inline]
pub fn one<T: Clone + Default>(s: &[T]) -> T {
    s.first().cloned().unwrap_or_default()
}

/// Returns `true` if `f` holds for every element.
pub fn every<T, F>(s: &[T], mut f: F) -> bool
where
    F: FnMut(usize, &T) -> bool,
{
    iter::from_slice(s).enumerate().all(|Pair { a, b }| f(a, b))
}

/// Returns `true` if `f` holds for at least one element.
pub fn some<T, F>(s: &[T], mut f: F) -> bool
where
    F: FnMut(usize, &T) -> bool,
{
    iter::from_slice(s).enumerate().any(|Pair { a, b }| f(a, b))
}

/// The first element accepted by `f`, with its index.
pub fn find<T, F>(s: &[T], mut f: F) -> Option<VecEntry<&T>>
where
    F: FnMut(usize, &T) -> bool,
{
    iter::from_slice(s).enumerate().find(|p| f(p.a, p.b))
}

/// Clones the elements accepted by `f`.
pub fn filter<T, F>(s: &[T], mut f: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(usize, &T) -> bool,
{
    iter::from_slice(s)
        .enumerate()
        .filter(|p| f(p.a, p.b))
        .map(|p| p.b.clone())
        .collect()
}

/// Maps every element.
pub fn map<T, U, F>(s: &[T], mut f: F) -> Vec<U>
where
    F: FnMut(usize, &T) -> U,
{
    iter::from_slice(s).enumerate().map(|Pair { a, b }| f(a, b)).collect()
}

/// Folds front to back. Without `init` the first element seeds the
/// accumulator and is skipped. An empty slice gives `T::default()`.
///
/// ```rust
/// use gust::prelude::*;
/// use gust::vec;
///
/// let digits = [1, 2, 3];
/// assert_eq!(vec::reduce(&digits, |acc, _, x| acc * 10 + x, None), 123);
/// assert_eq!(vec::reduce_right(&digits, |acc, _, x| acc * 10 + x, None), 321);
/// assert_eq!(vec::reduce(&digits, |acc, _, x| acc + x, Some(100)), 106);
/// ```
pub fn reduce<T, F>(s: &[T], mut f: F, init: Option<T>) -> T
where
    T: Clone + Default,
    F: FnMut(T, usize, &T) -> T,
{
    if s.is_empty() {
        return T::default();
    }
    let (acc, start) = match init {
        Some(acc) => (acc, 0),
        None => (s[0].clone(), 1),
    };
    iter::from_slice(&s[start..])
        .enumerate()
        .fold(acc, |acc, Pair { a, b }| f(acc, a + start, b))
}

/// Folds back to front. Without `init` the last element seeds the
/// accumulator and is skipped. An empty slice gives `T::default()`.
pub fn reduce_right<T, F>(s: &[T], mut f: F, init: Option<T>) -> T
where
    T: Clone + Default,
    F: FnMut(T, usize, &T) -> T,
{
    let last = match s.len().checked_sub(1) {
        std::option::Option::Some(last) => last,
        std::option::Option::None => return T::default(),
    };
    let (acc, end) = match init {
        Some(acc) => (acc, s.len()),
        None => (s[last].clone(), last),
    };
    iter::from_slice(&s[..end])
        .enumerate()
        .rfold(acc, |acc, Pair { a, b }| f(acc, a, b))
}

#[inline]
pub fn includes<T: PartialEq>(s: &[T], value: &T) -> bool {
    s.contains(value)
}

/// Index of the first element equal to `value`.
#[inline]
pub fn index_of<T: PartialEq>(s: &[T], value: &T) -> Option<usize> {
    iter::from_slice(s).position(|x| x == value)
}

/// Index of the last element equal to `value`.
#[inline]
pub fn last_index_of<T: PartialEq>(s: &[T], value: &T) -> Option<usize> {
    iter::from_slice(s).rposition(|x| x == value)
}

/// Removes and returns the last element.
#[inline]
pub fn pop<T>(v: &mut Vec<T>) -> Option<T> {
    v.pop().into()
}

/// Removes and returns the first element.
#[inline]
pub fn shift<T>(v: &mut Vec<T>) -> Option<T> {
    if v.is_empty() {
        return None;
    }
    Some(v.remove(0))
}

/// Appends each element not already present. Returns the new length.
pub fn push_distinct<T, I>(v: &mut Vec<T>, elements: I) -> usize
where
    T: PartialEq,
    I: IntoIterator<Item = T>,
{
    for x in elements {
        if !v.contains(&x) {
            v.push(x);
        }
    }
    v.len()
}

/// Removes the first occurrence of each distinct element of `elements`.
/// Returns the new length.
pub fn remove_first<T: PartialEq>(v: &mut Vec<T>, elements: &[T]) -> usize {
    for (i, x) in elements.iter().enumerate() {
        if elements[..i].contains(x) {
            continue;
        }
        if let std::option::Option::Some(pos) = v.iter().position(|y| y == x) {
            v.remove(pos);
        }
    }
    v.len()
}

/// Removes every occurrence of every element of `elements`. Returns the new
/// length.
pub fn remove_every<T: PartialEq>(v: &mut Vec<T>, elements: &[T]) -> usize {
    v.retain(|y| !elements.contains(y));
    v.len()
}

/// Joins slices into a new `Vec`.
pub fn concat<T: Clone>(slices: &[&[T]]) -> Vec<T> {
    let mut out = Vec::with_capacity(slices.iter().map(|s| s.len()).sum());
    for s in slices {
        out.extend_from_slice(s);
    }
    out
}

/// Deduplicates `v` in place, keeping first occurrences in order, and
/// returns how often each element appeared.
///
/// ```rust
/// use gust::vec;
///
/// let mut v = vec!["a", "b", "a", "c", "a"];
/// let counts = vec::distinct(&mut v);
/// assert_eq!(v, ["a", "b", "c"]);
/// assert_eq!(counts["a"], 3);
/// ```
pub fn distinct<T>(v: &mut Vec<T>) -> HashMap<T, usize>
where
    T: Eq + Hash + Clone,
{
    let mut counts = HashMap::with_capacity(v.len());
    v.retain(|x| {
        let n = counts.entry(x.clone()).or_insert(0);
        *n += 1;
        *n == 1
    });
    counts
}

/// Deduplicates `v` in place by the key `f` computes, keeping first
/// occurrences in order.
pub fn distinct_by<T, U, F>(v: &mut Vec<T>, mut f: F)
where
    U: Eq + Hash,
    F: FnMut(usize, &T) -> U,
{
    let mut seen = HashSet::with_capacity(v.len());
    let mut i = 0;
    v.retain(|x| {
        let key = f(i, x);
        i += 1;
        seen.insert(key)
    });
}

/// For elements present in every slice, the smallest number of times they
/// occur in any one of them. Empty when any slice is empty or none is given.
pub fn intersect<T>(slices: &[&[T]]) -> HashMap<T, usize>
where
    T: Eq + Hash + Clone,
{
    if slices.is_empty() || slices.iter().any(|s| s.is_empty()) {
        return HashMap::new();
    }
    let counts: Vec<HashMap<T, usize>> = slices
        .iter()
        .map(|s| {
            let mut v = s.to_vec();
            distinct(&mut v)
        })
        .collect();
    let (first, rest) = (&counts[0], &counts[1..]);
    first
        .iter()
        .filter_map(|(x, n)| {
            let mut min = *n;
            for other in rest {
                match other.get(x) {
                    std::option::Option::Some(m) => min = min.min(*m),
                    std::option::Option::None => return std::option::Option::None,
                }
            }
            std::option::Option::Some((x.clone(), min))
        })
        .collect()
}

/// Elements of any of the sets, each once, in first-seen order.
pub fn sets_union<T>(sets: &[&[T]]) -> Vec<T>
where
    T: Eq + Hash + Clone,
{
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for x in sets.iter().flat_map(|s| s.iter()) {
        if seen.insert(x) {
            out.push(x.clone());
        }
    }
    out
}

/// Elements of `base` found in every one of `others`, each once, in the
/// order of `base`.
pub fn sets_intersect<T>(base: &[T], others: &[&[T]]) -> Vec<T>
where
    T: Eq + Hash + Clone,
{
    let others: Vec<HashSet<&T>> = others.iter().map(|s| s.iter().collect()).collect();
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for x in base {
        if seen.insert(x) && others.iter().all(|set| set.contains(x)) {
            out.push(x.clone());
        }
    }
    out
}

/// Elements of `base` found in none of `others`, each once, in the order of
/// `base`.
pub fn sets_difference<T>(base: &[T], others: &[&[T]]) -> Vec<T>
where
    T: Eq + Hash + Clone,
{
    let excluded: HashSet<&T> = others.iter().flat_map(|s| s.iter()).collect();
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for x in base {
        if seen.insert(x) && !excluded.contains(x) {
            out.push(x.clone());
        }
    }
    out
}
