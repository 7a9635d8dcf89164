//! `HashMap` helpers.
//!
//! Callbacks receive `(&key, &value)`. Output order follows the map's own
//! iteration order, which is unspecified.
//!
//! ```rust
//! use std::collections::HashMap;
//! use gust::prelude::*;
//! use gust::dict;
//!
//! let stock = HashMap::from([("apple", 3), ("pear", 0), ("plum", 5)]);
//! let in_stock = dict::filter(&stock, |_, n| *n > 0);
//! assert_eq!(in_stock.len(), 2);
//! assert_eq!(dict::get(&stock, &"pear"), Some(&0));
//! assert!(dict::some(&stock, |k, _| k.starts_with('p')));
//! ```

use std::{borrow::Borrow, collections::HashMap, hash::Hash};

use crate::{
    iter::{self, Iterator},
    option::Option,
    pair::{DictEntry, Pair},
};

/// The value stored under `key`.
#[inline]
pub fn get<'a, K, V, Q>(m: &'a HashMap<K, V>, key: &Q) -> Option<&'a V>
where
    K: Eq + Hash + Borrow<Q>,
    Q: Eq + Hash + ?Sized,
{
    m.get(key).into()
}

pub fn keys<K: Clone, V>(m: &HashMap<K, V>) -> Vec<K> {
    iter::from_std(m.keys()).cloned().collect()
}

pub fn values<K, V: Clone>(m: &HashMap<K, V>) -> Vec<V> {
    iter::from_std(m.values()).cloned().collect()
}

/// Clones every entry into a `Vec` of pairs.
pub fn entries<K: Clone, V: Clone>(m: &HashMap<K, V>) -> Vec<DictEntry<K, V>> {
    iter::from_map(m)
        .map(|Pair { a, b }| Pair::new(a.clone(), b.clone()))
        .collect()
}

/// Builds one element per entry.
pub fn to_vec<K, V, T, F>(m: &HashMap<K, V>, mut f: F) -> Vec<T>
where
    F: FnMut(&K, &V) -> T,
{
    iter::from_map(m).map(|Pair { a, b }| f(a, b)).collect()
}

pub fn every<K, V, F>(m: &HashMap<K, V>, mut f: F) -> bool
where
    F: FnMut(&K, &V) -> bool,
{
    iter::from_map(m).all(|Pair { a, b }| f(a, b))
}

pub fn some<K, V, F>(m: &HashMap<K, V>, mut f: F) -> bool
where
    F: FnMut(&K, &V) -> bool,
{
    iter::from_map(m).any(|Pair { a, b }| f(a, b))
}

/// Some entry accepted by `f`. Which one is unspecified when several match.
pub fn find<'a, K, V, F>(m: &'a HashMap<K, V>, mut f: F) -> Option<DictEntry<&'a K, &'a V>>
where
    F: FnMut(&K, &V) -> bool,
{
    iter::from_map(m).find(|p| f(p.a, p.b))
}

/// Clones the entries accepted by `f` into a new map.
pub fn filter<K, V, F>(m: &HashMap<K, V>, mut f: F) -> HashMap<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
    F: FnMut(&K, &V) -> bool,
{
    iter::from_map(m)
        .filter(|p| f(p.a, p.b))
        .map(|Pair { a, b }| (a.clone(), b.clone()))
        .collect_into()
}

/// Builds a new map from the entries `f` keeps, possibly re-keyed and
/// re-valued. Later entries win on key collisions.
///
/// ```rust
/// use std::collections::HashMap;
/// use gust::prelude::*;
/// use gust::dict;
///
/// let ages = HashMap::from([("ann", 31), ("bob", 17)]);
/// let adults = dict::filter_map(&ages, |name, age| {
///     if *age >= 18 { Some(Pair::new(name.to_uppercase(), *age)) } else { None }
/// });
/// assert_eq!(adults, HashMap::from([("ANN".to_string(), 31)]));
/// ```
pub fn filter_map<K, V, K2, V2, F>(m: &HashMap<K, V>, mut f: F) -> HashMap<K2, V2>
where
    K2: Eq + Hash,
    F: FnMut(&K, &V) -> Option<DictEntry<K2, V2>>,
{
    iter::from_map(m)
        .filter_map(|Pair { a, b }| f(a, b))
        .map(Pair::split)
        .collect_into()
}

/// Maps every entry to a new key and value.
pub fn map<K, V, K2, V2, F>(m: &HashMap<K, V>, mut f: F) -> HashMap<K2, V2>
where
    K2: Eq + Hash,
    F: FnMut(&K, &V) -> DictEntry<K2, V2>,
{
    iter::from_map(m)
        .map(|Pair { a, b }| f(a, b).split())
        .collect_into()
}

/// Re-keys every entry, keeping values.
pub fn map_key<K, V, K2, F>(m: &HashMap<K, V>, mut f: F) -> HashMap<K2, V>
where
    K2: Eq + Hash,
    V: Clone,
    F: FnMut(&K, &V) -> K2,
{
    iter::from_map(m)
        .map(|Pair { a, b }| (f(a, b), b.clone()))
        .collect_into()
}

/// Replaces every value, keeping keys.
pub fn map_value<K, V, V2, F>(m: &HashMap<K, V>, mut f: F) -> HashMap<K, V2>
where
    K: Eq + Hash + Clone,
    F: FnMut(&K, &V) -> V2,
{
    iter::from_map(m)
        .map(|Pair { a, b }| (a.clone(), f(a, b)))
        .collect_into()
}
